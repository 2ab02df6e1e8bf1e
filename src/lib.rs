//! Input-driven rigid-body flight controller.
//!
//! [`components::FlightController`] turns pilot commands into angular and linear
//! velocity changes on any [`physics::RigidBodyProxy`] and switches between the
//! grounded and flying regimes. [`plugins::FlightControlPlugin`] hosts it in a Bevy
//! app on the fixed timestep.
pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
