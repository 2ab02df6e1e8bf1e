mod controller;
pub mod physics;
mod transform;

pub use controller::{flight_control_system, flight_keyboard_system};
pub use physics::rigid_body_integrator_system;
pub use transform::{body_pose, transform_sync_system};
