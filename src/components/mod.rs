pub mod aircraft;
pub mod controller;
pub mod flight;
pub mod rigid_body;

pub use aircraft::Aircraft;
pub use controller::{KeyBindings, PlayerController};
pub use flight::{
    ConfigError, FlightController, FlightParameters, FlightState, FlightTelemetry, InputCommand,
    InputPort, InputSource, InputState, Transition, YawDirection,
};
pub use rigid_body::RigidBody;
