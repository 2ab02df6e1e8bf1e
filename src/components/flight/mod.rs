pub mod config;
pub mod controller;
pub mod input;
pub mod state;
pub mod telemetry;

pub use config::{ConfigError, FlightParameters};
pub use controller::FlightController;
pub use input::{InputCommand, InputPort, InputSource, InputState, YawDirection};
pub use state::{FlightState, Transition};
pub use telemetry::FlightTelemetry;
