mod flight;

pub use flight::{flight_control_system, flight_keyboard_system};
