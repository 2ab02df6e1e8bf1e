use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight regime of a controlled aircraft
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightState {
    /// On the ground: no forward thrust, velocities decay.
    #[default]
    Grounded,
    /// Airborne: forward motion enabled.
    Flying,
}

impl FlightState {
    pub fn is_flying(&self) -> bool {
        matches!(self, FlightState::Flying)
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, FlightState::Grounded)
    }
}

impl fmt::Display for FlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightState::Grounded => write!(f, "grounded"),
            FlightState::Flying => write!(f, "flying"),
        }
    }
}

/// A requested regime change, latched until the next fixed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Takeoff,
    Land,
}
