use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::FlightState;

/// Point-in-time view of a controller and its body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub state: FlightState,
    pub current_speed: f64,
    /// World frame [m/s]
    pub linear_velocity: Vector3<f64>,
    /// Body frame (pitch, yaw, roll) [rad/s]
    pub local_angular_velocity: Vector3<f64>,
    pub gravity_enabled: bool,
}

impl FlightTelemetry {
    pub fn ground_speed(&self) -> f64 {
        Vector3::new(self.linear_velocity.x, 0.0, self.linear_velocity.z).norm()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
