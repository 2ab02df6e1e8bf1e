use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid flight parameters: {0}")]
    ValidationError(String),
}

/// Tunables for the flight controller, fixed for the lifetime of a controller.
///
/// Speeds are in distance per second, angular limits in radians per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParameters {
    /// Yaw torque gain about world up
    pub yaw_speed: f64,
    /// Pitch torque gain about the local right axis
    pub pitch_speed: f64,
    /// Roll torque gain about the local forward axis
    pub roll_speed: f64,

    /// Cruise speed the flying aircraft ramps towards
    pub default_speed: f64,
    pub accelerating: f64,
    /// Speed decay rate above cruise, also the grounded damping rate
    pub decelerating: f64,

    pub pitch_roll_sensitivity_mouse: f64,
    pub pitch_roll_sensitivity_keyboard: f64,

    /// Whole-vector angular damping applied when no rotational input is held
    pub angular_stabilization_factor: f64,

    pub max_pitch_angular_velocity: f64,
    pub max_yaw_angular_velocity: f64,
    pub max_roll_angular_velocity: f64,

    /// Rate at which yaw rotation opposing the yaw command is removed
    pub yaw_cancellation_rate: f64,
    /// Damping on pitch and roll axes that are not being commanded
    pub pitch_roll_cancellation_factor: f64,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            yaw_speed: 50.0,
            pitch_speed: 100.0,
            roll_speed: 200.0,
            default_speed: 10.0,
            accelerating: 10.0,
            decelerating: 5.0,
            pitch_roll_sensitivity_mouse: 0.1,
            pitch_roll_sensitivity_keyboard: 1.0,
            angular_stabilization_factor: 2.0,
            max_pitch_angular_velocity: 2.0,
            max_yaw_angular_velocity: 2.0,
            max_roll_angular_velocity: 2.0,
            yaw_cancellation_rate: 10.0,
            pitch_roll_cancellation_factor: 5.0,
        }
    }
}

impl FlightParameters {
    /// Per-axis angular velocity limits in body frame (pitch, yaw, roll)
    pub fn max_angular_velocity(&self) -> Vector3<f64> {
        Vector3::new(
            self.max_pitch_angular_velocity,
            self.max_yaw_angular_velocity,
            self.max_roll_angular_velocity,
        )
    }

    /// Speed the aircraft leaves the ground with
    pub fn takeoff_speed(&self) -> f64 {
        self.default_speed * crate::utils::TAKEOFF_SPEED_FRACTION
    }

    fn named_values(&self) -> [(&'static str, f64); 14] {
        [
            ("yaw_speed", self.yaw_speed),
            ("pitch_speed", self.pitch_speed),
            ("roll_speed", self.roll_speed),
            ("default_speed", self.default_speed),
            ("accelerating", self.accelerating),
            ("decelerating", self.decelerating),
            (
                "pitch_roll_sensitivity_mouse",
                self.pitch_roll_sensitivity_mouse,
            ),
            (
                "pitch_roll_sensitivity_keyboard",
                self.pitch_roll_sensitivity_keyboard,
            ),
            (
                "angular_stabilization_factor",
                self.angular_stabilization_factor,
            ),
            ("max_pitch_angular_velocity", self.max_pitch_angular_velocity),
            ("max_yaw_angular_velocity", self.max_yaw_angular_velocity),
            ("max_roll_angular_velocity", self.max_roll_angular_velocity),
            ("yaw_cancellation_rate", self.yaw_cancellation_rate),
            (
                "pitch_roll_cancellation_factor",
                self.pitch_roll_cancellation_factor,
            ),
        ]
    }

    /// Check every scalar is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load and validate parameters from a YAML (or `.json`) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let params: Self = if is_json(path) {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };
        params.validate()?;
        Ok(params)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
