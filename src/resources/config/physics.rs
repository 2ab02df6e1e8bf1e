use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed step [s]
    pub timestep: f64,
    /// World-frame gravitational acceleration [m/s²]
    pub gravity: Vector3<f64>,
    /// Height of a flat ground plane, if any [m]
    pub ground_height: Option<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            ground_height: Some(0.0),
        }
    }
}
