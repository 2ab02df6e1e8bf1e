use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::physics::{local_forward, RigidBodyProxy};

/// Rigid-body state for a controlled aircraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,

    /// Whether the integrator applies gravity to this body
    pub use_gravity: bool,

    /// Kinematic bodies are moved only by their velocities, never by gravity
    pub kinematic: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            use_gravity: true,
            kinematic: false,
        }
    }
}

impl RigidBody {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
            ..Default::default()
        }
    }

    /// Create a body at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a body at rest with a heading (rotation about world up, radians)
    pub fn at_position_and_heading(position: Vector3<f64>, heading: f64) -> Self {
        Self {
            position,
            attitude: UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading),
            ..Default::default()
        }
    }
}

impl RigidBodyProxy for RigidBody {
    fn linear_velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vector3<f64>) {
        self.velocity = velocity;
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vector3<f64>) {
        self.angular_velocity = angular_velocity;
    }

    fn world_to_local_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(direction)
    }

    fn local_to_world_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.transform_vector(direction)
    }

    fn forward_axis(&self) -> Vector3<f64> {
        self.attitude.transform_vector(&local_forward())
    }

    fn gravity_enabled(&self) -> bool {
        self.use_gravity
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.use_gravity = enabled;
    }

    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }
}
