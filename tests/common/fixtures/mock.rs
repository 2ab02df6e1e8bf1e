use nalgebra::{Rotation3, Vector3};
use plane_controller::physics::{local_forward, RigidBodyProxy};

/// Test double over plain vectors and a rotation matrix
#[derive(Debug, Clone)]
pub struct MockBody {
    pub linear_velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    pub rotation: Rotation3<f64>,
    pub gravity: bool,
    pub kinematic: bool,
    pub writes: usize,
}

impl MockBody {
    pub fn new(rotation: Rotation3<f64>) -> Self {
        Self {
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            rotation,
            gravity: false,
            kinematic: true,
            writes: 0,
        }
    }
}

impl RigidBodyProxy for MockBody {
    fn linear_velocity(&self) -> Vector3<f64> {
        self.linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vector3<f64>) {
        self.writes += 1;
        self.linear_velocity = velocity;
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vector3<f64>) {
        self.writes += 1;
        self.angular_velocity = angular_velocity;
    }

    fn world_to_local_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.inverse() * direction
    }

    fn local_to_world_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * direction
    }

    fn forward_axis(&self) -> Vector3<f64> {
        self.rotation * local_forward()
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity = enabled;
    }

    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }
}
