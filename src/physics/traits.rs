use nalgebra::Vector3;

/// Velocity and orientation access to a simulated rigid body.
///
/// Linear and angular velocities are expressed in the world frame. The controller
/// is the only external writer of these values during its fixed step.
pub trait RigidBodyProxy {
    fn linear_velocity(&self) -> Vector3<f64>;
    fn set_linear_velocity(&mut self, velocity: Vector3<f64>);

    fn angular_velocity(&self) -> Vector3<f64>;
    fn set_angular_velocity(&mut self, angular_velocity: Vector3<f64>);

    /// Rotate a world-frame direction into the body frame
    fn world_to_local_direction(&self, direction: &Vector3<f64>) -> Vector3<f64>;
    /// Rotate a body-frame direction into the world frame
    fn local_to_world_direction(&self, direction: &Vector3<f64>) -> Vector3<f64>;

    /// Unit vector along the body's nose, in world frame
    fn forward_axis(&self) -> Vector3<f64>;

    fn gravity_enabled(&self) -> bool;
    fn set_gravity_enabled(&mut self, enabled: bool);

    fn is_kinematic(&self) -> bool;
    fn set_kinematic(&mut self, kinematic: bool);
}

impl<T: RigidBodyProxy + ?Sized> RigidBodyProxy for &mut T {
    fn linear_velocity(&self) -> Vector3<f64> {
        (**self).linear_velocity()
    }

    fn set_linear_velocity(&mut self, velocity: Vector3<f64>) {
        (**self).set_linear_velocity(velocity)
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        (**self).angular_velocity()
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vector3<f64>) {
        (**self).set_angular_velocity(angular_velocity)
    }

    fn world_to_local_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        (**self).world_to_local_direction(direction)
    }

    fn local_to_world_direction(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        (**self).local_to_world_direction(direction)
    }

    fn forward_axis(&self) -> Vector3<f64> {
        (**self).forward_axis()
    }

    fn gravity_enabled(&self) -> bool {
        (**self).gravity_enabled()
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        (**self).set_gravity_enabled(enabled)
    }

    fn is_kinematic(&self) -> bool {
        (**self).is_kinematic()
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        (**self).set_kinematic(kinematic)
    }
}
