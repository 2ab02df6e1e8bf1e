use nalgebra::{UnitQuaternion, Vector3};
use plane_controller::components::RigidBody;
use std::f64::consts::PI;

/// A body at rest on the runway, nose along +Z
pub fn parked_body() -> RigidBody {
    RigidBody::default()
}

/// A body sinking with its nose pitched down and turned off the +Z axis
pub fn sinking_pitched_body() -> RigidBody {
    let heading = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI / 3.0);
    let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI / 8.0);
    RigidBody {
        position: Vector3::new(0.0, 2.0, 0.0),
        velocity: Vector3::new(1.0, -4.0, -2.0),
        attitude: heading * pitch,
        ..Default::default()
    }
}

/// A banked body tumbling about all three axes
pub fn tumbling_body() -> RigidBody {
    RigidBody {
        position: Vector3::new(0.0, 500.0, 0.0),
        attitude: UnitQuaternion::from_euler_angles(PI / 6.0, -0.2, 0.4),
        angular_velocity: Vector3::new(0.6, -0.4, 0.5),
        ..Default::default()
    }
}
