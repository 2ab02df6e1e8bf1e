use approx::assert_relative_eq;
use nalgebra::Vector3;
use plane_controller::components::{FlightController, FlightParameters, RigidBody};

/// Assert that a body's state is finite
#[track_caller]
pub fn assert_body_valid(body: &RigidBody) {
    assert!(
        body.position.iter().all(|x| x.is_finite()),
        "Position contains non-finite values"
    );
    assert!(
        body.velocity.iter().all(|x| x.is_finite()),
        "Velocity contains non-finite values"
    );
    assert!(
        body.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity contains non-finite values"
    );
    assert!(
        (body.attitude.into_inner().norm() - 1.0).abs() < 1e-9,
        "Attitude is not a unit quaternion"
    );
}

/// Assert every body-frame angular velocity component is within its limit
#[track_caller]
pub fn assert_angular_velocity_within_limits(
    controller: &FlightController<RigidBody>,
    params: &FlightParameters,
) {
    const TOLERANCE: f64 = 1e-9;
    let local = controller.local_angular_velocity();
    assert!(
        local.x.abs() <= params.max_pitch_angular_velocity + TOLERANCE,
        "Pitch rate {} exceeds {}",
        local.x,
        params.max_pitch_angular_velocity
    );
    assert!(
        local.y.abs() <= params.max_yaw_angular_velocity + TOLERANCE,
        "Yaw rate {} exceeds {}",
        local.y,
        params.max_yaw_angular_velocity
    );
    assert!(
        local.z.abs() <= params.max_roll_angular_velocity + TOLERANCE,
        "Roll rate {} exceeds {}",
        local.z,
        params.max_roll_angular_velocity
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
