use nalgebra::{UnitQuaternion, Vector3};
use plane_controller::components::{FlightController, FlightParameters, RigidBody};

pub const TEST_DT: f64 = 1.0 / 50.0;

/// Flight parameters with distinct per-axis limits so clamping bugs show up
pub fn create_test_params() -> FlightParameters {
    FlightParameters {
        max_pitch_angular_velocity: 1.5,
        max_yaw_angular_velocity: 0.75,
        max_roll_angular_velocity: 3.0,
        ..Default::default()
    }
}

/// A controller that has already left the ground
pub fn create_flying_controller(
    params: FlightParameters,
    body: RigidBody,
) -> FlightController<RigidBody> {
    let mut controller = FlightController::new(params, body);
    assert!(controller.takeoff(), "takeoff from the ground must succeed");
    controller
}

/// Rotate the body by its current angular velocity, standing in for the engine's integrator
pub fn rotate_body(body: &mut RigidBody, dt: f64) {
    let rotation = UnitQuaternion::from_scaled_axis(body.angular_velocity * dt);
    body.attitude = rotation * body.attitude;
}

/// Run `steps` controller ticks, rotating the body between ticks
pub fn fly_steps(controller: &mut FlightController<RigidBody>, steps: usize, dt: f64) {
    for _ in 0..steps {
        controller.advance(dt);
        rotate_body(controller.body_mut(), dt);
    }
}

pub fn horizontal(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, 0.0, v.z)
}
