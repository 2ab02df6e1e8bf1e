use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{Aircraft, RigidBody};
use crate::resources::PhysicsConfig;

/// System to integrate the rigid bodies of all aircraft over one fixed step.
///
/// Runs after the flight controllers have written their velocities.
pub fn rigid_body_integrator_system(mut query: Query<&mut Aircraft>, config: Res<PhysicsConfig>) {
    let dt = config.timestep;

    query.par_iter_mut().for_each(|mut aircraft| {
        integrate_body(aircraft.body_mut(), &config.gravity, dt);

        if let Some(ground_height) = config.ground_height {
            resolve_ground_contact(aircraft.body_mut(), ground_height);
        }
    });
}

/// Semi-implicit Euler step of position and attitude from the body's velocities.
pub(crate) fn integrate_body(body: &mut RigidBody, gravity: &Vector3<f64>, dt: f64) {
    if body.use_gravity && !body.kinematic {
        body.velocity += gravity * dt;
    }

    body.position += body.velocity * dt;

    // World-frame angular velocity, so the increment premultiplies
    if body.angular_velocity.norm() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(body.angular_velocity * dt);
        body.attitude = rotation * body.attitude;

        // Ensure quaternion normalization
        body.attitude = UnitQuaternion::from_quaternion(body.attitude.into_inner().normalize());
    }
}

/// Keep the body on or above a flat ground plane
pub(crate) fn resolve_ground_contact(body: &mut RigidBody, ground_height: f64) {
    if body.position.y < ground_height {
        body.position.y = ground_height;
        if body.velocity.y < 0.0 {
            body.velocity.y = 0.0;
        }
    }
}
