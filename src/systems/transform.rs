use bevy::prelude::*;

use crate::components::{Aircraft, RigidBody};

/// Copies each aircraft's rigid-body pose onto its Bevy `Transform`.
pub fn transform_sync_system(mut query: Query<(&Aircraft, &mut Transform)>) {
    for (aircraft, mut transform) in query.iter_mut() {
        let (translation, rotation) = body_pose(aircraft.body());
        transform.translation = translation;
        transform.rotation = rotation;
    }
}

/// Body pose in Bevy's single-precision types.
///
/// Bevy looks down -Z while the body flies along +Z, so the pose is mirrored
/// through the XY plane: z is negated and so are the x and y quaternion parts.
pub fn body_pose(body: &RigidBody) -> (Vec3, Quat) {
    let p = body.position;
    let q = body.attitude.quaternion();
    (
        Vec3::new(p.x as f32, p.y as f32, -p.z as f32),
        Quat::from_xyzw(-q.i as f32, -q.j as f32, q.k as f32, q.w as f32),
    )
}
