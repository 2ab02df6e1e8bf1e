//! Axis conventions shared by the controller and the rigid-body substrate.
//!
//! World frame has +Y up and XZ horizontal. Body frame: +X right, +Y up, +Z forward,
//! so a body-local angular velocity reads (pitch rate, yaw rate, roll rate) and a
//! positive rotation about +Y turns the nose towards +X.
use nalgebra::Vector3;

#[inline]
pub fn world_up() -> Vector3<f64> {
    Vector3::y()
}

#[inline]
pub fn local_right() -> Vector3<f64> {
    Vector3::x()
}

#[inline]
pub fn local_up() -> Vector3<f64> {
    Vector3::y()
}

#[inline]
pub fn local_forward() -> Vector3<f64> {
    Vector3::z()
}
