#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{
    assert_angular_velocity_within_limits, assert_body_valid, assert_vector_eq,
};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
