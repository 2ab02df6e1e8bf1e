pub mod frames;
pub mod traits;

pub use frames::{local_forward, local_right, local_up, world_up};
pub use traits::RigidBodyProxy;
