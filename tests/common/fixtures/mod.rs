mod bodies;
mod mock;

pub use bodies::*;
pub use mock::MockBody;
