use thiserror::Error;

use crate::components::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),
}
