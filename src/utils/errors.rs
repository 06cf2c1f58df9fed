use crate::config::ConfigError;
use crate::host::CapabilityError;
use crate::instances::RegistryError;
use crate::interpolation::InterpolationError;
use crate::tables::TableError;
use thiserror::Error;

/// Failure of a host-facing operation. Every failure is local to the call
/// that raised it.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    #[error("Interpolation failure: non-finite value in {family}")]
    InterpolationFailure { family: &'static str },

    #[error("Instance not found: {0}")]
    NotFound(String),

    #[error("Instance already exists: {0}")]
    DuplicateInstance(String),

    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<RegistryError> for ModelError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => ModelError::NotFound(id),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
