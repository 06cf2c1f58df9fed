pub mod axis;
pub mod catalogue;
pub mod loader;
pub mod registry;
pub mod tensor;

#[cfg(test)]
pub(crate) mod fixtures;

pub use axis::{Axis, AxisError, AxisId, AxisSet};
pub use catalogue::TableId;
pub use registry::{TableRegistry, TableView};
pub use tensor::{Tensor, TensorError};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Failed to load {name}: {reason}")]
    LoadFailure { name: String, reason: String },

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Shape mismatch for {name}: expected {expected:?}, found {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}
