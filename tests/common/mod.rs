#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_coefficients_eq, assert_coefficients_valid};

pub use helpers::*;

pub use fixtures::*;
