//! Aerodynamic coefficient build up from the high fidelity tables.

pub mod assembler;
pub mod coefficients;

pub use assembler::{compose, TableTerms};
pub use coefficients::{
    AileronDeltas, BaseCoefficients, DampingDeltas, DampingDerivatives, LefDeltas,
    OtherCoefficients, RudderDeltas, ZeroElevator,
};
