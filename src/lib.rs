pub mod aerodynamics;
pub mod config;
pub mod host;
pub mod instances;
pub mod interpolation;
pub mod lef;
pub mod model;
pub mod tables;
pub mod utils;

pub use config::{ConfigError, ModelConfig};
pub use host::{
    Actuator, ActuatorSpec, Atmos, Capabilities, CapabilityError, Integrator, StandardCapabilities,
};
pub use model::AeroModel;
pub use tables::{TableId, TableRegistry};
pub use utils::{
    Coefficients, Control, ControlLimits, ModelError, PlantConstants, Result, State,
};
