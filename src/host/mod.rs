//! Capabilities the model consumes from its host.
//!
//! The flap model never constructs its own actuator or integrator; it asks a
//! [`Capabilities`] implementation for them and owns the boxed handles for as
//! long as the flap state lives.

pub mod reference;

pub use reference::{FirstOrderActuator, StandardAtmosphere, StandardCapabilities, TrapezoidIntegrator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapabilityError {
    #[error("Actuator failure: {0}")]
    Actuator(String),

    #[error("Integrator failure: {0}")]
    Integrator(String),

    #[error("Non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Air data at the current flight condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Atmos {
    pub mach: f64,
    /// Dynamic pressure (lbf/ft^2)
    pub qbar: f64,
    /// Static pressure (lbf/ft^2)
    pub ps: f64,
}

impl Atmos {
    /// Dynamic to static pressure ratio
    #[inline]
    pub fn pressure_ratio(&self) -> f64 {
        self.qbar / self.ps
    }
}

/// Construction arguments of a rate- and output-limited actuator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorSpec {
    pub initial: f64,
    pub top: f64,
    pub bottom: f64,
    pub rate_limit: f64,
    pub gain: f64,
}

pub trait Actuator: Send {
    /// Drive the actuator with `input` up to time `t`, returning the new output.
    fn update(&mut self, input: f64, t: f64) -> Result<f64, CapabilityError>;
    /// Last output, without advancing time
    fn past(&self) -> f64;
    fn reset(&mut self) -> Result<(), CapabilityError>;
}

pub trait Integrator: Send {
    fn update(&mut self, input: f64, t: f64) -> Result<f64, CapabilityError>;
    fn past(&self) -> f64;
    fn reset(&mut self) -> Result<(), CapabilityError>;
}

/// Everything the host supplies. Implementations are shared across all
/// instances and may be called from several threads.
pub trait Capabilities: Send + Sync {
    fn atmos(&self, altitude: f64, velocity: f64) -> Atmos;
    fn new_actuator(&self, spec: ActuatorSpec) -> Result<Box<dyn Actuator>, CapabilityError>;
    fn new_integrator(&self, initial: f64) -> Result<Box<dyn Integrator>, CapabilityError>;
}
