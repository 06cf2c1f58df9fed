use f16_aero::host::{FirstOrderActuator, StandardAtmosphere, TrapezoidIntegrator};
use f16_aero::{Actuator, ActuatorSpec, Atmos, Capabilities, CapabilityError, Integrator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Reference capabilities whose actuators can be made to fail on demand
#[derive(Default)]
pub struct FaultyCapabilities {
    pub fail_actuators: Arc<AtomicBool>,
}

struct FaultyActuator {
    inner: FirstOrderActuator,
    fail: Arc<AtomicBool>,
}

impl Actuator for FaultyActuator {
    fn update(&mut self, input: f64, t: f64) -> Result<f64, CapabilityError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CapabilityError::Actuator("injected fault".to_string()));
        }
        self.inner.update(input, t)
    }

    fn past(&self) -> f64 {
        self.inner.past()
    }

    fn reset(&mut self) -> Result<(), CapabilityError> {
        self.inner.reset()
    }
}

impl Capabilities for FaultyCapabilities {
    fn atmos(&self, altitude: f64, velocity: f64) -> Atmos {
        StandardAtmosphere.atmos(altitude, velocity)
    }

    fn new_actuator(&self, spec: ActuatorSpec) -> Result<Box<dyn Actuator>, CapabilityError> {
        Ok(Box::new(FaultyActuator {
            inner: FirstOrderActuator::new(spec),
            fail: self.fail_actuators.clone(),
        }))
    }

    fn new_integrator(&self, initial: f64) -> Result<Box<dyn Integrator>, CapabilityError> {
        Ok(Box::new(TrapezoidIntegrator::new(initial)))
    }
}

impl FaultyCapabilities {
    pub fn set_failing(&self, failing: bool) {
        self.fail_actuators.store(failing, Ordering::SeqCst);
    }
}
