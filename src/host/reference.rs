use super::{
    Actuator, ActuatorSpec, Atmos, Capabilities, CapabilityError, Integrator,
};
use tracing::debug;

const RHO0: f64 = 2.377e-3; // slug/ft^3
const TROPOPAUSE_ALTITUDE: f64 = 35000.0; // ft
const TROPOPAUSE_TEMPERATURE: f64 = 390.0; // degR

fn ensure_finite(what: &'static str, value: f64) -> Result<f64, CapabilityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("rejecting non-finite {}: {}", what, value);
        Err(CapabilityError::NonFinite { what, value })
    }
}

/// Standard atmosphere used with the F-16 data set
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAtmosphere;

impl StandardAtmosphere {
    pub fn atmos(&self, altitude: f64, velocity: f64) -> Atmos {
        let tfac = 1.0 - 0.703e-5 * altitude;
        let temp = if altitude > TROPOPAUSE_ALTITUDE {
            TROPOPAUSE_TEMPERATURE
        } else {
            519.0 * tfac
        };

        let rho = RHO0 * tfac.powf(4.14);
        let mach = velocity / (1.4 * 1716.3 * temp).sqrt();
        let qbar = 0.5 * rho * velocity * velocity;
        let mut ps = 1715.0 * rho * temp;
        if ps.abs() < 1.0e-6 {
            ps = 1715.0;
        }

        Atmos { mach, qbar, ps }
    }
}

/// First order lag with command and rate saturation.
///
/// Each update takes one RK4 step over the time since the previous update.
#[derive(Debug, Clone)]
pub struct FirstOrderActuator {
    spec: ActuatorSpec,
    state: f64,
    output: f64,
    last_time: f64,
}

impl FirstOrderActuator {
    pub fn new(spec: ActuatorSpec) -> Self {
        Self {
            spec,
            state: spec.initial,
            output: spec.initial.clamp(spec.bottom, spec.top),
            last_time: 0.0,
        }
    }

    /// Internal (unclamped) state
    pub fn state(&self) -> f64 {
        self.state
    }

    fn rate(&self, state: f64, command: f64) -> f64 {
        let ActuatorSpec {
            top,
            bottom,
            rate_limit,
            gain,
            ..
        } = self.spec;
        (gain * (command.clamp(bottom, top) - state)).clamp(-rate_limit, rate_limit)
    }
}

impl Actuator for FirstOrderActuator {
    fn update(&mut self, input: f64, t: f64) -> Result<f64, CapabilityError> {
        let input = ensure_finite("actuator input", input)?;
        let t = ensure_finite("actuator time", t)?;

        let h = t - self.last_time;
        let x = self.state;
        let k1 = self.rate(x, input);
        let k2 = self.rate(x + 0.5 * h * k1, input);
        let k3 = self.rate(x + 0.5 * h * k2, input);
        let k4 = self.rate(x + h * k3, input);

        self.state = x + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
        self.last_time = t;
        self.output = self.state.clamp(self.spec.bottom, self.spec.top);
        Ok(self.output)
    }

    fn past(&self) -> f64 {
        self.output
    }

    fn reset(&mut self) -> Result<(), CapabilityError> {
        *self = Self::new(self.spec);
        Ok(())
    }
}

/// Trapezoid rule accumulator
#[derive(Debug, Clone)]
pub struct TrapezoidIntegrator {
    initial: f64,
    value: f64,
    last_input: f64,
    last_time: f64,
}

impl TrapezoidIntegrator {
    pub fn new(initial: f64) -> Self {
        Self {
            initial,
            value: initial,
            last_input: 0.0,
            last_time: 0.0,
        }
    }
}

impl Integrator for TrapezoidIntegrator {
    fn update(&mut self, input: f64, t: f64) -> Result<f64, CapabilityError> {
        let input = ensure_finite("integrator input", input)?;
        let t = ensure_finite("integrator time", t)?;

        self.value += (t - self.last_time) * (input + self.last_input) * 0.5;
        self.last_input = input;
        self.last_time = t;
        Ok(self.value)
    }

    fn past(&self) -> f64 {
        self.value
    }

    fn reset(&mut self) -> Result<(), CapabilityError> {
        *self = Self::new(self.initial);
        Ok(())
    }
}

/// Standard atmosphere plus the reference actuator and integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCapabilities {
    pub atmosphere: StandardAtmosphere,
}

impl Capabilities for StandardCapabilities {
    fn atmos(&self, altitude: f64, velocity: f64) -> Atmos {
        self.atmosphere.atmos(altitude, velocity)
    }

    fn new_actuator(&self, spec: ActuatorSpec) -> Result<Box<dyn Actuator>, CapabilityError> {
        Ok(Box::new(FirstOrderActuator::new(spec)))
    }

    fn new_integrator(&self, initial: f64) -> Result<Box<dyn Integrator>, CapabilityError> {
        Ok(Box::new(TrapezoidIntegrator::new(initial)))
    }
}
