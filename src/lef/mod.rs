//! Leading edge flap schedule and its lagged actuation.
//!
//! The flap command follows angle of attack and the dynamic to static
//! pressure ratio. In trim the steady state schedule is used directly; a
//! running instance passes it through a lag integrator and a rate limited
//! actuator supplied by the host.

use crate::host::{Actuator, ActuatorSpec, Atmos, Capabilities, CapabilityError, Integrator};
use crate::utils::{
    rad_to_deg, State, LEF_ACTUATOR_RATE_LIMIT, LEF_ACTUATOR_TIME_CONSTANT, LEF_ALPHA_GAIN,
    LEF_BIAS, LEF_LAG_GAIN, LEF_MAX_DEFLECTION, LEF_MIN_DEFLECTION, LEF_QBAR_GAIN,
};
use tracing::{debug, trace};

fn schedule(alpha_deg: f64, atmos: &Atmos) -> f64 {
    LEF_ALPHA_GAIN * alpha_deg - LEF_QBAR_GAIN * atmos.pressure_ratio() + LEF_BIAS
}

/// Flap deflection (deg) once the lag has settled
pub fn steady_state_deflection(atmos: &Atmos, state: &State) -> f64 {
    schedule(rad_to_deg(state.alpha), atmos).clamp(LEF_MIN_DEFLECTION, LEF_MAX_DEFLECTION)
}

pub struct LeadingEdgeFlap {
    actuator: Box<dyn Actuator>,
    integrator: Box<dyn Integrator>,
    feedback: f64,
}

impl std::fmt::Debug for LeadingEdgeFlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadingEdgeFlap")
            .field("deflection", &self.actuator.past())
            .field("integrator", &self.integrator.past())
            .field("feedback", &self.feedback)
            .finish()
    }
}

impl LeadingEdgeFlap {
    pub fn new(capabilities: &dyn Capabilities, state: &State) -> Result<Self, CapabilityError> {
        let atmos = capabilities.atmos(state.altitude, state.velocity);
        let alpha_deg = rad_to_deg(state.alpha);
        let initial = steady_state_deflection(&atmos, state);

        let actuator = capabilities.new_actuator(ActuatorSpec {
            initial,
            top: LEF_MAX_DEFLECTION,
            bottom: LEF_MIN_DEFLECTION,
            rate_limit: LEF_ACTUATOR_RATE_LIMIT,
            gain: 1.0 / LEF_ACTUATOR_TIME_CONSTANT,
        })?;
        let integrator = capabilities.new_integrator(-alpha_deg)?;
        debug!("leading edge flap created at {:.4} deg", initial);

        Ok(Self {
            actuator,
            integrator,
            feedback: 0.0,
        })
    }

    /// Advance the flap to time `t` and return its deflection (deg).
    ///
    /// Nothing is committed to `self.feedback` unless both the integrator and
    /// the actuator accept the update.
    pub fn update(
        &mut self,
        capabilities: &dyn Capabilities,
        state: &State,
        t: f64,
    ) -> Result<f64, CapabilityError> {
        let atmos = capabilities.atmos(state.altitude, state.velocity);
        let alpha_deg = rad_to_deg(state.alpha);

        let lagged = self
            .integrator
            .update((alpha_deg - self.feedback) * LEF_LAG_GAIN, t)
            .map_err(|e| {
                debug!("flap integrator failed at t={}: {}", t, e);
                e
            })?;
        let feedback = lagged + 2.0 * alpha_deg;

        let command = schedule(feedback, &atmos);
        let deflection = self.actuator.update(command, t).map_err(|e| {
            debug!("flap actuator failed at t={}: {}", t, e);
            e
        })?;

        self.feedback = feedback;
        trace!(
            "lef t={} alpha={:.4} feedback={:.4} cmd={:.4} out={:.4}",
            t,
            alpha_deg,
            feedback,
            command,
            deflection
        );
        Ok(deflection)
    }

    /// Last actuator output, without advancing time
    pub fn past(&self) -> f64 {
        self.actuator.past()
    }

    pub fn reset(&mut self) -> Result<(), CapabilityError> {
        self.actuator.reset()?;
        self.integrator.reset()?;
        self.feedback = 0.0;
        Ok(())
    }

    #[inline]
    pub fn feedback(&self) -> f64 {
        self.feedback
    }
}

impl Drop for LeadingEdgeFlap {
    fn drop(&mut self) {
        trace!("releasing leading edge flap handles");
    }
}
