//! Host facing F-16 aerodynamic model.
//!
//! [`AeroModel`] owns the loaded tables, the host capabilities and the
//! registry of running instances. It replaces process wide state: several
//! models can coexist, each with its own data and instances.

use crate::aerodynamics::{compose, TableTerms};
use crate::config::ModelConfig;
use crate::host::Capabilities;
use crate::instances::InstanceRegistry;
use crate::lef::{steady_state_deflection, LeadingEdgeFlap};
use crate::tables::TableRegistry;
use crate::utils::{
    Coefficients, Control, ControlLimits, ModelError, PlantConstants, Result, State,
    F16_CONSTANTS, F16_CONTROL_LIMITS,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info};

type FlapHandle = Arc<Mutex<LeadingEdgeFlap>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic elsewhere never leaves the guarded data half updated
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct AeroModel {
    tables: Arc<TableRegistry>,
    capabilities: Arc<dyn Capabilities>,
    instances: Mutex<InstanceRegistry<FlapHandle>>,
}

impl std::fmt::Debug for AeroModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeroModel")
            .field("instances", &self.instance_count())
            .finish_non_exhaustive()
    }
}

impl AeroModel {
    /// Load every table from `config.data_dir` and start with no instances.
    pub fn install(config: &ModelConfig, capabilities: Arc<dyn Capabilities>) -> Result<Self> {
        config.validate()?;
        let tables = TableRegistry::load(&config.data_dir).map_err(|e| {
            error!("f16 model install failed: {}", e);
            e
        })?;
        info!("f16 model installed");
        Ok(Self::new(
            Arc::new(tables),
            capabilities,
            config.registry_capacity,
        ))
    }

    pub fn new(
        tables: Arc<TableRegistry>,
        capabilities: Arc<dyn Capabilities>,
        registry_capacity: usize,
    ) -> Self {
        Self {
            tables,
            capabilities,
            instances: Mutex::new(InstanceRegistry::with_capacity(registry_capacity)),
        }
    }

    pub fn tables(&self) -> &Arc<TableRegistry> {
        &self.tables
    }

    pub fn constants(&self) -> PlantConstants {
        F16_CONSTANTS
    }

    pub fn control_limits(&self) -> ControlLimits {
        F16_CONTROL_LIMITS
    }

    /// Coefficients with the flap at its steady state schedule. Needs no
    /// instance.
    pub fn trim(&self, state: &State, control: &Control) -> Result<Coefficients> {
        let atmos = self.capabilities.atmos(state.altitude, state.velocity);
        let lef = steady_state_deflection(&atmos, state);
        compose(&self.tables, state, control, lef, &F16_CONSTANTS)
    }

    pub fn init_instance(&self, id: &str, state: &State, _control: &Control) -> Result<()> {
        // Build the flap outside the registry lock
        let flap = LeadingEdgeFlap::new(self.capabilities.as_ref(), state).map_err(|e| {
            error!("f16 instance '{}' init failed: {}", id, e);
            e
        })?;

        let mut instances = lock(&self.instances);
        if instances.contains(id) {
            error!("f16 instance '{}' already exists", id);
            return Err(ModelError::DuplicateInstance(id.to_string()));
        }
        instances.insert(id, Arc::new(Mutex::new(flap)));
        debug!("f16 instance '{}' created", id);
        Ok(())
    }

    fn instance(&self, id: &str) -> Result<FlapHandle> {
        let instances = lock(&self.instances);
        let flap = instances.lookup(id).map_err(|e| {
            error!("f16 instance '{}': {}", id, e);
            e
        })?;
        Ok(Arc::clone(flap))
    }

    /// Advance instance `id` to time `t` and return its coefficients.
    ///
    /// The tables are evaluated before the flap moves, so a failed lookup
    /// leaves the instance untouched.
    pub fn step(&self, id: &str, state: &State, control: &Control, t: f64) -> Result<Coefficients> {
        let flap = self.instance(id)?;
        let terms = TableTerms::evaluate(&self.tables, state, control).map_err(|e| {
            error!("f16 instance '{}' step failed: {}", id, e);
            e
        })?;
        let lef = lock(&flap)
            .update(self.capabilities.as_ref(), state, t)
            .map_err(|e| {
                error!("f16 instance '{}' flap update failed: {}", id, e);
                e
            })?;
        terms.assemble(state, control, lef, &F16_CONSTANTS)
    }

    /// Return the flap of instance `id` to its initial condition.
    pub fn reset_instance(&self, id: &str) -> Result<()> {
        let flap = self.instance(id)?;
        let mut flap = lock(&flap);
        flap.reset().map_err(|e| {
            error!("f16 instance '{}' reset failed: {}", id, e);
            e
        })?;
        Ok(())
    }

    /// Last flap deflection (deg) of instance `id`
    pub fn flap_deflection(&self, id: &str) -> Result<f64> {
        let flap = self.instance(id)?;
        let deflection = lock(&flap).past();
        Ok(deflection)
    }

    pub fn delete_instance(&self, id: &str) -> Result<()> {
        let removed = lock(&self.instances).remove(id).map_err(|e| {
            error!("f16 instance '{}' delete failed: {}", id, e);
            e
        })?;
        drop(removed);
        debug!("f16 instance '{}' deleted", id);
        Ok(())
    }

    pub fn instance_count(&self) -> usize {
        lock(&self.instances).len()
    }
}

impl Drop for AeroModel {
    fn drop(&mut self) {
        let instances = self
            .instances
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !instances.is_empty() {
            debug!("releasing {} f16 instances", instances.len());
        }
        instances.clear();
        info!("f16 model uninstalled");
    }
}
