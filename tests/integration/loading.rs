use f16_aero::tables::{AxisId, TableError};
use f16_aero::{AeroModel, ModelConfig, ModelError, StandardCapabilities, TableId, TableRegistry};
use std::sync::Arc;

use crate::common::{synthetic_value, SyntheticData};
use approx::assert_relative_eq;

fn install(data: &SyntheticData) -> Result<AeroModel, ModelError> {
    AeroModel::install(
        &ModelConfig::new(data.path()),
        Arc::new(StandardCapabilities::default()),
    )
}

#[track_caller]
fn assert_load_failure(result: Result<AeroModel, ModelError>, expected: &str) {
    match result {
        Err(ModelError::Table(TableError::LoadFailure { name, .. })) => assert_eq!(name, expected),
        other => panic!("expected load failure of {expected}, got {:?}", other),
    }
}

#[test]
fn test_registry_loads_every_table() {
    let data = SyntheticData::new();
    let registry = TableRegistry::load(data.path()).unwrap();

    let view = registry.lookup("CY0920").unwrap();
    assert_eq!(view.tensor.shape(), &[14, 19]);
    let v = view.interpolate(&[12.5, -3.0]).unwrap();
    assert_relative_eq!(
        v,
        synthetic_value(TableId::Cy0920, 12.5, -3.0, 0.0),
        epsilon = 1e-12
    );

    assert!(matches!(
        registry.lookup("CY9999"),
        Err(TableError::UnknownTable(_))
    ));
}

#[test]
fn test_missing_table_fails_install() {
    let data = SyntheticData::new();
    data.remove(TableId::Cm1420);
    assert_load_failure(install(&data), "CM1420");
}

#[test]
fn test_first_failing_table_is_reported() {
    let data = SyntheticData::new();
    data.remove(TableId::Cz0820);
    data.remove(TableId::Cl0620);
    assert_load_failure(install(&data), "CL0620");
}

#[test]
fn test_first_failing_table_is_stable_across_threads() {
    let data = SyntheticData::new();
    data.remove(TableId::Cl1620);
    data.remove(TableId::Cz1420);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(8)
        .build()
        .unwrap();
    for _ in 0..50 {
        match pool.install(|| TableRegistry::load(data.path())) {
            Err(TableError::LoadFailure { name, .. }) => assert_eq!(name, "CL1620"),
            other => panic!("expected load failure of CL1620, got {:?}", other),
        }
    }
}

#[test]
fn test_short_table_fails_install() {
    let data = SyntheticData::new();
    data.truncate(TableId::Cn0120, 20 * 19 * 3 - 1);
    assert_load_failure(install(&data), "CN0120");
}

#[test]
fn test_unsorted_axis_fails_install() {
    let data = SyntheticData::new();
    data.overwrite_axis(AxisId::Dh2, &[0.0, -25.0, 25.0]);
    assert_load_failure(install(&data), "DH2");
}

#[test]
fn test_invalid_config_fails_install() {
    let data = SyntheticData::new();
    let config = ModelConfig::new(data.path()).with_registry_capacity(0);
    assert!(matches!(
        AeroModel::install(&config, Arc::new(StandardCapabilities::default())),
        Err(ModelError::Config(_))
    ));
}
