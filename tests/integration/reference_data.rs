//! Checks against the published F-16 data set. Point `F16_AERO_DATA_DIR` at
//! the directory holding the `.dat` files and run with `--ignored`.

use f16_aero::aerodynamics::BaseCoefficients;
use f16_aero::{AeroModel, ModelConfig, StandardCapabilities, TableRegistry};
use std::path::PathBuf;
use std::sync::Arc;

use crate::common::{assert_coefficients_valid, trim_control, trim_state};
use approx::assert_relative_eq;

fn data_dir() -> Option<PathBuf> {
    std::env::var_os("F16_AERO_DATA_DIR").map(PathBuf::from)
}

#[test]
#[ignore]
fn test_base_coefficients_match_reference() {
    let Some(dir) = data_dir() else {
        eprintln!("F16_AERO_DATA_DIR not set, skipping");
        return;
    };
    let tables = TableRegistry::load(&dir).unwrap();

    let base = BaseCoefficients::evaluate(&tables, 0.5, 0.5, 0.5).unwrap();
    assert_relative_eq!(base.cx, -0.045144, epsilon = 1e-6);
    assert_relative_eq!(base.cz, -0.064519, epsilon = 1e-6);
    assert_relative_eq!(base.cm, -0.063967, epsilon = 1e-6);
    assert_relative_eq!(base.cy, -0.013983, epsilon = 1e-6);
    assert_relative_eq!(base.cn, 0.002128, epsilon = 1e-6);
    assert_relative_eq!(base.cl, -0.000905, epsilon = 1e-6);
}

#[test]
#[ignore]
fn test_reference_trim_is_finite() {
    let Some(dir) = data_dir() else {
        eprintln!("F16_AERO_DATA_DIR not set, skipping");
        return;
    };
    let model = AeroModel::install(
        &ModelConfig::new(dir),
        Arc::new(StandardCapabilities::default()),
    )
    .unwrap();

    let c = model.trim(&trim_state(), &trim_control()).unwrap();
    assert_coefficients_valid(&c);
}
