use f16_aero::aerodynamics::compose;
use f16_aero::{CapabilityError, ModelError};
use pretty_assertions::assert_eq;
use std::sync::Arc;

use crate::common::{
    assert_coefficients_eq, assert_coefficients_valid, install_synthetic, standard_model,
    trim_control, trim_state, FaultyCapabilities,
};

#[test]
fn test_trim_is_finite() {
    let model = standard_model();
    let c = model.trim(&trim_state(), &trim_control()).unwrap();
    assert_coefficients_valid(&c);
    assert_eq!(model.instance_count(), 0);
}

#[test]
fn test_instance_lifecycle() {
    let model = standard_model();
    let state = trim_state();
    let control = trim_control();

    model.init_instance("lead", &state, &control).unwrap();
    assert_eq!(model.instance_count(), 1);

    for i in 1..=50 {
        let t = i as f64 * 0.01;
        let c = model.step("lead", &state, &control, t).unwrap();
        assert_coefficients_valid(&c);

        let lef = model.flap_deflection("lead").unwrap();
        assert!((0.0..=25.0).contains(&lef), "flap out of range: {lef}");
        let expected = compose(model.tables(), &state, &control, lef, &model.constants()).unwrap();
        assert_coefficients_eq(&c, &expected, 1e-12);
    }

    model.delete_instance("lead").unwrap();
    assert_eq!(model.instance_count(), 0);
    assert!(matches!(
        model.step("lead", &state, &control, 0.6),
        Err(ModelError::NotFound(id)) if id == "lead"
    ));
    assert!(matches!(
        model.delete_instance("lead"),
        Err(ModelError::NotFound(_))
    ));
}

#[test]
fn test_reset_replays_identically() {
    let model = standard_model();
    let mut state = trim_state();
    let control = trim_control();
    model.init_instance("wing", &state, &control).unwrap();

    let mut run = || {
        (1..=30)
            .map(|i| {
                state.q = 0.01 * (i as f64).sin();
                model.step("wing", &state, &control, i as f64 * 0.02).unwrap()
            })
            .collect::<Vec<_>>()
    };

    let first = run();
    model.reset_instance("wing").unwrap();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_instances_are_independent() {
    let model = standard_model();
    let control = trim_control();
    let slow = trim_state();
    let mut fast = trim_state();
    fast.alpha = 0.2;
    fast.velocity = 300.0;

    model.init_instance("slow", &slow, &control).unwrap();
    model.init_instance("fast", &fast, &control).unwrap();

    for i in 1..=20 {
        model.step("fast", &fast, &control, i as f64 * 0.05).unwrap();
    }
    let only_slow = standard_model();
    only_slow.init_instance("slow", &slow, &control).unwrap();

    let a = model.step("slow", &slow, &control, 0.05).unwrap();
    let b = only_slow.step("slow", &slow, &control, 0.05).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_out_of_domain_step_keeps_flap_state() {
    let model = standard_model();
    let state = trim_state();
    let control = trim_control();
    model.init_instance("lead", &state, &control).unwrap();
    model.init_instance("twin", &state, &control).unwrap();

    model.step("lead", &state, &control, 0.01).unwrap();
    model.step("twin", &state, &control, 0.01).unwrap();
    let before = model.flap_deflection("lead").unwrap();

    let mut stalled = state;
    stalled.alpha = 50.0_f64.to_radians();
    assert!(matches!(
        model.step("lead", &stalled, &control, 0.5),
        Err(ModelError::Interpolation(_))
    ));
    assert_eq!(model.flap_deflection("lead").unwrap(), before);

    // The next step carries on as if the failed one never happened
    let a = model.step("lead", &state, &control, 0.02).unwrap();
    let b = model.step("twin", &state, &control, 0.02).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_capability_failure_is_local() {
    let capabilities = Arc::new(FaultyCapabilities::default());
    let model = install_synthetic(capabilities.clone());
    let state = trim_state();
    let control = trim_control();

    model.init_instance("a", &state, &control).unwrap();
    model.init_instance("b", &state, &control).unwrap();
    model.step("a", &state, &control, 0.01).unwrap();
    let before = model.flap_deflection("a").unwrap();

    capabilities.set_failing(true);
    match model.step("a", &state, &control, 0.02) {
        Err(ModelError::Capability(CapabilityError::Actuator(msg))) => {
            assert_eq!(msg, "injected fault")
        }
        other => panic!("expected actuator failure, got {:?}", other),
    }
    assert_eq!(model.flap_deflection("a").unwrap(), before);

    capabilities.set_failing(false);
    model.step("b", &state, &control, 0.01).unwrap();
    model.step("a", &state, &control, 0.03).unwrap();
    assert_eq!(model.instance_count(), 2);
}

#[test]
fn test_concurrent_instances() {
    let model = standard_model();
    let control = trim_control();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let model = &model;
            scope.spawn(move || {
                let state = trim_state();
                for n in 0..5 {
                    let id = format!("w{worker}-{n}");
                    model.init_instance(&id, &state, &control).unwrap();
                    for i in 1..=10 {
                        let c = model.step(&id, &state, &control, i as f64 * 0.01).unwrap();
                        assert_coefficients_valid(&c);
                    }
                }
            });
        }
    });
    assert_eq!(model.instance_count(), 20);

    for worker in 0..4 {
        for n in 0..5 {
            model.delete_instance(&format!("w{worker}-{n}")).unwrap();
        }
    }
    assert_eq!(model.instance_count(), 0);
}
