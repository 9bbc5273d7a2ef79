//! Invariants checked over generated parameter sets

use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::assert_close;
use crate::engine::{SensitivityEngine, calculation_fn};
use crate::model::{Direction, ParameterSet};

/// Random parameter set with a mix of positive, negative and zero values
fn random_parameters(rng: &mut SmallRng) -> ParameterSet {
    let count = rng.random_range(1..=12);
    (0..count)
        .map(|i| {
            let value = match rng.random_range(0..4) {
                0 => 0.0,
                1 => -rng.random_range(0.1..100.0),
                _ => rng.random_range(0.1..100.0),
            };
            (format!("p{i}"), value)
        })
        .collect()
}

/// Weighted sum with a nonlinear term so every parameter matters
fn mixed_engine(parameters: ParameterSet, delta: f64) -> SensitivityEngine {
    SensitivityEngine::builder()
        .calculation_fn(|p| {
            Ok(p.iter()
                .enumerate()
                .map(|(i, (_, v))| (i as f64 + 1.0) * v + 0.01 * v * v)
                .sum())
        })
        .parameters(parameters)
        .delta(delta)
        .build()
        .unwrap()
}

#[test]
fn test_key_completeness() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let parameters = random_parameters(&mut rng);
        let delta = rng.random_range(0.0..0.9);
        let engine = mixed_engine(parameters.clone(), delta);
        let results = engine.run().unwrap();

        let result_keys: Vec<&str> = results.parameters().collect();
        let parameter_keys: Vec<&str> = parameters.names().collect();
        assert_eq!(result_keys, parameter_keys);

        let (up, down) = engine.labels();
        for (_, cases) in results.iter() {
            assert_eq!(cases.len(), 2);
            assert!(cases.contains_key(&up));
            assert!(cases.contains_key(&down));
        }
    }
}

#[test]
fn test_zero_delta_reproduces_base() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..20 {
        let engine = mixed_engine(random_parameters(&mut rng), 0.0);
        let base = engine.base().unwrap();
        let results = engine.run().unwrap();

        for (_, cases) in results.iter() {
            for value in cases.values() {
                assert_close(*value, base);
            }
        }
    }
}

#[test]
fn test_zero_parameter_is_never_perturbed() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let engine = SensitivityEngine::new(
        calculation_fn(move |p| {
            let zero = p.value("zero")?;
            recorder.lock().unwrap().push(zero);
            Ok(zero + p.value("other")?)
        }),
        ParameterSet::from([("zero", 0.0), ("other", 5.0)]),
        0.75,
    )
    .unwrap();

    let results = engine.run().unwrap();
    assert_eq!(results.up("zero"), results.down("zero"));
    assert_close(results.up("zero").unwrap(), 5.0);
    assert!(seen.lock().unwrap().iter().all(|v| *v == 0.0));
}

#[test]
fn test_perturbation_does_not_touch_other_parameters() {
    let base = ParameterSet::from([("a", 1.5), ("b", -2.0), ("c", 8.0)]);
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&snapshots);
    let engine = SensitivityEngine::new(
        calculation_fn(move |p| {
            recorder.lock().unwrap().push(p.clone());
            Ok(1.0)
        }),
        base.clone(),
        0.2,
    )
    .unwrap();

    engine.run().unwrap();
    let snapshots = snapshots.lock().unwrap();
    assert_eq!(snapshots.len(), 6);

    for snapshot in snapshots.iter() {
        let changed: Vec<&str> = snapshot
            .iter()
            .filter(|(name, value)| base.get(name) != Some(*value))
            .map(|(name, _)| name)
            .collect();
        assert_eq!(changed.len(), 1, "exactly one parameter moves: {snapshot:?}");

        let name = changed[0];
        let original = base.get(name).unwrap();
        let moved = snapshot.get(name).unwrap();
        let up = Direction::Up.perturb(original, 0.2);
        let down = Direction::Down.perturb(original, 0.2);
        assert!(moved == up || moved == down);
    }
}

#[test]
fn test_run_is_repeatable() {
    let mut rng = SmallRng::seed_from_u64(3);
    let engine = mixed_engine(random_parameters(&mut rng), 0.15);
    assert_eq!(engine.run().unwrap(), engine.run().unwrap());
}

#[test]
fn test_base_sees_unmodified_parameters() {
    let parameters = ParameterSet::from([("x", 2.0), ("y", 3.0)]);
    let expected = parameters.clone();
    let engine = SensitivityEngine::new(
        calculation_fn(move |p| {
            assert_eq!(p, &expected);
            Ok(0.0)
        }),
        parameters,
        0.1,
    )
    .unwrap();

    assert_eq!(engine.base().unwrap(), 0.0);
}
