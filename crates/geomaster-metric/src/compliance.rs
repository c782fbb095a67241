//! Capability contract test helpers.
//!
//! These functions verify that metric dispatch for a shape satisfies the
//! capability contract. Reused across the engine test module for every
//! fixture shape.

use geomaster_core::{Metric, ShapeKind};

use crate::engine::{compute_metric, supported_metrics};

/// Assert that every supported metric succeeds and every other metric fails.
pub fn assert_capability_gate(shape: &ShapeKind) {
    let supported = supported_metrics(shape);
    for metric in Metric::ALL {
        let result = compute_metric(shape, metric);
        if supported.contains(&metric) {
            assert!(result.is_ok(), "{metric} failed for {shape:?}: {result:?}");
        } else {
            let err = result.expect_err("capability mismatch must fail");
            assert_eq!(err.metric, metric);
            assert_eq!(err.shape, shape.shape_type());
        }
    }
}

/// Assert supported metrics are finite and strictly positive.
pub fn assert_results_finite_and_positive(shape: &ShapeKind) {
    for &metric in supported_metrics(shape) {
        let v = compute_metric(shape, metric).expect("supported metric");
        assert!(v.is_finite(), "{metric} of {shape:?} is not finite: {v}");
        assert!(v > 0.0, "{metric} of {shape:?} is not positive: {v}");
    }
}

/// Assert that two calls return bit-identical results.
pub fn assert_deterministic(shape: &ShapeKind) {
    for &metric in supported_metrics(shape) {
        let a = compute_metric(shape, metric).expect("supported metric");
        let b = compute_metric(shape, metric).expect("supported metric");
        assert_eq!(a.to_bits(), b.to_bits(), "{metric} of {shape:?} is non-deterministic");
    }
}

/// Run all compliance checks on a shape.
pub fn run_full_compliance(shape: &ShapeKind) {
    assert_capability_gate(shape);
    assert_results_finite_and_positive(shape);
    assert_deterministic(shape);
}
