//! Test utilities for GeoMaster development.
//!
//! Provides panicking shape constructors for known-good dimensions,
//! property-bag builders in both vocabularies, a float comparison
//! helper, and fixed shape samples (see [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use geomaster_core::{Circle, PropertyBag, Rectangle, ShapeKind, Sphere};

/// Default tolerance for comparing computed metrics.
pub const TOLERANCE: f64 = 1e-9;

pub fn circle(radius: f64) -> ShapeKind {
    Circle::new(radius)
        .unwrap_or_else(|e| panic!("fixture circle({radius}): {e}"))
        .into()
}

pub fn rectangle(width: f64, height: f64) -> ShapeKind {
    Rectangle::new(width, height)
        .unwrap_or_else(|e| panic!("fixture rectangle({width}, {height}): {e}"))
        .into()
}

pub fn sphere(radius: f64) -> ShapeKind {
    Sphere::new(radius)
        .unwrap_or_else(|e| panic!("fixture sphere({radius}): {e}"))
        .into()
}

/// `{"radius": r}`.
pub fn radius_props(radius: f64) -> PropertyBag {
    PropertyBag::new().with("radius", radius)
}

/// `{"width": w, "height": h}`.
pub fn rectangle_props(width: f64, height: f64) -> PropertyBag {
    PropertyBag::new().with("width", width).with("height", height)
}

/// `{"largura": w, "altura": h}` with Portuguese keys.
pub fn source_rectangle_props(width: f64, height: f64) -> PropertyBag {
    PropertyBag::new().with("largura", width).with("altura", height)
}

/// Assert `actual` is within [`TOLERANCE`] of `expected`, scaled by magnitude.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}
