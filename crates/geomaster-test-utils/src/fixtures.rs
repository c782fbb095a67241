//! Fixed shape samples for compliance and engine tests.
//!
//! - [`planar_samples`] — circles and rectangles across several magnitudes.
//! - [`solid_samples`] — spheres across the same magnitudes.
//! - [`extremal_samples`] — every shape at its largest accepted dimension.
//! - [`containment_cases`] — `(outer, inner, expected)` triples covering
//!   every modelled pair, including the inclusive boundary cases.

use geomaster_core::{Circle, Rectangle, ShapeKind, Sphere};

use crate::{circle, rectangle, sphere};

const MAGNITUDES: [f64; 5] = [1e-3, 0.5, 1.0, 7.25, 1e4];

pub fn planar_samples() -> Vec<ShapeKind> {
    let mut out = Vec::with_capacity(MAGNITUDES.len() * 3);
    for m in MAGNITUDES {
        out.push(circle(m));
        out.push(rectangle(m, m));
        out.push(rectangle(m, 2.0 * m));
    }
    out
}

pub fn solid_samples() -> Vec<ShapeKind> {
    MAGNITUDES.iter().map(|&m| sphere(m)).collect()
}

pub fn all_samples() -> Vec<ShapeKind> {
    let mut out = planar_samples();
    out.extend(solid_samples());
    out
}

pub fn extremal_samples() -> Vec<ShapeKind> {
    vec![
        circle(Circle::MAX_RADIUS),
        rectangle(Rectangle::MAX_SIDE, Rectangle::MAX_SIDE),
        rectangle(Rectangle::MAX_SIDE, 1.0),
        sphere(Sphere::MAX_RADIUS),
    ]
}

/// A containment case: outer shape, inner shape, expected verdict.
pub struct ContainmentCase {
    pub name: &'static str,
    pub outer: ShapeKind,
    pub inner: ShapeKind,
    pub expected: bool,
}

pub fn containment_cases() -> Vec<ContainmentCase> {
    let half_sqrt2 = std::f64::consts::SQRT_2 / 2.0;
    vec![
        ContainmentCase {
            name: "equal circles",
            outer: circle(5.0),
            inner: circle(5.0),
            expected: true,
        },
        ContainmentCase {
            name: "smaller outer circle",
            outer: circle(2.0),
            inner: circle(3.0),
            expected: false,
        },
        ContainmentCase {
            name: "unit square in circle of radius sqrt(2)/2",
            outer: circle(half_sqrt2),
            inner: rectangle(1.0, 1.0),
            expected: true,
        },
        ContainmentCase {
            name: "rectangle diagonal exceeds diameter",
            outer: circle(2.0),
            inner: rectangle(2.0, 3.0),
            expected: false,
        },
        ContainmentCase {
            name: "circle diameter equals short side",
            outer: rectangle(10.0, 5.0),
            inner: circle(2.5),
            expected: true,
        },
        ContainmentCase {
            name: "circle diameter exceeds height",
            outer: rectangle(10.0, 4.0),
            inner: circle(2.5),
            expected: false,
        },
        ContainmentCase {
            name: "equal squares",
            outer: rectangle(4.0, 4.0),
            inner: rectangle(4.0, 4.0),
            expected: true,
        },
        ContainmentCase {
            name: "axis-aligned fit",
            outer: rectangle(10.0, 10.0),
            inner: rectangle(8.0, 9.0),
            expected: true,
        },
        ContainmentCase {
            name: "fit after rotation",
            outer: rectangle(10.0, 4.0),
            inner: rectangle(3.0, 9.0),
            expected: true,
        },
        ContainmentCase {
            name: "too long either way",
            outer: rectangle(10.0, 4.0),
            inner: rectangle(11.0, 3.0),
            expected: false,
        },
    ]
}
