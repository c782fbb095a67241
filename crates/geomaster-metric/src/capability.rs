//! Capability traits and their closed-form implementations.

use std::f64::consts::PI;

use geomaster_core::{Circle, Rectangle, ShapeKind, Sphere};

/// A two-dimensional shape.
pub trait Planar {
    /// Enclosed area.
    fn area(&self) -> f64;

    /// Length of the boundary.
    fn perimeter(&self) -> f64;
}

/// A three-dimensional shape.
pub trait Solid {
    /// Enclosed volume.
    fn volume(&self) -> f64;

    /// Area of the boundary surface.
    fn surface_area(&self) -> f64;
}

impl Planar for Circle {
    fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius()
    }
}

impl Planar for Rectangle {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }
}

impl Solid for Sphere {
    fn volume(&self) -> f64 {
        let r = self.radius();
        (4.0 / 3.0) * PI * r * r * r
    }

    fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius() * self.radius()
    }
}

/// View `shape` through its 2D capability, if it has one.
pub fn as_planar(shape: &ShapeKind) -> Option<&dyn Planar> {
    match shape {
        ShapeKind::Circle(c) => Some(c),
        ShapeKind::Rectangle(r) => Some(r),
        ShapeKind::Sphere(_) => None,
    }
}

/// View `shape` through its 3D capability, if it has one.
pub fn as_solid(shape: &ShapeKind) -> Option<&dyn Solid> {
    match shape {
        ShapeKind::Sphere(s) => Some(s),
        ShapeKind::Circle(_) | ShapeKind::Rectangle(_) => None,
    }
}
