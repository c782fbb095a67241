//! Metric dispatch over [`ShapeKind`].

use geomaster_core::{Capability, Metric, ShapeKind, UnsupportedOperation};

use crate::capability::{as_planar, as_solid, Planar, Solid};

fn planar(shape: &ShapeKind, metric: Metric) -> Result<&dyn Planar, UnsupportedOperation> {
    as_planar(shape).ok_or(UnsupportedOperation {
        metric,
        shape: shape.shape_type(),
    })
}

fn solid(shape: &ShapeKind, metric: Metric) -> Result<&dyn Solid, UnsupportedOperation> {
    as_solid(shape).ok_or(UnsupportedOperation {
        metric,
        shape: shape.shape_type(),
    })
}

/// Area of a 2D shape.
///
/// # Examples
///
/// ```
/// use geomaster_core::{Rectangle, ShapeKind, Sphere};
/// use geomaster_metric::area;
///
/// let r: ShapeKind = Rectangle::new(10.0, 8.0).unwrap().into();
/// assert_eq!(area(&r), Ok(80.0));
///
/// let s: ShapeKind = Sphere::new(1.0).unwrap().into();
/// assert!(area(&s).is_err());
/// ```
pub fn area(shape: &ShapeKind) -> Result<f64, UnsupportedOperation> {
    planar(shape, Metric::Area).map(|p| p.area())
}

/// Perimeter of a 2D shape.
pub fn perimeter(shape: &ShapeKind) -> Result<f64, UnsupportedOperation> {
    planar(shape, Metric::Perimeter).map(|p| p.perimeter())
}

/// Volume of a 3D shape.
pub fn volume(shape: &ShapeKind) -> Result<f64, UnsupportedOperation> {
    solid(shape, Metric::Volume).map(|s| s.volume())
}

/// Surface area of a 3D shape.
pub fn surface_area(shape: &ShapeKind) -> Result<f64, UnsupportedOperation> {
    solid(shape, Metric::SurfaceArea).map(|s| s.surface_area())
}

/// Compute `metric` for `shape`.
///
/// Fails with [`UnsupportedOperation`] when the shape lacks the
/// capability the metric requires; never substitutes a default value.
pub fn compute_metric(shape: &ShapeKind, metric: Metric) -> Result<f64, UnsupportedOperation> {
    match metric {
        Metric::Area => area(shape),
        Metric::Perimeter => perimeter(shape),
        Metric::Volume => volume(shape),
        Metric::SurfaceArea => surface_area(shape),
    }
}

/// Metrics `shape` supports, in canonical order.
pub fn supported_metrics(shape: &ShapeKind) -> &'static [Metric] {
    let capability: Capability = shape.capability();
    capability.metrics()
}
