//! Benchmark workloads for the GeoMaster geometry toolkit.
//!
//! Every generator is deterministic in its seed so runs are comparable:
//!
//! - [`shape_workload`]: mixed circles, rectangles and spheres
//! - [`planar_pairs`]: outer/inner pairs for containment
//! - [`request_bodies`]: JSON metric requests in both vocabularies

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geomaster::types::{Circle, Rectangle, ShapeKind, Sphere};

/// Linear congruential step; good enough to spread benchmark inputs.
fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 11
}

/// A dimension in `(0, 100]`.
fn dimension(state: &mut u64) -> f64 {
    let unit = next(state) as f64 / (1u64 << 53) as f64;
    100.0 * (1.0 - unit)
}

fn planar(state: &mut u64) -> ShapeKind {
    let shape = if next(state) % 2 == 0 {
        Circle::new(dimension(state)).map(ShapeKind::from)
    } else {
        Rectangle::new(dimension(state), dimension(state)).map(ShapeKind::from)
    };
    shape.unwrap_or_else(|e| unreachable!("generated dimension rejected: {e}"))
}

/// `n` shapes cycling through the three shape types.
pub fn shape_workload(n: usize, seed: u64) -> Vec<ShapeKind> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            let shape = match i % 3 {
                0 => Circle::new(dimension(&mut state)).map(ShapeKind::from),
                1 => Rectangle::new(dimension(&mut state), dimension(&mut state))
                    .map(ShapeKind::from),
                _ => Sphere::new(dimension(&mut state)).map(ShapeKind::from),
            };
            shape.unwrap_or_else(|e| unreachable!("generated dimension rejected: {e}"))
        })
        .collect()
}

/// `n` (outer, inner) pairs of circles and rectangles.
pub fn planar_pairs(n: usize, seed: u64) -> Vec<(ShapeKind, ShapeKind)> {
    let mut state = seed;
    (0..n)
        .map(|_| (planar(&mut state), planar(&mut state)))
        .collect()
}

/// `n` metric request bodies, alternating English and Portuguese documents.
pub fn request_bodies(n: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            let a = dimension(&mut state);
            let b = dimension(&mut state);
            match i % 4 {
                0 => format!(r#"{{"shapeType":"circle","properties":{{"radius":{a}}}}}"#),
                1 => format!(
                    r#"{{"shapeType":"rectangle","properties":{{"width":{a},"height":{b}}}}}"#
                ),
                2 => format!(r#"{{"tipoForma":"circulo","propriedades":{{"raio":{a}}}}}"#),
                _ => format!(
                    r#"{{"tipoForma":"retangulo","propriedades":{{"largura":{a},"altura":{b}}}}}"#
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomaster::types::ShapeType;

    #[test]
    fn workloads_are_deterministic() {
        assert_eq!(shape_workload(50, 7), shape_workload(50, 7));
        assert_eq!(planar_pairs(50, 7), planar_pairs(50, 7));
        assert_eq!(request_bodies(8, 7), request_bodies(8, 7));
    }

    #[test]
    fn shape_workload_cycles_types() {
        let shapes = shape_workload(6, 1);
        let types: Vec<_> = shapes.iter().map(ShapeKind::shape_type).collect();
        assert_eq!(
            types,
            [
                ShapeType::Circle,
                ShapeType::Rectangle,
                ShapeType::Sphere,
                ShapeType::Circle,
                ShapeType::Rectangle,
                ShapeType::Sphere
            ]
        );
    }

    #[test]
    fn pairs_are_planar() {
        for (outer, inner) in planar_pairs(200, 3) {
            assert_ne!(outer.shape_type(), ShapeType::Sphere);
            assert_ne!(inner.shape_type(), ShapeType::Sphere);
        }
    }

    #[test]
    fn request_bodies_are_accepted() {
        let calc = geomaster::report::Calculator::default();
        for body in request_bodies(40, 11) {
            let r = calc.handle_metric_json("area", &body);
            assert!(r.status.is_success(), "{body}: {}", r.body);
        }
    }
}
