//! Containment decisions over ordered `(outer, inner)` pairs.

use geomaster_core::{Circle, Rectangle, ShapeKind, UnsupportedContainmentPair};

use crate::fit::{Fit, Orientation, Rule};

fn circle_in_circle(outer: &Circle, inner: &Circle) -> Fit {
    Fit::decided(Rule::CircleInCircle, outer.radius() >= inner.radius())
}

/// The rectangle's farthest corners lie half a diagonal from its centre.
fn rectangle_in_circle(outer: &Circle, inner: &Rectangle) -> Fit {
    let required_radius = inner.diagonal() / 2.0;
    Fit::decided(Rule::RectangleInCircle, outer.radius() >= required_radius)
}

fn circle_in_rectangle(outer: &Rectangle, inner: &Circle) -> Fit {
    let d = inner.diameter();
    Fit::decided(
        Rule::CircleInRectangle,
        d <= outer.width() && d <= outer.height(),
    )
}

fn rectangle_in_rectangle(outer: &Rectangle, inner: &Rectangle) -> Fit {
    let fits = |r: &Rectangle| r.width() <= outer.width() && r.height() <= outer.height();
    let orientation = if fits(inner) {
        Some(Orientation::AxisAligned)
    } else if fits(&inner.rotated()) {
        Some(Orientation::Rotated)
    } else {
        None
    };
    Fit::oriented(orientation)
}

/// Decide whether `inner` fits inside `outer`, reporting the rule used.
///
/// Fails with [`UnsupportedContainmentPair`] if either shape is not a
/// circle or rectangle.
pub fn fit(outer: &ShapeKind, inner: &ShapeKind) -> Result<Fit, UnsupportedContainmentPair> {
    match (outer, inner) {
        (ShapeKind::Circle(o), ShapeKind::Circle(i)) => Ok(circle_in_circle(o, i)),
        (ShapeKind::Circle(o), ShapeKind::Rectangle(i)) => Ok(rectangle_in_circle(o, i)),
        (ShapeKind::Rectangle(o), ShapeKind::Circle(i)) => Ok(circle_in_rectangle(o, i)),
        (ShapeKind::Rectangle(o), ShapeKind::Rectangle(i)) => Ok(rectangle_in_rectangle(o, i)),
        (ShapeKind::Sphere(_), _) | (_, ShapeKind::Sphere(_)) => Err(UnsupportedContainmentPair {
            outer: outer.shape_type(),
            inner: inner.shape_type(),
        }),
    }
}

/// Whether `inner` fits inside `outer`.
///
/// # Examples
///
/// ```
/// use geomaster_core::{Circle, Rectangle, ShapeKind};
/// use geomaster_contain::is_contained;
///
/// let outer: ShapeKind = Rectangle::new(10.0, 5.0).unwrap().into();
/// let inner: ShapeKind = Circle::new(2.5).unwrap().into();
/// assert_eq!(is_contained(&outer, &inner), Ok(true));
/// ```
pub fn is_contained(
    outer: &ShapeKind,
    inner: &ShapeKind,
) -> Result<bool, UnsupportedContainmentPair> {
    fit(outer, inner).map(|f| f.contains())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomaster_core::ShapeType;
    use geomaster_test_utils::fixtures::{containment_cases, planar_samples};
    use geomaster_test_utils::{circle, rectangle, sphere};
    use proptest::prelude::*;

    #[test]
    fn fixture_cases() {
        for case in containment_cases() {
            assert_eq!(
                is_contained(&case.outer, &case.inner),
                Ok(case.expected),
                "case '{}'",
                case.name
            );
        }
    }

    #[test]
    fn equal_circles_contain() {
        assert_eq!(is_contained(&circle(5.0), &circle(5.0)), Ok(true));
        assert_eq!(is_contained(&circle(2.0), &circle(3.0)), Ok(false));
        assert_eq!(is_contained(&circle(3.0), &circle(2.0)), Ok(true));
    }

    #[test]
    fn diagonal_rule_is_inclusive_and_tight() {
        let exact = std::f64::consts::SQRT_2 / 2.0;
        let square = rectangle(1.0, 1.0);
        assert_eq!(is_contained(&circle(exact), &square), Ok(true));

        let below = f64::from_bits(exact.to_bits() - 1);
        assert_eq!(is_contained(&circle(below), &square), Ok(false));
        assert_eq!(is_contained(&circle(exact - 1e-9), &square), Ok(false));
    }

    #[test]
    fn diameter_rule_checks_both_sides() {
        assert_eq!(is_contained(&rectangle(10.0, 5.0), &circle(2.5)), Ok(true));
        assert_eq!(is_contained(&rectangle(10.0, 4.0), &circle(2.5)), Ok(false));
        assert_eq!(is_contained(&rectangle(4.0, 10.0), &circle(2.5)), Ok(false));
    }

    #[test]
    fn rotation_is_accepted() {
        let outer = rectangle(10.0, 10.0);
        assert_eq!(is_contained(&outer, &rectangle(8.0, 9.0)), Ok(true));
        assert_eq!(is_contained(&outer, &rectangle(9.0, 8.0)), Ok(true));

        let outer = rectangle(10.0, 4.0);
        let f = fit(&outer, &rectangle(3.0, 9.0)).unwrap();
        assert_eq!(f.orientation, Some(Orientation::Rotated));
        assert!(f.contains());

        let f = fit(&outer, &rectangle(9.0, 3.0)).unwrap();
        assert_eq!(f.orientation, Some(Orientation::AxisAligned));
    }

    #[test]
    fn rectangle_too_large_has_no_orientation() {
        let f = fit(&rectangle(10.0, 4.0), &rectangle(5.0, 5.0)).unwrap();
        assert_eq!(f.rule, Rule::RectangleInRectangle);
        assert_eq!(f.orientation, None);
        assert!(!f.contains());
    }

    #[test]
    fn fit_reports_rule_per_pair() {
        let c = circle(1.0);
        let r = rectangle(1.0, 1.0);
        assert_eq!(fit(&c, &c).unwrap().rule, Rule::CircleInCircle);
        assert_eq!(fit(&c, &r).unwrap().rule, Rule::RectangleInCircle);
        assert_eq!(fit(&r, &c).unwrap().rule, Rule::CircleInRectangle);
        assert_eq!(fit(&r, &r).unwrap().rule, Rule::RectangleInRectangle);
    }

    #[test]
    fn sphere_on_either_side_is_unsupported() {
        let s = sphere(1.0);
        for other in planar_samples().into_iter().chain([sphere(2.0)]) {
            assert_eq!(
                is_contained(&s, &other),
                Err(UnsupportedContainmentPair {
                    outer: ShapeType::Sphere,
                    inner: other.shape_type()
                })
            );
            assert_eq!(
                is_contained(&other, &s),
                Err(UnsupportedContainmentPair {
                    outer: other.shape_type(),
                    inner: ShapeType::Sphere
                })
            );
        }
    }

    fn arb_planar() -> impl Strategy<Value = ShapeKind> {
        prop_oneof![
            (1e-3f64..1e3).prop_map(circle),
            (1e-3f64..1e3, 1e-3f64..1e3).prop_map(|(w, h)| rectangle(w, h)),
        ]
    }

    proptest! {
        #[test]
        fn every_planar_shape_contains_itself(shape in arb_planar()) {
            prop_assert_eq!(is_contained(&shape, &shape), Ok(true));
        }

        #[test]
        fn rectangle_verdict_ignores_inner_rotation(
            ow in 1e-3f64..1e3, oh in 1e-3f64..1e3,
            iw in 1e-3f64..1e3, ih in 1e-3f64..1e3,
        ) {
            let outer = rectangle(ow, oh);
            prop_assert_eq!(
                is_contained(&outer, &rectangle(iw, ih)),
                is_contained(&outer, &rectangle(ih, iw))
            );
        }

        #[test]
        fn circle_in_rectangle_uses_short_side(
            w in 1e-3f64..1e3, h in 1e-3f64..1e3, r in 1e-3f64..1e3,
        ) {
            let expected = 2.0 * r <= w.min(h);
            prop_assert_eq!(is_contained(&rectangle(w, h), &circle(r)), Ok(expected));
        }
    }
}
