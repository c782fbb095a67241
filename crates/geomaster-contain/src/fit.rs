//! Containment verdicts.

use std::fmt;

/// Placement of an inner rectangle relative to an outer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Widths aligned with widths.
    AxisAligned,
    /// Inner rectangle turned by 90°.
    Rotated,
}

/// The closed-form rule that decided a containment query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `R ≥ r`.
    CircleInCircle,
    /// `R ≥ diagonal / 2`.
    RectangleInCircle,
    /// `2r ≤ W` and `2r ≤ H`.
    CircleInRectangle,
    /// Sides compared axis-aligned, then rotated.
    RectangleInRectangle,
}

impl Rule {
    /// Stable identifier used in rendered verdicts.
    pub fn name(self) -> &'static str {
        match self {
            Self::CircleInCircle => "circle_in_circle",
            Self::RectangleInCircle => "rectangle_in_circle",
            Self::CircleInRectangle => "circle_in_rectangle",
            Self::RectangleInRectangle => "rectangle_in_rectangle",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a containment query.
///
/// `orientation` is only ever set for [`Rule::RectangleInRectangle`]
/// verdicts that fit, and names the first orientation that works.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fit {
    /// Rule that was applied.
    pub rule: Rule,
    /// Whether the inner shape fits.
    pub contains: bool,
    /// Orientation in which an inner rectangle fits.
    pub orientation: Option<Orientation>,
}

impl Fit {
    pub(crate) fn decided(rule: Rule, contains: bool) -> Self {
        Self {
            rule,
            contains,
            orientation: None,
        }
    }

    pub(crate) fn oriented(orientation: Option<Orientation>) -> Self {
        Self {
            rule: Rule::RectangleInRectangle,
            contains: orientation.is_some(),
            orientation,
        }
    }

    /// Whether the inner shape fits.
    pub fn contains(&self) -> bool {
        self.contains
    }
}
