//! Calculation results, containment verdicts, and display rounding.
//!
//! Results keep the raw engine value. Rounding happens only when a
//! result is rendered, so chained computations never see rounded input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use geomaster_contain::{Fit, Orientation, Rule};
use geomaster_core::{Metric, ShapeType};

/// Round `value` to `places` decimal places, ties to even.
///
/// Values too large to scale are returned unchanged.
///
/// ```
/// use geomaster_report::round_to;
///
/// assert_eq!(round_to(3.14159265, 4), 3.1416);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Outcome of a metric calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// Type of the measured shape.
    pub shape_type: ShapeType,
    /// The metric computed.
    pub operation: Metric,
    /// Raw, unrounded value.
    pub result: f64,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedCalculation {
    shape_type: &'static str,
    operation: &'static str,
    result: f64,
    calculated_at: DateTime<Utc>,
}

impl CalculationResult {
    /// Stamp a freshly computed value with the current time.
    pub fn now(shape_type: ShapeType, operation: Metric, result: f64) -> Self {
        Self {
            shape_type,
            operation,
            result,
            calculated_at: Utc::now(),
        }
    }

    /// The result rounded to `places` for display.
    pub fn display_value(&self, places: u32) -> f64 {
        round_to(self.result, places)
    }

    /// JSON document with the result rounded to `places`.
    pub fn render(&self, places: u32) -> Value {
        let rendered = RenderedCalculation {
            shape_type: self.shape_type.name(),
            operation: self.operation.name(),
            result: self.display_value(places),
            calculated_at: self.calculated_at,
        };
        serde_json::to_value(rendered).unwrap_or(Value::Null)
    }
}

/// Outcome of a containment query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainmentVerdict {
    /// Type of the enclosing shape.
    pub outer: ShapeType,
    /// Type of the enclosed shape.
    pub inner: ShapeType,
    /// Engine verdict with the deciding rule.
    pub fit: Fit,
}

#[derive(Serialize)]
struct RenderedVerdict {
    result: bool,
    rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<&'static str>,
}

fn orientation_name(o: Orientation) -> &'static str {
    match o {
        Orientation::AxisAligned => "axis_aligned",
        Orientation::Rotated => "rotated",
    }
}

impl ContainmentVerdict {
    /// Whether the inner shape fits.
    pub fn contains(&self) -> bool {
        self.fit.contains()
    }

    /// The rule that decided the verdict.
    pub fn rule(&self) -> Rule {
        self.fit.rule
    }

    /// JSON document `{"result": bool, "rule": ..., "orientation"?: ...}`.
    pub fn render(&self) -> Value {
        let rendered = RenderedVerdict {
            result: self.contains(),
            rule: self.rule().name(),
            orientation: self.fit.orientation.map(orientation_name),
        };
        serde_json::to_value(rendered).unwrap_or(Value::Null)
    }
}
