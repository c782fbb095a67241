//! Request handling: parse, construct, compute, render.

use serde_json::Value;

use geomaster_build::ShapeBuilder;
use geomaster_contain::fit;
use geomaster_core::{Capability, ConstructionError, Metric, ShapeKind, ShapeType};
use geomaster_metric::compute_metric;

use crate::config::{ConfigError, ReportConfig};
use crate::error::GeoError;
use crate::request::{ContainmentRequest, ShapeRequest};
use crate::result::{CalculationResult, ContainmentVerdict};
use crate::status::{Problem, Status};

/// A rendered response: status plus JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// Status code.
    pub status: Status,
    /// Result document on success, [`Problem`] document on failure.
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self {
            status: Status::Ok,
            body,
        }
    }
}

/// Stateless front door to the engines.
///
/// Holds only validated configuration; every call is independent and
/// `Calculator` is `Send + Sync`.
///
/// # Examples
///
/// ```
/// use geomaster_report::{Calculator, ReportConfig, Status};
///
/// let calc = Calculator::new(ReportConfig::default()).unwrap();
/// let body = r#"{"shapeType": "circle", "properties": {"radius": 5}}"#;
/// let response = calc.handle_metric_json("area", body);
/// assert_eq!(response.status, Status::Ok);
/// assert_eq!(response.body["result"], 78.5398);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    config: ReportConfig,
    builder: ShapeBuilder,
}

impl Calculator {
    /// Create a calculator, validating `config`.
    pub fn new(config: ReportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            builder: ShapeBuilder::new(config.vocabulary),
            config,
        })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Construct the shape a request describes.
    pub fn shape(&self, request: &ShapeRequest) -> Result<ShapeKind, GeoError> {
        let properties = request.property_bag();
        Ok(self.builder.construct(&request.shape_type, &properties)?)
    }

    /// Compute `metric` for the requested shape. The result is unrounded.
    pub fn calculate(
        &self,
        request: &ShapeRequest,
        metric: Metric,
    ) -> Result<CalculationResult, GeoError> {
        let shape = self.shape(request)?;
        let value = compute_metric(&shape, metric)?;
        Ok(CalculationResult::now(shape.shape_type(), metric, value))
    }

    /// Decide whether the inner shape fits inside the outer one.
    ///
    /// Both shapes are constructed before the pair is checked, so a
    /// sphere operand is reported as an unsupported pair rather than as
    /// an unsupported shape type.
    pub fn check_containment(
        &self,
        request: &ContainmentRequest,
    ) -> Result<ContainmentVerdict, GeoError> {
        let outer = self.shape(&request.outer)?;
        let inner = self.shape(&request.inner)?;
        let fit = fit(&outer, &inner)?;
        Ok(ContainmentVerdict {
            outer: outer.shape_type(),
            inner: inner.shape_type(),
            fit,
        })
    }

    /// Handle a metric request: `metric_name` from the route, `body` as JSON.
    pub fn handle_metric_json(&self, metric_name: &str, body: &str) -> Response {
        let metric = match metric_name.parse::<Metric>() {
            Ok(metric) => metric,
            Err(e) => {
                let hint = format!("valid operations: {}", join(Metric::ALL.map(Metric::name)));
                return self.reject(&e.into(), Some(hint));
            }
        };
        let outcome = serde_json::from_str::<ShapeRequest>(body)
            .map_err(GeoError::from)
            .and_then(|request| self.calculate(&request, metric).map(|r| (request, r)));
        match outcome {
            Ok((request, result)) => {
                tracing::debug!(
                    shape_type = %result.shape_type,
                    tag = %request.shape_type,
                    operation = %result.operation,
                    result = result.result,
                    "calculation complete"
                );
                Response::ok(result.render(self.config.decimal_places))
            }
            Err(e) => {
                let hint = metric_hint(&e, metric);
                self.reject(&e, hint)
            }
        }
    }

    /// Handle a containment request with a JSON body.
    pub fn handle_containment_json(&self, body: &str) -> Response {
        let outcome = serde_json::from_str::<ContainmentRequest>(body)
            .map_err(GeoError::from)
            .and_then(|request| self.check_containment(&request));
        match outcome {
            Ok(verdict) => {
                tracing::debug!(
                    outer = %verdict.outer,
                    inner = %verdict.inner,
                    rule = %verdict.rule(),
                    contains = verdict.contains(),
                    "containment decided"
                );
                Response::ok(verdict.render())
            }
            Err(e) => {
                let hint = match &e {
                    GeoError::Construction(ConstructionError::UnsupportedShapeType { .. })
                    | GeoError::Containment(_) => Some(format!(
                        "valid types: {}",
                        join(types_with(Capability::Planar))
                    )),
                    _ => None,
                };
                self.reject(&e, hint)
            }
        }
    }

    fn reject(&self, error: &GeoError, hint: Option<String>) -> Response {
        let problem = Problem::new(error, hint);
        tracing::warn!(
            status = problem.status,
            kind = problem.kind.unwrap_or("transport"),
            detail = %problem.detail,
            "request rejected"
        );
        Response {
            status: Status::from(error),
            body: serde_json::to_value(problem).unwrap_or(Value::Null),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        let config = ReportConfig::default();
        Self {
            builder: ShapeBuilder::new(config.vocabulary),
            config,
        }
    }
}

fn metric_hint(error: &GeoError, metric: Metric) -> Option<String> {
    match error {
        GeoError::Construction(ConstructionError::UnsupportedShapeType { .. }) => Some(format!(
            "valid types: {}",
            join(types_with(metric.required_capability()))
        )),
        GeoError::Operation(op) => Some(format!(
            "supported operations: {}",
            join(op.shape.capability().metrics().iter().map(|m| m.name()))
        )),
        _ => None,
    }
}

fn types_with(capability: Capability) -> impl Iterator<Item = &'static str> {
    ShapeType::ALL
        .into_iter()
        .filter(move |t| t.capability() == capability)
        .map(ShapeType::name)
}

fn join<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomaster_build::Vocabulary;
    use geomaster_metric::supported_metrics;
    use geomaster_test_utils::{circle, sphere};
    use serde_json::json;

    fn calc() -> Calculator {
        Calculator::new(ReportConfig::default()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ReportConfig {
            decimal_places: 99,
            ..Default::default()
        };
        assert!(Calculator::new(config).is_err());
    }

    #[test]
    fn area_of_rectangle() {
        let body = json!({"shapeType": "rectangle", "properties": {"width": 10.0, "height": 8.0}});
        let r = calc().handle_metric_json("area", &body.to_string());
        assert_eq!(r.status, Status::Ok);
        assert_eq!(r.body["result"], 80.0);
        assert_eq!(r.body["operation"], "area");
        assert_eq!(r.body["shapeType"], "rectangle");
    }

    #[test]
    fn surface_area_of_source_sphere() {
        let body = json!({"tipoForma": "esfera", "propriedades": {"raio": 8.0}});
        let r = calc().handle_metric_json("area-superficial", &body.to_string());
        assert_eq!(r.status, Status::Ok);
        assert_eq!(r.body["result"], 804.2477);
        assert_eq!(r.body["operation"], "surface_area");
    }

    #[test]
    fn volume_of_rectangle_is_unprocessable() {
        let body = json!({"shapeType": "rectangle", "properties": {"width": 1, "height": 2}});
        let r = calc().handle_metric_json("volume", &body.to_string());
        assert_eq!(r.status, Status::UnprocessableEntity);
        assert_eq!(r.body["kind"], "unsupported_operation");
        assert_eq!(r.body["title"], "Operation not supported");
        let detail = r.body["detail"].as_str().unwrap();
        assert!(detail.ends_with("supported operations: area, perimeter"), "{detail}");
    }

    #[test]
    fn unknown_tag_lists_types_for_metric() {
        let body = json!({"shapeType": "cube", "properties": {}});
        let r = calc().handle_metric_json("volume", &body.to_string());
        assert_eq!(r.status, Status::BadRequest);
        assert_eq!(r.body["kind"], "unsupported_shape_type");
        let detail = r.body["detail"].as_str().unwrap();
        assert!(detail.ends_with("valid types: sphere"), "{detail}");
    }

    #[test]
    fn unknown_metric_is_bad_request() {
        let r = calc().handle_metric_json("diameter", "{}");
        assert_eq!(r.status, Status::BadRequest);
        assert!(r.body.get("kind").is_none());
        let detail = r.body["detail"].as_str().unwrap();
        assert!(detail.contains("surface_area"), "{detail}");
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let r = calc().handle_metric_json("area", "{not json");
        assert_eq!(r.status, Status::BadRequest);
        assert!(r.body["detail"]
            .as_str()
            .unwrap()
            .starts_with("malformed request"));
    }

    #[test]
    fn missing_and_invalid_dimensions_are_distinct_kinds() {
        let missing = json!({"shapeType": "circle", "properties": {}});
        let invalid = json!({"shapeType": "circle", "properties": {"radius": 0}});
        let r1 = calc().handle_metric_json("area", &missing.to_string());
        let r2 = calc().handle_metric_json("area", &invalid.to_string());
        assert_eq!(r1.status, Status::BadRequest);
        assert_eq!(r2.status, Status::BadRequest);
        assert_eq!(r1.body["kind"], "missing_property");
        assert_eq!(r2.body["kind"], "invalid_dimension");
    }

    #[test]
    fn english_vocabulary_rejects_source_tags() {
        let calc = Calculator::new(ReportConfig {
            vocabulary: Vocabulary::English,
            ..Default::default()
        })
        .unwrap();
        let body = json!({"shapeType": "circulo", "properties": {"raio": 1}});
        let r = calc.handle_metric_json("area", &body.to_string());
        assert_eq!(r.status, Status::BadRequest);
    }

    #[test]
    fn decimal_places_apply_to_rendering_only() {
        let calc = Calculator::new(ReportConfig {
            decimal_places: 1,
            ..Default::default()
        })
        .unwrap();
        let request = ShapeRequest::new(
            "circle",
            json!({"radius": 1.0}).as_object().cloned().unwrap_or_default(),
        );
        let result = calc.calculate(&request, Metric::Area).unwrap();
        assert_eq!(result.result, std::f64::consts::PI);
        let r = calc.handle_metric_json("area", &json!({"shapeType": "circle", "properties": {"radius": 1.0}}).to_string());
        assert_eq!(r.body["result"], 3.1);
    }

    #[test]
    fn containment_round_trip() {
        let body = json!({
            "formaExterna": {"tipoForma": "retangulo", "propriedades": {"largura": 10.0, "altura": 10.0}},
            "formaInterna": {"tipoForma": "circulo", "propriedades": {"raio": 5.0}}
        });
        let r = calc().handle_containment_json(&body.to_string());
        assert_eq!(r.status, Status::Ok);
        assert_eq!(r.body["result"], true);
        assert_eq!(r.body["rule"], "circle_in_rectangle");
    }

    #[test]
    fn containment_false_is_still_ok() {
        let body = json!({
            "outer": {"shapeType": "circle", "properties": {"radius": 2.0}},
            "inner": {"shapeType": "rectangle", "properties": {"width": 2.0, "height": 3.0}}
        });
        let r = calc().handle_containment_json(&body.to_string());
        assert_eq!(r.status, Status::Ok);
        assert_eq!(r.body["result"], false);
    }

    #[test]
    fn containment_with_sphere_is_unprocessable() {
        let body = json!({
            "outer": {"shapeType": "sphere", "properties": {"radius": 9.0}},
            "inner": {"shapeType": "circle", "properties": {"radius": 1.0}}
        });
        let r = calc().handle_containment_json(&body.to_string());
        assert_eq!(r.status, Status::UnprocessableEntity);
        assert_eq!(r.body["kind"], "unsupported_containment_pair");
        let detail = r.body["detail"].as_str().unwrap();
        assert!(detail.ends_with("valid types: circle, rectangle"), "{detail}");
    }

    #[test]
    fn containment_construction_errors_come_first() {
        let body = json!({
            "outer": {"shapeType": "sphere", "properties": {"radius": 9.0}},
            "inner": {"shapeType": "circle", "properties": {"radius": -1.0}}
        });
        let r = calc().handle_containment_json(&body.to_string());
        assert_eq!(r.status, Status::BadRequest);
        assert_eq!(r.body["kind"], "invalid_dimension");
    }

    #[test]
    fn operation_hint_matches_engine() {
        for shape in [circle(1.0), sphere(1.0)] {
            let listed = shape.capability().metrics();
            assert_eq!(supported_metrics(&shape), listed);
        }
    }
}
