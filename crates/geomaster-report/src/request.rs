//! Request documents and their conversion to property bags.

use serde::Deserialize;
use serde_json::{Map, Value};

use geomaster_core::{PropertyBag, PropertyValue};

/// A shape as submitted by a client.
///
/// ```json
/// { "shapeType": "rectangle", "properties": { "width": 10.0, "height": 8.0 } }
/// ```
///
/// The Portuguese field names `tipoForma` and `propriedades` are
/// accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRequest {
    /// Shape type tag, resolved case-insensitively.
    #[serde(alias = "tipoForma")]
    pub shape_type: String,
    /// Raw properties. Absent means empty.
    #[serde(default, alias = "propriedades")]
    pub properties: Map<String, Value>,
}

impl ShapeRequest {
    /// Build a request from a tag and a JSON object of properties.
    pub fn new(shape_type: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            shape_type: shape_type.into(),
            properties,
        }
    }

    /// The properties as an untyped bag.
    pub fn property_bag(&self) -> PropertyBag {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), property_value(v)))
            .collect()
    }
}

/// An ordered pair of shapes for a containment query.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContainmentRequest {
    /// The enclosing shape.
    #[serde(alias = "formaExterna")]
    pub outer: ShapeRequest,
    /// The enclosed shape.
    #[serde(alias = "formaInterna")]
    pub inner: ShapeRequest,
}

/// Arrays and objects have no scalar meaning and become `Null`.
fn property_value(v: &Value) -> PropertyValue {
    match v {
        Value::Number(n) => n.as_f64().map_or(PropertyValue::Null, PropertyValue::Number),
        Value::String(s) => PropertyValue::Text(s.clone()),
        Value::Bool(b) => PropertyValue::Bool(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => PropertyValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_english_document() {
        let req: ShapeRequest = serde_json::from_value(json!({
            "shapeType": "circle",
            "properties": { "radius": 5 }
        }))
        .unwrap();
        assert_eq!(req.shape_type, "circle");
        assert_eq!(req.property_bag().number("radius"), Some(5.0));
    }

    #[test]
    fn parses_source_document() {
        let req: ShapeRequest = serde_json::from_value(json!({
            "tipoForma": "retangulo",
            "propriedades": { "largura": 10.0, "altura": 8.0 }
        }))
        .unwrap();
        assert_eq!(req.shape_type, "retangulo");
        let bag = req.property_bag();
        assert_eq!(bag.number("largura"), Some(10.0));
        assert_eq!(bag.number("altura"), Some(8.0));
    }

    #[test]
    fn missing_properties_is_empty_bag() {
        let req: ShapeRequest = serde_json::from_value(json!({ "shapeType": "sphere" })).unwrap();
        assert!(req.property_bag().is_empty());
    }

    #[test]
    fn missing_shape_type_is_an_error() {
        let parsed = serde_json::from_value::<ShapeRequest>(json!({ "properties": {} }));
        assert!(parsed.is_err());
    }

    #[test]
    fn non_scalar_values_become_null() {
        let req: ShapeRequest = serde_json::from_value(json!({
            "shapeType": "circle",
            "properties": { "radius": [1, 2], "label": "x", "flag": true }
        }))
        .unwrap();
        let bag = req.property_bag();
        assert_eq!(bag.get("radius"), Some(&PropertyValue::Null));
        assert_eq!(bag.get("label"), Some(&PropertyValue::Text("x".into())));
        assert_eq!(bag.get("flag"), Some(&PropertyValue::Bool(true)));
    }

    #[test]
    fn containment_accepts_both_field_names() {
        let english: ContainmentRequest = serde_json::from_value(json!({
            "outer": { "shapeType": "circle", "properties": { "radius": 2 } },
            "inner": { "shapeType": "rectangle", "properties": { "width": 2, "height": 3 } }
        }))
        .unwrap();
        let source: ContainmentRequest = serde_json::from_value(json!({
            "formaExterna": { "shapeType": "circle", "properties": { "radius": 2 } },
            "formaInterna": { "shapeType": "rectangle", "properties": { "width": 2, "height": 3 } }
        }))
        .unwrap();
        assert_eq!(english, source);
    }
}
