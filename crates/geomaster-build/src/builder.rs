//! Builders turning property bags into validated shapes.
//!
//! Presence is checked before positivity: a rectangle with a negative
//! width and no height reports the missing height.

use geomaster_core::{
    Circle, ConstructionError, PropertyBag, Rectangle, ShapeKind, ShapeType, Sphere,
};

use crate::vocabulary::{Property, Vocabulary};

/// Shape construction under a fixed [`Vocabulary`].
///
/// # Examples
///
/// ```
/// use geomaster_build::{ShapeBuilder, Vocabulary};
/// use geomaster_core::{PropertyBag, ShapeType};
///
/// let builder = ShapeBuilder::new(Vocabulary::English);
/// let props = PropertyBag::new().with("width", 4.0).with("height", 2.0);
/// let shape = builder.construct("Rectangle", &props).unwrap();
/// assert_eq!(shape.shape_type(), ShapeType::Rectangle);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeBuilder {
    vocabulary: Vocabulary,
}

impl ShapeBuilder {
    /// Create a builder accepting `vocabulary`.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in effect.
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Dispatch on a case-insensitive type tag.
    pub fn construct(
        &self,
        tag: &str,
        properties: &PropertyBag,
    ) -> Result<ShapeKind, ConstructionError> {
        match self.vocabulary.resolve_tag(tag)? {
            ShapeType::Circle => self.build_circle(properties).map(ShapeKind::Circle),
            ShapeType::Rectangle => self.build_rectangle(properties).map(ShapeKind::Rectangle),
            ShapeType::Sphere => self.build_sphere(properties).map(ShapeKind::Sphere),
        }
    }

    /// Build a circle from `radius`.
    pub fn build_circle(&self, properties: &PropertyBag) -> Result<Circle, ConstructionError> {
        let radius = self.required(properties, Property::Radius)?;
        Circle::new(radius)
    }

    /// Build a rectangle from `width` and `height`.
    pub fn build_rectangle(
        &self,
        properties: &PropertyBag,
    ) -> Result<Rectangle, ConstructionError> {
        let width = self.required(properties, Property::Width)?;
        let height = self.required(properties, Property::Height)?;
        Rectangle::new(width, height)
    }

    /// Build a sphere from `radius`.
    pub fn build_sphere(&self, properties: &PropertyBag) -> Result<Sphere, ConstructionError> {
        let radius = self.required(properties, Property::Radius)?;
        Sphere::new(radius)
    }

    /// The first key of `property` that is present decides; a present but
    /// non-numeric value is reported as missing.
    fn required(
        &self,
        properties: &PropertyBag,
        property: Property,
    ) -> Result<f64, ConstructionError> {
        self.vocabulary
            .keys(property)
            .iter()
            .find_map(|key| properties.get(key))
            .and_then(|value| value.as_number())
            .ok_or(ConstructionError::MissingProperty {
                property: property.name(),
            })
    }
}

/// Build a circle, accepting both vocabularies.
pub fn build_circle(properties: &PropertyBag) -> Result<Circle, ConstructionError> {
    ShapeBuilder::default().build_circle(properties)
}

/// Build a rectangle, accepting both vocabularies.
pub fn build_rectangle(properties: &PropertyBag) -> Result<Rectangle, ConstructionError> {
    ShapeBuilder::default().build_rectangle(properties)
}

/// Build a sphere, accepting both vocabularies.
pub fn build_sphere(properties: &PropertyBag) -> Result<Sphere, ConstructionError> {
    ShapeBuilder::default().build_sphere(properties)
}

/// Construct any supported shape from a type tag and its properties.
///
/// An unknown tag fails with `UnsupportedShapeType` before the properties
/// are looked at.
pub fn construct_shape(tag: &str, properties: &PropertyBag) -> Result<ShapeKind, ConstructionError> {
    ShapeBuilder::default().construct(tag, properties)
}
