//! The closed shape model: circles, rectangles and spheres.
//!
//! Every shape is an immutable `Copy` value whose constructor enforces
//! strictly positive dimensions no larger than the shape's bound. Each
//! bound is the largest value for which every metric of the shape is
//! still a finite `f64`, so engines can be total over their inputs.

use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

use crate::capability::Capability;
use crate::error::ConstructionError;

/// A named dimension of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    /// Canonical property name (`"radius"`, `"width"`, `"height"`).
    pub name: &'static str,
    /// The value, always positive and finite.
    pub value: f64,
}

/// Inline list of a shape's dimensions; no shape has more than two.
pub type Dimensions = SmallVec<[Dimension; 2]>;

/// Accept `value` if it lies in `(0, max]`. NaN fails both comparisons.
fn bounded(property: &'static str, value: f64, max: f64) -> Result<f64, ConstructionError> {
    if value > 0.0 && value <= max {
        Ok(value)
    } else {
        Err(ConstructionError::InvalidDimension { property, value })
    }
}

/// A circle of a given radius.
///
/// # Examples
///
/// ```
/// use geomaster_core::Circle;
///
/// let c = Circle::new(2.5).unwrap();
/// assert_eq!(c.diameter(), 5.0);
/// assert!(Circle::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Largest radius whose area `πr²` is finite.
    pub const MAX_RADIUS: f64 = 7.5e153;

    /// Create a circle. Fails with `InvalidDimension` unless
    /// `0 < radius <= MAX_RADIUS`.
    pub fn new(radius: f64) -> Result<Self, ConstructionError> {
        Ok(Self {
            radius: bounded("radius", radius, Self::MAX_RADIUS)?,
        })
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Diameter, `2r`.
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Largest side for which the area `w·h` is finite.
    pub const MAX_SIDE: f64 = 1.3e154;

    /// Create a rectangle. Width is validated before height; each must lie
    /// in `(0, MAX_SIDE]`.
    pub fn new(width: f64, height: f64) -> Result<Self, ConstructionError> {
        let width = bounded("width", width, Self::MAX_SIDE)?;
        let height = bounded("height", height, Self::MAX_SIDE)?;
        Ok(Self { width, height })
    }

    /// Extent along the x axis.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along the y axis.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length of the diagonal, `sqrt(w² + h²)`.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// The same rectangle turned by 90°.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// A sphere of a given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Largest radius whose volume `(4/3)πr³` is finite.
    pub const MAX_RADIUS: f64 = 3.5e102;

    /// Create a sphere. Fails with `InvalidDimension` unless
    /// `0 < radius <= MAX_RADIUS`.
    pub fn new(radius: f64) -> Result<Self, ConstructionError> {
        Ok(Self {
            radius: bounded("radius", radius, Self::MAX_RADIUS)?,
        })
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Tag naming one of the supported shape families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// [`Circle`].
    Circle,
    /// [`Rectangle`].
    Rectangle,
    /// [`Sphere`].
    Sphere,
}

impl ShapeType {
    /// All shape types, in canonical order.
    pub const ALL: [ShapeType; 3] = [ShapeType::Circle, ShapeType::Rectangle, ShapeType::Sphere];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Sphere => "sphere",
        }
    }

    /// Capability shared by every shape of this type.
    pub fn capability(self) -> Capability {
        match self {
            Self::Circle | Self::Rectangle => Capability::Planar,
            Self::Sphere => Capability::Solid,
        }
    }

    /// Case-insensitive lookup of the canonical English name.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "rectangle" => Some(Self::Rectangle),
            "sphere" => Some(Self::Sphere),
            _ => None,
        }
    }

    /// Case-insensitive lookup of the Portuguese tags.
    pub fn from_source_name(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "circulo" | "círculo" => Some(Self::Circle),
            "retangulo" | "retângulo" => Some(Self::Rectangle),
            "esfera" => Some(Self::Sphere),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = ConstructionError;

    /// Accepts both vocabularies, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_source_name(s))
            .ok_or_else(|| ConstructionError::UnsupportedShapeType { tag: s.to_string() })
    }
}

/// A validated shape of any supported family.
///
/// Engines match on this closed union exhaustively; adding a shape is a
/// compile-time event, not a registration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    /// A circle.
    Circle(Circle),
    /// A rectangle.
    Rectangle(Rectangle),
    /// A sphere.
    Sphere(Sphere),
}

impl ShapeKind {
    /// The family tag.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Circle(_) => ShapeType::Circle,
            Self::Rectangle(_) => ShapeType::Rectangle,
            Self::Sphere(_) => ShapeType::Sphere,
        }
    }

    /// Which metric family this shape supports.
    pub fn capability(&self) -> Capability {
        self.shape_type().capability()
    }

    /// Named dimensions in declaration order.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::Circle(c) => smallvec![Dimension {
                name: "radius",
                value: c.radius()
            }],
            Self::Rectangle(r) => smallvec![
                Dimension {
                    name: "width",
                    value: r.width()
                },
                Dimension {
                    name: "height",
                    value: r.height()
                },
            ],
            Self::Sphere(s) => smallvec![Dimension {
                name: "radius",
                value: s.radius()
            }],
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Sphere> for ShapeKind {
    fn from(s: Sphere) -> Self {
        Self::Sphere(s)
    }
}
