//! Accepted spellings for shape tags and property keys.

use geomaster_core::{ConstructionError, ShapeType};

/// A dimension property a shape is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Circle and sphere radius.
    Radius,
    /// Rectangle extent along x.
    Width,
    /// Rectangle extent along y.
    Height,
}

impl Property {
    /// Canonical (English) name, as reported in errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Which spellings construction accepts.
///
/// Legacy clients send Portuguese spellings (`circulo`, `raio`, ...).
/// `Bilingual` keeps those clients working; `English` rejects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Vocabulary {
    /// Only `circle`/`rectangle`/`sphere` and `radius`/`width`/`height`.
    English,
    /// English plus the source vocabulary. English keys take precedence.
    #[default]
    Bilingual,
}

impl Vocabulary {
    /// Resolve a case-insensitive type tag.
    pub fn resolve_tag(self, tag: &str) -> Result<ShapeType, ConstructionError> {
        let resolved = match self {
            Self::English => ShapeType::from_name(tag),
            Self::Bilingual => {
                ShapeType::from_name(tag).or_else(|| ShapeType::from_source_name(tag))
            }
        };
        resolved.ok_or_else(|| ConstructionError::UnsupportedShapeType {
            tag: tag.to_string(),
        })
    }

    /// Keys to look up for `property`, in precedence order.
    pub fn keys(self, property: Property) -> &'static [&'static str] {
        match (self, property) {
            (Self::English, Property::Radius) => &["radius"],
            (Self::English, Property::Width) => &["width"],
            (Self::English, Property::Height) => &["height"],
            (Self::Bilingual, Property::Radius) => &["radius", "raio"],
            (Self::Bilingual, Property::Width) => &["width", "largura"],
            (Self::Bilingual, Property::Height) => &["height", "altura"],
        }
    }

    /// Tags this vocabulary accepts, for "valid types" hints.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::English => &["circle", "rectangle", "sphere"],
            Self::Bilingual => &[
                "circle",
                "rectangle",
                "sphere",
                "circulo",
                "retangulo",
                "esfera",
            ],
        }
    }
}
