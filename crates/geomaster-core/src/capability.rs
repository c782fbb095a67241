//! Shape capabilities and the metrics they unlock.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMetricError;

/// Which family of metrics a shape can compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Two-dimensional: area and perimeter.
    Planar,
    /// Three-dimensional: volume and surface area.
    Solid,
}

impl Capability {
    /// Short label, `"2D"` or `"3D"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planar => "2D",
            Self::Solid => "3D",
        }
    }

    /// The metrics this capability provides, in canonical order.
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Planar => &[Metric::Area, Metric::Perimeter],
            Self::Solid => &[Metric::Volume, Metric::SurfaceArea],
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scalar metric the engine can compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Enclosed area of a 2D shape.
    Area,
    /// Boundary length of a 2D shape.
    Perimeter,
    /// Enclosed volume of a 3D shape.
    Volume,
    /// Boundary area of a 3D shape.
    SurfaceArea,
}

impl Metric {
    /// All metrics, in canonical order.
    pub const ALL: [Metric; 4] = [
        Metric::Area,
        Metric::Perimeter,
        Metric::Volume,
        Metric::SurfaceArea,
    ];

    /// Stable wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Perimeter => "perimeter",
            Self::Volume => "volume",
            Self::SurfaceArea => "surface_area",
        }
    }

    /// The capability a shape must have for this metric to be defined.
    pub fn required_capability(self) -> Capability {
        match self {
            Self::Area | Self::Perimeter => Capability::Planar,
            Self::Volume | Self::SurfaceArea => Capability::Solid,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    /// Case-insensitive; `-` and spaces are treated as `_`, and the
    /// Portuguese route names (`perimetro`, `area-superficial`)
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c,
            })
            .collect();
        match normalized.as_str() {
            "area" | "área" => Ok(Self::Area),
            "perimeter" | "perimetro" | "perímetro" => Ok(Self::Perimeter),
            "volume" => Ok(Self::Volume),
            "surface_area" | "surfacearea" | "area_superficial" | "área_superficial" => {
                Ok(Self::SurfaceArea)
            }
            _ => Err(ParseMetricError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn parse_accepts_route_spellings() {
        assert_eq!("Surface-Area".parse::<Metric>(), Ok(Metric::SurfaceArea));
        assert_eq!("area-superficial".parse::<Metric>(), Ok(Metric::SurfaceArea));
        assert_eq!("area superficial".parse::<Metric>(), Ok(Metric::SurfaceArea));
        assert_eq!("PERIMETRO".parse::<Metric>(), Ok(Metric::Perimeter));
    }

    #[test]
    fn parse_folds_accented_capitals() {
        assert_eq!("ÁREA".parse::<Metric>(), Ok(Metric::Area));
        assert_eq!("Área".parse::<Metric>(), Ok(Metric::Area));
        assert_eq!("PERÍMETRO".parse::<Metric>(), Ok(Metric::Perimeter));
        assert_eq!("ÁREA-SUPERFICIAL".parse::<Metric>(), Ok(Metric::SurfaceArea));
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "diameter".parse::<Metric>().unwrap_err();
        assert_eq!(err.name, "diameter");
    }

    #[test]
    fn capability_partitions_metrics() {
        for metric in Metric::ALL {
            let cap = metric.required_capability();
            assert!(cap.metrics().contains(&metric));
        }
        assert_eq!(Capability::Planar.metrics().len(), 2);
        assert_eq!(Capability::Solid.metrics().len(), 2);
    }
}
