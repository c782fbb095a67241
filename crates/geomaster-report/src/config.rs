//! Boundary configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use geomaster_build::Vocabulary;

/// Configuration for a [`Calculator`](crate::Calculator).
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Decimal places rendered results are rounded to. Default: 4.
    pub decimal_places: u32,
    /// Accepted tag and property-key spellings. Default: bilingual.
    pub vocabulary: Vocabulary,
}

impl ReportConfig {
    /// Largest `decimal_places` that still changes an `f64`.
    pub const MAX_DECIMAL_PLACES: u32 = 15;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(ConfigError::DecimalPlacesTooLarge {
                configured: self.decimal_places,
            });
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_places: 4,
            vocabulary: Vocabulary::Bilingual,
        }
    }
}

/// Errors detected during [`ReportConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `decimal_places` exceeds [`ReportConfig::MAX_DECIMAL_PLACES`].
    DecimalPlacesTooLarge {
        /// The configured value.
        configured: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecimalPlacesTooLarge { configured } => write!(
                f,
                "decimal_places {configured} exceeds maximum of {}",
                ReportConfig::MAX_DECIMAL_PLACES
            ),
        }
    }
}

impl Error for ConfigError {}
