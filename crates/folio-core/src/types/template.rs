//! Portfolio template tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The fixed set of portfolio templates.
///
/// The tag strings are part of the persisted document format, so the serde
/// representation must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Clean corporate layout.
    Professional,
    /// Bold typography and accent colors.
    Modern,
    /// Whitespace-heavy single column.
    Minimal,
    /// Asymmetric, illustration-friendly.
    Creative,
    /// WebGL hero section.
    #[serde(rename = "3d-interactive")]
    ThreeDInteractive,
}

impl Template {
    /// Returns the template tag as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Professional => "professional",
            Template::Modern => "modern",
            Template::Minimal => "minimal",
            Template::Creative => "creative",
            Template::ThreeDInteractive => "3d-interactive",
        }
    }

    /// All templates, in presentation order.
    pub fn all() -> [Template; 5] {
        [
            Template::Professional,
            Template::Modern,
            Template::Minimal,
            Template::Creative,
            Template::ThreeDInteractive,
        ]
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Template::Professional),
            "modern" => Ok(Template::Modern),
            "minimal" => Ok(Template::Minimal),
            "creative" => Ok(Template::Creative),
            "3d-interactive" => Ok(Template::ThreeDInteractive),
            _ => Err(InvalidInputError::Template {
                value: s.to_string(),
            }
            .into()),
        }
    }
}
