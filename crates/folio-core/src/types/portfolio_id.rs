//! Portfolio identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated portfolio identifier.
///
/// Portfolio ids are opaque, globally unique across the whole stored
/// collection, assigned once at creation and immutable thereafter.
///
/// # Example
///
/// ```
/// use folio_core::PortfolioId;
///
/// let id = PortfolioId::new("0b2d7c3e-5f1a-4b8d-9c6e-2a3b4c5d6e7f").unwrap();
/// assert_eq!(id.as_str(), "0b2d7c3e-5f1a-4b8d-9c6e-2a3b4c5d6e7f");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortfolioId(String);

impl PortfolioId {
    /// Create a new portfolio id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Mint a fresh random portfolio id.
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the portfolio id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::PortfolioId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace()) {
            return Err(InvalidInputError::PortfolioId {
                value: s.to_string(),
                reason: "cannot contain whitespace".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortfolioId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PortfolioId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PortfolioId> for String {
    fn from(id: PortfolioId) -> Self {
        id.0
    }
}

impl AsRef<str> for PortfolioId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
