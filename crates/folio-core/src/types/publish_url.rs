//! Publish url type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A shareable identifier minted when a portfolio is published.
///
/// The value has the shape `portfolio-<id>-<timestamp>`; it is minted by
/// the repository's publish operation and immutable once assigned to a
/// record. Republishing mints a fresh value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublishUrl(String);

impl PublishUrl {
    /// Create a publish url from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the publish url string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::PublishUrl {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace()) {
            return Err(InvalidInputError::PublishUrl {
                value: s.to_string(),
                reason: "cannot contain whitespace".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for PublishUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PublishUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PublishUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PublishUrl> for String {
    fn from(url: PublishUrl) -> Self {
        url.0
    }
}

impl AsRef<str> for PublishUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
