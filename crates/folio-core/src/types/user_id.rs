//! User identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated user identifier.
///
/// User ids are opaque strings minted by the identity layer. The repository
/// only compares them for equality when scoping portfolios to their owner.
///
/// # Example
///
/// ```
/// use folio_core::UserId;
///
/// let id = UserId::new("6b48c2a4-9f1e-4d7a-b3c8-1f2e3d4c5b6a").unwrap();
/// assert_eq!(id.as_str(), "6b48c2a4-9f1e-4d7a-b3c8-1f2e3d4c5b6a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new user id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Mint a fresh random user id.
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the user id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::UserId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.chars().any(|c| c.is_whitespace()) {
            return Err(InvalidInputError::UserId {
                value: s.to_string(),
                reason: "cannot contain whitespace".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uuid_style() {
        let id = UserId::new("6b48c2a4-9f1e-4d7a-b3c8-1f2e3d4c5b6a").unwrap();
        assert_eq!(id.as_str(), "6b48c2a4-9f1e-4d7a-b3c8-1f2e3d4c5b6a");
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn invalid_empty() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn invalid_whitespace() {
        assert!(UserId::new("user 1").is_err());
    }
}
