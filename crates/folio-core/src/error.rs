//! Error types for the folio libraries.
//!
//! This module provides a unified error type with explicit variants for
//! authentication, lookup, persistence, and input validation errors.

use thiserror::Error;

/// The unified error type for folio operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication errors (missing session, bad credentials).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A portfolio id that is absent from the stored collection.
    #[error("portfolio '{id}' not found")]
    NotFound { id: String },

    /// Persistence errors from the record store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (invalid user id, template tag, etc.).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An operation requiring a user identity was invoked without one.
    #[error("not authenticated")]
    Unauthenticated,

    /// Invalid email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account already exists for this email.
    #[error("email '{email}' is already registered")]
    EmailTaken { email: String },
}

/// Persistence errors from a record store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read or written.
    #[error("store unavailable: {message}")]
    Io { message: String },

    /// The persisted document is not valid JSON of the expected shape.
    #[error("store corrupt: {message}")]
    Corrupt { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid user id format.
    #[error("invalid user id '{value}': {reason}")]
    UserId { value: String, reason: String },

    /// Invalid portfolio id format.
    #[error("invalid portfolio id '{value}': {reason}")]
    PortfolioId { value: String, reason: String },

    /// Unknown template tag.
    #[error("unknown template '{value}'")]
    Template { value: String },

    /// Invalid publish url format.
    #[error("invalid publish url '{value}': {reason}")]
    PublishUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
