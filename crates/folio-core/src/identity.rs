//! Local account registry.
//!
//! The repository itself only consumes an optional [`UserId`]; this module
//! is the thing that mints them. Accounts live in the same store substrate
//! as portfolios, under their own collection.

use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{AuthError, Error, InvalidInputError};
use crate::traits::AccountStore;
use crate::types::UserId;
use crate::Result;

/// A registered user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Stable user id consumed by the repository.
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Password hash (bcrypt).
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Identity provider backed by an [`AccountStore`].
#[derive(Debug, Clone)]
pub struct Identity<S> {
    store: S,
}

impl<S: AccountStore> Identity<S> {
    /// Create an identity provider over the given account store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// Fails with [`AuthError::EmailTaken`] if an account already exists
    /// for the email.
    #[instrument(skip(self, password))]
    pub fn register(&self, email: &str, name: &str, password: &str) -> Result<Account> {
        let mut accounts = self.store.load_accounts()?;

        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken {
                email: email.to_string(),
            }
            .into());
        }

        let password_hash = hash(password, DEFAULT_COST).map_err(|e| {
            Error::InvalidInput(InvalidInputError::Other {
                message: e.to_string(),
            })
        })?;

        let account = Account {
            id: UserId::generate(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        accounts.push(account.clone());
        self.store.save_accounts(&accounts)?;

        debug!(user_id = %account.id, email = %email, "Registered account");

        Ok(account)
    }

    /// Authenticate by email and password.
    ///
    /// Both an unknown email and a wrong password surface as
    /// [`AuthError::InvalidCredentials`].
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<Account> {
        let accounts = self.store.load_accounts()?;

        let account = accounts
            .into_iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        let ok = verify(password, &account.password_hash).map_err(|e| {
            Error::InvalidInput(InvalidInputError::Other {
                message: e.to_string(),
            })
        })?;

        if !ok {
            return Err(AuthError::InvalidCredentials.into());
        }

        debug!(user_id = %account.id, "Logged in");

        Ok(account)
    }

    /// Look up an account by user id.
    pub fn find(&self, user_id: &UserId) -> Result<Option<Account>> {
        let accounts = self.store.load_accounts()?;
        Ok(accounts.into_iter().find(|a| &a.id == user_id))
    }
}
