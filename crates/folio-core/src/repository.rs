//! The portfolio repository.
//!
//! Mediates all reads and writes of portfolio records against an injected
//! [`RecordStore`], scoped by user identity. Every mutation is a
//! synchronous whole-collection read-modify-write; last caller wins.

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::error::{AuthError, Error};
use crate::portfolio::Portfolio;
use crate::traits::RecordStore;
use crate::types::{PortfolioId, PublishUrl, Template, UserId};
use crate::Result;

/// Create/list/update/publish over portfolio records.
#[derive(Debug, Clone)]
pub struct PortfolioRepository<S> {
    store: S,
}

impl<S: RecordStore> PortfolioRepository<S> {
    /// Create a repository over the given record store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List the portfolios owned by a user, in stored order.
    ///
    /// Without a user id this returns an empty list without touching the
    /// store. A store that cannot be read degrades to an empty list as
    /// well; listing feeds a dashboard, so read failures are recovered
    /// here rather than surfaced.
    #[instrument(skip(self))]
    pub fn list(&self, user_id: Option<&UserId>) -> Vec<Portfolio> {
        let Some(user_id) = user_id else {
            return Vec::new();
        };

        match self.store.load() {
            Ok(portfolios) => portfolios
                .into_iter()
                .filter(|p| &p.user_id == user_id)
                .collect(),
            Err(e) => {
                warn!(error = %e, "Failed to load portfolio collection, listing none");
                Vec::new()
            }
        }
    }

    /// Create a new portfolio from a template.
    ///
    /// The record gets a fresh unique id, default-empty content, the
    /// canonical default sections, and both timestamps set to now. It is
    /// visible to subsequent `list` calls as soon as this returns.
    ///
    /// # Errors
    ///
    /// Fails with [`AuthError::Unauthenticated`] when no user id is given,
    /// and propagates store errors: creation needs a writable store.
    #[instrument(skip(self))]
    pub fn create(&self, user_id: Option<&UserId>, template: Template) -> Result<Portfolio> {
        let user_id = user_id.ok_or(AuthError::Unauthenticated)?;

        let portfolio = Portfolio::draft(user_id.clone(), template, Utc::now());

        let mut portfolios = self.store.load()?;
        portfolios.push(portfolio.clone());
        self.store.save(&portfolios)?;

        debug!(id = %portfolio.id, %template, "Created portfolio");

        Ok(portfolio)
    }

    /// Replace a stored portfolio wholesale with the given draft.
    ///
    /// `updated_at` is refreshed unconditionally, even when the content is
    /// unchanged. No field-level merge happens; the last caller wins.
    /// Returns the stamped record as persisted.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`] when no record with the draft's id
    /// exists, and propagates store errors.
    #[instrument(skip(self, portfolio), fields(id = %portfolio.id))]
    pub fn update(&self, portfolio: &Portfolio) -> Result<Portfolio> {
        let mut portfolios = self.store.load()?;

        let slot = portfolios
            .iter_mut()
            .find(|p| p.id == portfolio.id)
            .ok_or_else(|| Error::NotFound {
                id: portfolio.id.to_string(),
            })?;

        let mut stamped = portfolio.clone();
        stamped.updated_at = Utc::now();
        *slot = stamped.clone();

        self.store.save(&portfolios)?;

        debug!(id = %stamped.id, "Updated portfolio");

        Ok(stamped)
    }

    /// Transition a portfolio to the published state.
    ///
    /// Mints `portfolio-<id>-<timestamp>` from the current time, so
    /// republishing always produces a fresh link for the same record.
    /// There is no reverse transition.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`] when the id is absent, and
    /// propagates store errors.
    #[instrument(skip(self))]
    pub fn publish(&self, id: &PortfolioId) -> Result<PublishUrl> {
        let mut portfolios = self.store.load()?;

        let record = portfolios
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;

        // Microsecond resolution keeps back-to-back publishes distinct.
        let url = PublishUrl::new(format!(
            "portfolio-{}-{}",
            id,
            Utc::now().timestamp_micros()
        ))?;

        record.is_published = true;
        record.publish_url = Some(url.clone());

        self.store.save(&portfolios)?;

        debug!(%id, %url, "Published portfolio");

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::sync::Mutex;

    /// In-test fake store; `folio-store`'s `MemoryStore` is the reusable
    /// equivalent for downstream crates.
    #[derive(Default)]
    struct MemStore {
        portfolios: Mutex<Vec<Portfolio>>,
    }

    impl RecordStore for MemStore {
        fn load(&self) -> Result<Vec<Portfolio>, StoreError> {
            Ok(self.portfolios.lock().unwrap().clone())
        }

        fn save(&self, portfolios: &[Portfolio]) -> Result<(), StoreError> {
            *self.portfolios.lock().unwrap() = portfolios.to_vec();
            Ok(())
        }
    }

    /// Store whose reads always fail.
    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn load(&self) -> Result<Vec<Portfolio>, StoreError> {
            Err(StoreError::Corrupt {
                message: "expected value at line 1".to_string(),
            })
        }

        fn save(&self, _portfolios: &[Portfolio]) -> Result<(), StoreError> {
            Err(StoreError::Io {
                message: "read-only".to_string(),
            })
        }
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn list_without_user_is_empty() {
        let repo = PortfolioRepository::new(MemStore::default());
        assert!(repo.list(None).is_empty());
    }

    #[test]
    fn list_filters_by_owner() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");
        let u2 = user("u2");

        let p1 = repo.create(Some(&u1), Template::Modern).unwrap();
        let p2 = repo.create(Some(&u2), Template::Minimal).unwrap();
        let p3 = repo.create(Some(&u1), Template::Creative).unwrap();

        let listed: Vec<PortfolioId> =
            repo.list(Some(&u1)).into_iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![p1.id, p3.id]);

        let listed: Vec<PortfolioId> =
            repo.list(Some(&u2)).into_iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![p2.id]);
    }

    #[test]
    fn list_is_idempotent_without_writes() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");
        repo.create(Some(&u1), Template::Professional).unwrap();

        assert_eq!(repo.list(Some(&u1)), repo.list(Some(&u1)));
    }

    #[test]
    fn list_degrades_to_empty_on_store_failure() {
        let repo = PortfolioRepository::new(BrokenStore);
        assert!(repo.list(Some(&user("u1"))).is_empty());
    }

    #[test]
    fn create_without_user_is_unauthenticated() {
        let repo = PortfolioRepository::new(MemStore::default());
        let err = repo.create(None, Template::Modern).unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::Unauthenticated)));
    }

    #[test]
    fn create_propagates_store_failure() {
        let repo = PortfolioRepository::new(BrokenStore);
        let err = repo.create(Some(&user("u1")), Template::Modern).unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn create_appends_one_default_record() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");

        let before = repo.list(Some(&u1)).len();
        let created = repo.create(Some(&u1), Template::Minimal).unwrap();
        let after = repo.list(Some(&u1));

        assert_eq!(after.len(), before + 1);
        let listed = after.iter().find(|p| p.id == created.id).unwrap();
        assert_eq!(listed.template, Template::Minimal);
        assert!(!listed.is_published);
        assert!(listed.skills.is_empty());
        assert_eq!(listed.sections.len(), 7);
    }

    #[test]
    fn created_ids_are_unique_across_users() {
        let repo = PortfolioRepository::new(MemStore::default());
        let a = repo.create(Some(&user("u1")), Template::Modern).unwrap();
        let b = repo.create(Some(&user("u2")), Template::Modern).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_replaces_wholesale_and_bumps_updated_at() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");

        let created = repo.create(Some(&u1), Template::Modern).unwrap();

        let mut draft = created.clone();
        draft.personal_info.name = "Ada Lovelace".to_string();
        draft.theme = crate::portfolio::Theme::Dark;

        let stamped = repo.update(&draft).unwrap();
        assert!(stamped.updated_at >= created.updated_at);

        let listed = repo.list(Some(&u1));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].personal_info.name, "Ada Lovelace");
        assert_eq!(listed[0], stamped);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");
        let created = repo.create(Some(&u1), Template::Modern).unwrap();

        let mut orphan = created.clone();
        orphan.id = PortfolioId::new("missing").unwrap();

        let err = repo.update(&orphan).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        // The stored record is untouched.
        assert_eq!(repo.list(Some(&u1))[0], created);
    }

    #[test]
    fn publish_sets_flag_and_mints_fresh_urls() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");
        let created = repo.create(Some(&u1), Template::Modern).unwrap();

        let first = repo.publish(&created.id).unwrap();
        let second = repo.publish(&created.id).unwrap();

        assert_ne!(first, second);
        assert!(first.as_str().starts_with(&format!("portfolio-{}-", created.id)));
        assert!(second.as_str().starts_with(&format!("portfolio-{}-", created.id)));

        let listed = repo.list(Some(&u1));
        assert!(listed[0].is_published);
        assert_eq!(listed[0].publish_url, Some(second));
    }

    #[test]
    fn publish_unknown_id_is_not_found() {
        let repo = PortfolioRepository::new(MemStore::default());
        let id = PortfolioId::new("missing").unwrap();
        let err = repo.publish(&id).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn create_then_publish_scenario() {
        let repo = PortfolioRepository::new(MemStore::default());
        let u1 = user("u1");

        let record = repo.create(Some(&u1), Template::Modern).unwrap();
        assert_eq!(record.template, Template::Modern);
        assert!(!record.is_published);
        assert_eq!(record.sections.len(), 7);

        let url = repo.publish(&record.id).unwrap();
        let prefix = format!("portfolio-{}-", record.id);
        let timestamp = url.as_str().strip_prefix(&prefix).unwrap();
        assert!(!timestamp.is_empty());
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));

        let listed = repo.list(Some(&u1));
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_published);
    }
}
