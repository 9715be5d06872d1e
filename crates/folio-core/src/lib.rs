//! folio-core - Core types, traits and repository logic for folio.

pub mod error;
pub mod identity;
pub mod portfolio;
pub mod repository;
pub mod traits;
pub mod types;

pub use error::Error;
pub use identity::{Account, Identity};
pub use portfolio::{
    Education, Experience, PersonalInfo, Portfolio, Project, Section, SectionType, Skill, Theme,
};
pub use repository::PortfolioRepository;
pub use traits::{AccountStore, RecordStore};
pub use types::{PortfolioId, PublishUrl, Template, UserId};

/// Result type alias defaulting to the crate's Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
