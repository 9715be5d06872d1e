//! The Portfolio record model.
//!
//! `Portfolio` is the sole persisted entity. Records are created and
//! mutated only through the [`PortfolioRepository`](crate::PortfolioRepository);
//! a deserialized or cloned value held elsewhere is a working draft until
//! it is saved back through the repository's update operation.

mod model;
mod section;

pub use model::{Education, Experience, PersonalInfo, Portfolio, Project, Skill, Theme};
pub use section::{Section, SectionType, default_sections};
