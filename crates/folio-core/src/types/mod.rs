//! Core folio types.
//!
//! These types enforce invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod portfolio_id;
mod publish_url;
mod template;
mod user_id;

pub use portfolio_id::PortfolioId;
pub use publish_url::PublishUrl;
pub use template::Template;
pub use user_id::UserId;
