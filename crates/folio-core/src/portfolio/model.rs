//! Portfolio record and content field types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{PortfolioId, PublishUrl, Template, UserId};

use super::section::{Section, default_sections};

/// A user-owned, editable, optionally published portfolio document.
///
/// Field names in the serialized form are part of the store's document
/// format (`userId`, `personalInfo`, `isPublished`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Opaque unique id, assigned at creation, immutable.
    pub id: PortfolioId,
    /// Owning user, immutable.
    pub user_id: UserId,
    /// The template this portfolio renders with.
    pub template: Template,
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    /// Section descriptors, one per section type.
    pub sections: Vec<Section>,
    #[serde(default)]
    pub theme: Theme,
    pub is_published: bool,
    /// Present iff `is_published` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_url: Option<PublishUrl>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Construct a fresh draft with default-empty content.
    ///
    /// Only the repository's create operation builds portfolios; everything
    /// else receives them from it or from the store.
    pub(crate) fn draft(user_id: UserId, template: Template, now: DateTime<Utc>) -> Self {
        Self {
            id: PortfolioId::generate(),
            user_id,
            template,
            personal_info: PersonalInfo::default(),
            skills: Vec::new(),
            projects: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            sections: default_sections(),
            theme: Theme::default(),
            is_published: false,
            publish_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Rendering theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The hero/contact block of a portfolio.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// A single skill entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
    pub category: String,
}

/// A project entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
}

/// A work experience entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    pub location: String,
    pub current: bool,
}

/// An education entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
