//! Portfolio section descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of section types.
///
/// Every portfolio carries exactly one section descriptor per type; editors
/// may reorder or hide sections but the repository never alters the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl SectionType {
    /// All section types, in the canonical default order.
    pub fn all() -> [SectionType; 7] {
        [
            SectionType::Hero,
            SectionType::About,
            SectionType::Skills,
            SectionType::Projects,
            SectionType::Experience,
            SectionType::Education,
            SectionType::Contact,
        ]
    }

    /// The default display title for this section type.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero Section",
            SectionType::About => "About Me",
            SectionType::Skills => "Skills",
            SectionType::Projects => "Projects",
            SectionType::Experience => "Experience",
            SectionType::Education => "Education",
            SectionType::Contact => "Contact",
        }
    }

    /// Returns the section type tag as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::About => "about",
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, orderable, independently hideable block of portfolio content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section descriptor id, unique within one portfolio.
    pub id: String,
    /// The section type tag.
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// Display title, editable by the presentation layer.
    pub title: String,
    /// Whether the rendered view shows this section.
    pub is_visible: bool,
    /// Integer sort order within the portfolio.
    pub order: u32,
}

/// The canonical default sections: one per type, in default order,
/// all initially visible.
pub fn default_sections() -> Vec<Section> {
    SectionType::all()
        .into_iter()
        .enumerate()
        .map(|(i, section_type)| Section {
            id: (i + 1).to_string(),
            section_type,
            title: section_type.default_title().to_string(),
            is_visible: true,
            order: i as u32,
        })
        .collect()
}
