//! Portfolio Models
//!
//! Data structures for the embedded portfolio content.

use serde::{Deserialize, Serialize};

/// Placeholder used by the content file for a link that does not exist
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the link value unless it is the `"N/A"` placeholder
pub fn available(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Stable identity of a project, independent of its list position
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Deployment targets of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishLinks {
    pub web: String,
    pub app_store: String,
    pub play_store: String,
}

/// One portfolio project shown in the file cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub tech: String,
    pub repository: String,
    pub publish: PublishLinks,
}

/// A labelled outbound link (contact rows in the about section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub list: String,
}

/// Owner information for the hero and about sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub descriptors: Vec<String>,
    /// Markdown
    pub bio: String,
    pub location: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

/// Whole embedded content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_filters_placeholder() {
        assert_eq!(available("N/A"), None);
        assert_eq!(available("https://example.com"), Some("https://example.com"));
        // Only the exact placeholder is treated as missing
        assert_eq!(available("n/a"), Some("n/a"));
        assert_eq!(available(""), Some(""));
    }
}
