use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

// ============================================================================
// Site Metadata
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub title: String,
    pub contact_email: String,
    pub copyright: String,
}

// ============================================================================
// Landing Sections
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub heading: String,
    pub lede: String,
    pub primary_cta: Cta,
    #[serde(default)]
    pub secondary_cta: Option<Cta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSection {
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Closing {
    pub heading: String,
    pub body: String,
    pub cta: Cta,
}

// ============================================================================
// FAQ Types
// ============================================================================

/// One collapsible question/answer pair. `id` must be unique within a
/// section; the accordion keys DOM ids and its open/closed selection off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqSection {
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub default_open_id: Option<String>,
    pub items: Vec<FaqItem>,
}

// ============================================================================
// Document Root
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub meta: SiteMeta,
    pub hero: Hero,
    pub features: FeatureSection,
    pub faq: FaqSection,
    pub closing: Closing,
}

impl SiteContent {
    /// Parses and validates a site content document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Loads the content document bundled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(include_str!("../data/site.json"))
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.faq.items {
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateFaqId(item.id.clone()));
            }
        }
        Ok(())
    }
}
