// Site configuration: projects, calls to action and theme colours

use crate::error::{Result, SiteError};
use crate::preview::ThumbnailService;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// The portfolio shipped with the binary.
pub const BUNDLED_SITE: &str = include_str!("../sites/default.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub summary: String,
}

impl Project {
    pub fn new(name: &str, url: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            summary: summary.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Gold,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub variant: ButtonVariant,
}

impl CallToAction {
    pub fn new(label: &str, href: &str, variant: ButtonVariant) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            aria_label: None,
            variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub gold: String,
    pub navy_1: String,
    pub navy_2: String,
    pub navy_3: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            gold: "#D4A64A".to_string(),
            navy_1: "#070B14".to_string(),
            navy_2: "#0B1630".to_string(),
            navy_3: "#0E2348".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub header_cta: CallToAction,
    pub hero_primary: CallToAction,
    pub hero_contact: CallToAction,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub thumbnails: ThumbnailService,
    pub projects: Vec<Project>,
}

impl SiteConfig {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let site: SiteConfig = serde_json::from_str(json)?;
        if site.projects.is_empty() {
            return Err(SiteError::NoProjects);
        }
        Ok(site)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading site configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Project URLs that appear more than once, in first-seen order.
    /// Cards are keyed by their raw URL, so these cards share an identity.
    pub fn duplicate_urls(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for project in &self.projects {
            *counts.entry(project.url.as_str()).or_insert(0) += 1;
        }

        let mut order: Vec<String> = Vec::new();
        for project in &self.projects {
            if counts[project.url.as_str()] > 1 && !order.contains(&project.url) {
                order.push(project.url.clone());
            }
        }

        order
    }

    pub fn warn_on_duplicates(&self) {
        for url in self.duplicate_urls() {
            warn!("Project URL {} is listed more than once; cards share a key", url);
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
