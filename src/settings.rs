use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classifier::ClassifierConfig;

/// Optional TOML overrides for the classifier keyword lists.
///
/// Any field present replaces the built-in list wholesale:
///
/// ```toml
/// doc_keywords = ["README", "LICENSE"]
/// patch_keywords = ["PATCH", "DIFF", "FIX"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub doc_keywords: Option<Vec<String>>,
    pub doc_exceptions: Option<Vec<String>>,
    pub patch_keywords: Option<Vec<String>>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    pub fn classifier_config(self) -> ClassifierConfig {
        let mut config = ClassifierConfig::default();
        if let Some(keywords) = self.doc_keywords {
            config.doc_keywords = keywords;
        }
        if let Some(exceptions) = self.doc_exceptions {
            config.doc_exceptions = exceptions;
        }
        if let Some(keywords) = self.patch_keywords {
            config.patch_keywords = keywords;
        }
        config
    }
}
