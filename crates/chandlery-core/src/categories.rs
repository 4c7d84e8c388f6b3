use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One catalog category and the looser spellings that should resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CategoryConfig {
    fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Returns `true` when an already-lowercased category string resolves to
    /// this category: exact name, any alias contained in it, or the name
    /// contained in it.
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        lower == self.name
            || self.aliases.iter().any(|alias| lower.contains(alias.as_str()))
            || lower.contains(self.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryConfig>,
}

/// The taxonomy of the mirrored marine catalog, used when no YAML file is configured.
#[must_use]
pub fn default_categories() -> CategoriesFile {
    CategoriesFile {
        categories: vec![
            CategoryConfig::new("electronics", &["electronic"]),
            CategoryConfig::new("motor", &[]),
            CategoryConfig::new("ropes", &["rope"]),
            CategoryConfig::new("safety", &[]),
            CategoryConfig::new("anchors", &["anchor", "anchoring", "docking"]),
            CategoryConfig::new("fitting", &["fittings"]),
            CategoryConfig::new("plumbing", &[]),
            CategoryConfig::new("painting", &["paint"]),
            CategoryConfig::new("screws", &["screw"]),
            CategoryConfig::new("tools", &["tool", "machine"]),
            CategoryConfig::new("electrics", &["lighting", "electric"]),
            CategoryConfig::new("maintenance", &["cleaning"]),
            CategoryConfig::new("navigation", &[]),
            CategoryConfig::new("clothing", &["personal", "gear", "nautical"]),
            CategoryConfig::new("life-on-board", &["life", "board"]),
            CategoryConfig::new("inflatables", &["inflatable", "water", "toys"]),
        ],
    }
}

/// Load and validate a category taxonomy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let categories_file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    validate_categories(&categories_file)?;

    Ok(categories_file)
}

fn validate_categories(categories_file: &CategoriesFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for category in &categories_file.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        // Matching runs against lowercased input.
        if category.name != category.name.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "category '{}' must be lowercase",
                category.name
            )));
        }

        if let Some(alias) = category
            .aliases
            .iter()
            .find(|a| a.trim().is_empty() || **a != a.to_lowercase())
        {
            return Err(ConfigError::Validation(format!(
                "category '{}' has invalid alias '{alias}'; aliases must be non-empty and lowercase",
                category.name
            )));
        }

        if !seen_names.insert(category.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
