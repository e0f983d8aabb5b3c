//! Storefront configuration.
//!
//! Loaded from JSON embedded into the frontend bundle at compile time.
//! Invalid configuration is reported as an error so the caller can fall back
//! to [`StorefrontConfig::default`].

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::navigation::{default_navigation, NavigationItem, NAVIGATION_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Brand title shown in the header
    pub brand: String,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationItem>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "Jumehira Stores".to_string(),
            navigation: default_navigation(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StorefrontConfig =
            serde_json::from_str(json).context("Failed to parse storefront config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            bail!("brand must not be empty");
        }
        if self.navigation.len() != NAVIGATION_LEN {
            bail!(
                "navigation must have exactly {} items, got {}",
                NAVIGATION_LEN,
                self.navigation.len()
            );
        }

        let mut seen = HashSet::new();
        for (i, item) in self.navigation.iter().enumerate() {
            if item.name.trim().is_empty() {
                bail!("navigation[{}]: name must not be empty", i);
            }
            if !item.href.starts_with('/') {
                bail!("navigation[{}]: href '{}' must start with '/'", i, item.href);
            }
            // Unique hrefs keep at most one link active per route
            if !seen.insert(item.href.as_str()) {
                bail!("navigation[{}]: duplicate href '{}'", i, item.href);
            }
        }
        Ok(())
    }
}
