use contracts::shared::config::StorefrontConfig;
use leptos::prelude::*;

const EMBEDDED_CONFIG: &str = include_str!("../../config/storefront.json");

/// Parse the embedded config, falling back to the built-in defaults.
pub fn load_config() -> StorefrontConfig {
    match StorefrontConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid storefront config, using defaults: {:#}", e);
            StorefrontConfig::default()
        }
    }
}

pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>().expect("StorefrontConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = StorefrontConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }
}
