//! Frontend configuration module
//!
//! This module provides configuration for frontend branding and external
//! links.

/// Frontend configuration for branding and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Suffix appended to the configured community name in the brand line
    pub brand_suffix: String,
    /// Documentation URL
    pub documentation_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            brand_suffix: option_env!("NEXUS_BRAND_SUFFIX")
                .unwrap_or("Nexus")
                .to_string(),
            documentation_url: option_env!("NEXUS_DOCUMENTATION_URL")
                .unwrap_or("https://github.com/community-nexus/nexus")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the documentation URL
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }

    /// Brand line for a configured community, e.g. "Springfield Nexus".
    /// Falls back to the bare suffix while no community is configured.
    pub fn platform_title(&self, city_name: &str) -> String {
        if city_name.trim().is_empty() {
            self.brand_suffix.clone()
        } else {
            format!("{} {}", city_name.trim(), self.brand_suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.documentation_url.is_empty());
        assert!(config.documentation_url.starts_with("http"));
        assert_eq!(config.brand_suffix, "Nexus");
    }

    #[test]
    fn test_platform_title_with_city() {
        let config = FrontendConfig::new();
        assert_eq!(config.platform_title("Springfield"), "Springfield Nexus");
        assert_eq!(config.platform_title("  Elm City  "), "Elm City Nexus");
    }

    #[test]
    fn test_platform_title_without_city() {
        let config = FrontendConfig::new();
        assert_eq!(config.platform_title(""), "Nexus");
        assert_eq!(config.platform_title("   "), "Nexus");
    }
}
