use std::{sync::LazyLock, time::Duration};

use thiserror::Error;

use crate::reveal::{RevealOptions, DEFAULT_REPLAY_DELAY};

/// Settings baked in at compile time, so the server render and the hydrated
/// client agree on them.
pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_build_env);

/// RFC 3339 timestamp stamped by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url must be an absolute path or an http(s) url: {0}")]
    BaseUrl(String),
    #[error("replay delay must be a whole number of milliseconds: {0}")]
    ReplayDelay(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Always ends with `/`.
    pub base_url: String,
    pub replay_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            replay_delay: DEFAULT_REPLAY_DELAY,
        }
    }
}

impl SiteConfig {
    pub fn parse(base_url: Option<&str>, replay_delay_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            if !(base.starts_with('/') || base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::BaseUrl(base.to_string()));
            }
            config.base_url = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{base}/")
            };
        }

        if let Some(ms) = replay_delay_ms.map(str::trim).filter(|s| !s.is_empty()) {
            let ms = ms
                .parse::<u64>()
                .map_err(|_| ConfigError::ReplayDelay(ms.to_string()))?;
            config.replay_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Reads `PORTFOLIO_BASE_URL` and `PORTFOLIO_REPLAY_DELAY_MS` as they were
    /// at compile time, falling back to defaults if either is malformed.
    pub fn from_build_env() -> Self {
        Self::parse(
            option_env!("PORTFOLIO_BASE_URL"),
            option_env!("PORTFOLIO_REPLAY_DELAY_MS"),
        )
        .unwrap_or_else(|e| {
            log::warn!("{e}; using default site config");
            Self::default()
        })
    }

    /// Applies the site-wide replay delay to options that still carry the
    /// default one. A delay picked by the caller is left alone.
    pub fn reveal_options(&self, options: RevealOptions) -> RevealOptions {
        if options.replay_delay == DEFAULT_REPLAY_DELAY {
            options.with_replay_delay(self.replay_delay)
        } else {
            options
        }
    }

    /// Resolves a site-local asset against the base url. Links with a scheme
    /// are returned untouched.
    pub fn asset_path(&self, path: &str) -> String {
        if path.contains(':') {
            return path.to_string();
        }
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::parse(None, None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.replay_delay, Duration::from_millis(100));
        assert_eq!(SiteConfig::parse(Some("  "), Some("")).unwrap(), config);
    }

    #[test]
    fn test_base_url_normalized() {
        let config = SiteConfig::parse(Some("/portfolio"), None).unwrap();
        assert_eq!(config.base_url, "/portfolio/");
        let config = SiteConfig::parse(Some("https://example.com/site/"), None).unwrap();
        assert_eq!(config.base_url, "https://example.com/site/");
        assert_eq!(
            SiteConfig::parse(Some("portfolio"), None),
            Err(ConfigError::BaseUrl("portfolio".to_string()))
        );
    }

    #[test]
    fn test_replay_delay() {
        let config = SiteConfig::parse(None, Some("250")).unwrap();
        assert_eq!(config.replay_delay, Duration::from_millis(250));
        assert_eq!(
            SiteConfig::parse(None, Some("fast")),
            Err(ConfigError::ReplayDelay("fast".to_string()))
        );
        assert!(SiteConfig::parse(None, Some("-5")).is_err());
    }

    #[test]
    fn test_site_delay_only_replaces_default() {
        let config = SiteConfig::parse(None, Some("250")).unwrap();

        let card = config.reveal_options(RevealOptions::card());
        assert_eq!(card.replay_delay, Duration::from_millis(250));
        assert_eq!(card.root_margin, RevealOptions::card().root_margin);

        let custom = RevealOptions::section().with_replay_delay(Duration::from_millis(40));
        let custom = config.reveal_options(custom);
        assert_eq!(custom.replay_delay, Duration::from_millis(40));

        let unchanged = SiteConfig::default().reveal_options(RevealOptions::header());
        assert_eq!(unchanged, RevealOptions::header());
    }

    #[test]
    fn test_asset_path() {
        let root = SiteConfig::default();
        assert_eq!(root.asset_path("/Mohd-Ali-CV.pdf"), "/Mohd-Ali-CV.pdf");
        assert_eq!(root.asset_path("Mohd-Ali-CV.pdf"), "/Mohd-Ali-CV.pdf");

        let nested = SiteConfig::parse(Some("/portfolio/"), None).unwrap();
        assert_eq!(
            nested.asset_path("/assets/Work/intern 1/a.png"),
            "/portfolio/assets/Work/intern 1/a.png"
        );
        assert_eq!(
            nested.asset_path("mailto:someone@example.com"),
            "mailto:someone@example.com"
        );
        assert_eq!(
            nested.asset_path("https://github.com/x"),
            "https://github.com/x"
        );
    }
}
