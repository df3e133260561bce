//! Configuration management for issue-ferry
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (FERRY_*)
//! 3. Config file (~/.config/ferry/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// GitHub's GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// Largest page GitHub's GraphQL connections will return
pub const MAX_PAGE_SIZE: u32 = 100;

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GraphQL endpoint
    pub api_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Issues requested per page when listing
    pub page_size: u32,

    /// Upper bound on pages fetched while listing; 0 disables the bound
    pub max_pages: u32,

    /// Per-request timeout; unset uses the HTTP client's defaults
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: "ferry".to_string(),
            page_size: MAX_PAGE_SIZE,
            max_pages: 1000,
            request_timeout: None,
        }
    }
}

impl GitHubConfig {
    /// Page bound as used by the issue lister (`None` means unbounded)
    pub fn page_limit(&self) -> Option<u32> {
        (self.max_pages > 0).then_some(self.max_pages)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration
    pub github: GitHubConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/ferry/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ferry").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - FERRY_API_URL: GraphQL endpoint
    /// - FERRY_PAGE_SIZE: issues per page
    /// - FERRY_MAX_PAGES: pagination bound (0 for none)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(api_url) = lookup("FERRY_API_URL") {
            self.github.api_url = api_url;
        }

        if let Some(raw) = lookup("FERRY_PAGE_SIZE") {
            match raw.trim().parse() {
                Ok(page_size) => self.github.page_size = page_size,
                Err(_) => warn!(value = %raw, "Ignoring non-numeric FERRY_PAGE_SIZE"),
            }
        }

        if let Some(raw) = lookup("FERRY_MAX_PAGES") {
            match raw.trim().parse() {
                Ok(max_pages) => self.github.max_pages = max_pages,
                Err(_) => warn!(value = %raw, "Ignoring non-numeric FERRY_MAX_PAGES"),
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        api_url: Option<String>,
        page_size: Option<u32>,
        max_pages: Option<u32>,
    ) -> Self {
        if let Some(url) = api_url {
            self.github.api_url = url;
        }

        if let Some(size) = page_size {
            self.github.page_size = size;
        }

        if let Some(pages) = max_pages {
            self.github.max_pages = pages;
        }

        self
    }

    /// Check values that cannot be expressed in the type system
    pub fn validate(&self) -> Result<()> {
        let page_size = self.github.page_size;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::Config(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        let url = url::Url::parse(&self.github.api_url)
            .map_err(|e| Error::Config(format!("Invalid api_url '{}': {}", self.github.api_url, e)))?;
        if !matches!(url.scheme(), "https" | "http") {
            return Err(Error::Config(format!(
                "api_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Load configuration with all overrides applied, then validate it
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        api_url: Option<String>,
        page_size: Option<u32>,
        max_pages: Option<u32>,
    ) -> Result<Self> {
        let config = Self::load()?
            .with_env_overrides()
            .with_cli_overrides(api_url, page_size, max_pages);
        config.validate()?;
        Ok(config)
    }
}
