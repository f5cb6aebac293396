//! Sleeper endpoint configuration

use serde::{Deserialize, Serialize};

pub const API_BASE_URL_ENV_VAR: &str = "SLEEPER_API_BASE_URL";
pub const CDN_BASE_URL_ENV_VAR: &str = "SLEEPER_CDN_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "https://api.sleeper.app/v1";
const DEFAULT_CDN_BASE_URL: &str = "https://sleepercdn.com";

/// Base URLs for the Sleeper REST API and its image CDN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleeperConfig {
    pub api_base_url: String,
    pub cdn_base_url: String,
}

impl Default for SleeperConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
        }
    }
}

impl SleeperConfig {
    /// Defaults, overridden by `SLEEPER_API_BASE_URL` / `SLEEPER_CDN_BASE_URL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`SleeperConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_base_url: override_or(lookup(API_BASE_URL_ENV_VAR), defaults.api_base_url),
            cdn_base_url: override_or(lookup(CDN_BASE_URL_ENV_VAR), defaults.cdn_base_url),
        }
    }

    /// Config pointing both API and CDN at one base URL (mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            api_base_url: base.clone(),
            cdn_base_url: base,
        }
    }

    pub fn player_avatar_url(&self, player_id: &str) -> String {
        format!("{}/content/nfl/players/{}.jpg", self.cdn_base_url, player_id)
    }

    pub fn user_avatar_url(&self, avatar: &str) -> String {
        format!("{}/avatars/thumbs/{}", self.cdn_base_url, avatar)
    }
}

fn override_or(value: Option<String>, default: String) -> String {
    value
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
