//! Application configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are captured with
//! `option_env!` when the crate is compiled:
//! - `SUMMARIZER_NHOST_SUBDOMAIN`: Nhost project subdomain
//! - `SUMMARIZER_NHOST_REGION`: Nhost project region
//! - `SUMMARIZER_NHOST_AUTH_URL`: full auth base URL (wins over subdomain/region)
//! - `SUMMARIZER_WEBHOOK_URL`: summarization webhook endpoint

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_NHOST_SUBDOMAIN: &str = "rqhbnhgtusbwbqghesfy";
pub const DEFAULT_NHOST_REGION: &str = "ap-south-1";
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n-dev.subspace.money/webhook/summarize";

/// Where the Nhost Auth service for this project lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub subdomain: String,
    pub region: String,
    pub auth_url: Option<String>,
}

impl IdentityConfig {
    /// Base URL of the auth REST API, without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.auth_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => format!("https://{}.auth.{}.nhost.run/v1", self.subdomain, self.region),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub identity: IdentityConfig,
    pub webhook_url: String,
}

/// Raw override values, one per build-time variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides<'a> {
    pub nhost_subdomain: Option<&'a str>,
    pub nhost_region: Option<&'a str>,
    pub nhost_auth_url: Option<&'a str>,
    pub webhook_url: Option<&'a str>,
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_overrides(ConfigOverrides {
            nhost_subdomain: option_env!("SUMMARIZER_NHOST_SUBDOMAIN"),
            nhost_region: option_env!("SUMMARIZER_NHOST_REGION"),
            nhost_auth_url: option_env!("SUMMARIZER_NHOST_AUTH_URL"),
            webhook_url: option_env!("SUMMARIZER_WEBHOOK_URL"),
        })
    }

    /// Apply overrides on top of the defaults. Blank values count as unset.
    pub fn from_overrides(overrides: ConfigOverrides<'_>) -> Self {
        Self {
            identity: IdentityConfig {
                subdomain: or_default(overrides.nhost_subdomain, DEFAULT_NHOST_SUBDOMAIN),
                region: or_default(overrides.nhost_region, DEFAULT_NHOST_REGION),
                auth_url: non_blank(overrides.nhost_auth_url),
            },
            webhook_url: or_default(overrides.webhook_url, DEFAULT_WEBHOOK_URL),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(ConfigOverrides::default())
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn or_default(raw: Option<&str>, default: &str) -> String {
    non_blank(raw).unwrap_or_else(|| default.to_owned())
}
