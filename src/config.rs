// src/config.rs
// =============================================================================
// Runtime configuration, read from environment variables (and an optional
// .env file in the working directory).
//
// Variables:
//   REPO_FEED_ACCOUNT       GitHub account whose repos are listed (Swetabh48)
//   GITHUB_API_BASE         API root (https://api.github.com)
//   REPO_FEED_TIMEOUT_SECS  per-request timeout in seconds (10)
//   REPO_FEED_LIMIT         keep only the N most-starred repos (unset = all)
//   LOG_FORMAT              "pretty" or "json" (pretty)
//
// Command-line flags override the account and the limit.
// =============================================================================

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use url::Url;

pub const DEFAULT_ACCOUNT: &str = "Swetabh48";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub account: String,
    pub api_base: Url,
    pub timeout: Duration,
    pub limit: Option<usize>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Builds a Config from any key -> value lookup
    //
    // from_env() passes std::env::var; tests pass a closure over a fixed list
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account = lookup("REPO_FEED_ACCOUNT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string());

        let api_base = lookup("GITHUB_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&api_base)
            .with_context(|| format!("GITHUB_API_BASE is not a valid URL: {}", api_base))?;

        let timeout_secs = match lookup("REPO_FEED_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("REPO_FEED_TIMEOUT_SECS must be a number, got '{}'", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(anyhow!("REPO_FEED_TIMEOUT_SECS must be greater than zero"));
        }

        let limit = match lookup("REPO_FEED_LIMIT") {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .with_context(|| format!("REPO_FEED_LIMIT must be a number, got '{}'", raw))?,
            ),
            None => None,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Config {
            account,
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            limit,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.account, DEFAULT_ACCOUNT);
        assert_eq!(config.api_base.as_str(), "https://api.github.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.limit, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("REPO_FEED_ACCOUNT", "octocat"),
            ("GITHUB_API_BASE", "https://ghe.example.com/api/v3"),
            ("REPO_FEED_TIMEOUT_SECS", "3"),
            ("REPO_FEED_LIMIT", "6"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.account, "octocat");
        assert_eq!(config.api_base.host_str(), Some("ghe.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.limit, Some(6));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_account_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("REPO_FEED_ACCOUNT", "  ")])).unwrap();
        assert_eq!(config.account, DEFAULT_ACCOUNT);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup_from(&[("GITHUB_API_BASE", "not a url")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("REPO_FEED_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("REPO_FEED_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("REPO_FEED_LIMIT", "-1")])).is_err());
    }
}
