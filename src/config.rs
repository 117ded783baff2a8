//! Client configuration read from the process environment.
//!
//! | Key          | Variable            | Default                               |
//! |--------------|---------------------|---------------------------------------|
//! | `api.key`    | `LASTFM_API_KEY`    | required                              |
//! | `api.url`    | `LASTFM_API_URL`    | `https://ws.audioscrobbler.com/2.0/`  |
//! | `api.format` | `LASTFM_API_FORMAT` | `json`                                |

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::clients::errors::{Error, Result};
use crate::clients::lastfm::LastFmConfig;

/// Variable holding the Last.fm API key
pub const API_KEY_VAR: &str = "LASTFM_API_KEY";
/// Variable overriding the API base URL
pub const API_URL_VAR: &str = "LASTFM_API_URL";
/// Variable overriding the response format
pub const API_FORMAT_VAR: &str = "LASTFM_API_FORMAT";

/// Public Last.fm endpoint
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";
/// Only format the search parser understands
pub const DEFAULT_FORMAT: &str = "json";

/// Load `.env` files into the environment.
///
/// The working directory is tried first, then `<config dir>/lfmtrack/.env`.
/// Missing files are fine and variables already set are never overwritten.
pub fn load_env() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {path:?}");
    }
    let path = user_env_file();
    if dotenvy::from_path(&path).is_ok() {
        debug!("Loaded environment from {path:?}");
    }
}

fn user_env_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".")) // Fallback to the working directory
        .join("lfmtrack")
        .join(".env")
}

/// Builds a [`LastFmConfig`]; unset fields come from the environment.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    format: Option<String>,
}

impl ConfigBuilder {
    /// Builder with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this API key instead of `LASTFM_API_KEY`
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Use this base URL instead of `LASTFM_API_URL`
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use this response format instead of `LASTFM_API_FORMAT`
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Resolve every field; fails without an API key
    pub fn build(self) -> Result<LastFmConfig> {
        self.build_with(|name| env::var(name).ok())
    }

    // Blank values count as unset, so an empty `.env` line falls back to the default
    fn build_with(self, lookup: impl Fn(&str) -> Option<String>) -> Result<LastFmConfig> {
        let resolve = |explicit: Option<String>, var: &str| {
            explicit.or_else(|| lookup(var).filter(|v| !v.trim().is_empty()))
        };

        let api_key = resolve(self.api_key, API_KEY_VAR)
            .ok_or_else(|| Error::Configuration(format!("{API_KEY_VAR} is not set")))?;
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(format!("{API_KEY_VAR} is empty")));
        }

        let base_url =
            resolve(self.base_url, API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let format =
            resolve(self.format, API_FORMAT_VAR).unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        Ok(LastFmConfig {
            api_key,
            base_url,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // Stand-in for the process environment
    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn explicit_values_win() {
        let config = ConfigBuilder::new()
            .api_key("k1")
            .base_url("https://api.example.com")
            .format("json")
            .build_with(env_of(&[
                (API_KEY_VAR, "env-key"),
                (API_URL_VAR, "https://env.example.com"),
                (API_FORMAT_VAR, "xml"),
            ]))
            .unwrap();

        assert_eq!(
            config,
            LastFmConfig {
                api_key: "k1".into(),
                base_url: "https://api.example.com".into(),
                format: "json".into(),
            }
        );
    }

    #[test]
    fn environment_fills_unset_fields() {
        let config = ConfigBuilder::new()
            .build_with(env_of(&[
                (API_KEY_VAR, "env-key"),
                (API_URL_VAR, "https://env.example.com/2.0/"),
                (API_FORMAT_VAR, "xml"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "https://env.example.com/2.0/");
        assert_eq!(config.format, "xml");
    }

    #[test]
    fn url_and_format_default_when_absent() {
        let config = ConfigBuilder::new()
            .build_with(env_of(&[(API_KEY_VAR, "env-key")]))
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.format, DEFAULT_FORMAT);
    }

    #[test]
    fn blank_url_and_format_fall_back_to_defaults() {
        let config = ConfigBuilder::new()
            .build_with(env_of(&[
                (API_KEY_VAR, "env-key"),
                (API_URL_VAR, ""),
                (API_FORMAT_VAR, "   "),
            ]))
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.format, DEFAULT_FORMAT);
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let result = ConfigBuilder::new().build_with(env_of(&[]));
        assert!(matches!(result, Err(Error::Configuration(_))));

        let result = ConfigBuilder::new().build_with(env_of(&[(API_KEY_VAR, "")]));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let result = ConfigBuilder::new()
            .api_key("  ")
            .build_with(env_of(&[(API_KEY_VAR, "env-key")]));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn env_file_lives_under_app_dir() {
        let path = user_env_file();
        assert!(path.ends_with("lfmtrack/.env"));
    }
}
