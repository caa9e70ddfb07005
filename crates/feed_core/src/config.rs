use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "notifications.toml";
pub const DEFAULT_ENDPOINT: &str = "/data/data.json";
pub const DEFAULT_ERROR_MESSAGE: &str = "Could not load notifications";

/// Named mount points of the widget. Values are CSS class selectors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MountPoints {
    pub list: String,
    pub heading: String,
    pub mark_all: String,
    pub counter: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            list: ".notifications-list".into(),
            heading: ".notifications-heading".into(),
            mark_all: ".mark-all".into(),
            counter: ".notifications-count".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    pub endpoint: String,
    pub heading: String,
    pub error_message: String,
    pub mounts: MountPoints,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            heading: "Notifications".into(),
            error_message: DEFAULT_ERROR_MESSAGE.into(),
            mounts: MountPoints::default(),
        }
    }
}

/// Loads settings from `path`, or from `notifications.toml` in the working
/// directory when no path is given. A missing default file means defaults;
/// a missing explicit file is an error.
pub fn load_settings(path: Option<&Path>) -> Result<FeedSettings, ConfigError> {
    match path {
        Some(path) => read_settings(path),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                read_settings(&fallback)
            } else {
                Ok(FeedSettings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> Result<FeedSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_settings(raw: &str) -> Result<FeedSettings, toml::de::Error> {
    toml::from_str(raw)
}

/// Turns the configured endpoint into an absolute URL. Relative endpoints
/// such as `/data/data.json` are joined onto `base`.
pub fn resolve_endpoint(endpoint: &str, base: Option<&Url>) -> Result<Url, ConfigError> {
    let invalid = |source: url::ParseError| ConfigError::InvalidEndpoint {
        value: endpoint.to_string(),
        source,
    };
    match Url::parse(endpoint) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(endpoint).map_err(invalid),
            None => Err(invalid(url::ParseError::RelativeUrlWithoutBase)),
        },
        Err(err) => Err(invalid(err)),
    }
}

/// Class name behind a `.class` selector.
pub fn class_name(selector: &str) -> &str {
    selector.trim().trim_start_matches('.')
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
