use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use url::Url;

use crate::domain::geo::DEFAULT_MAP_URL_TEMPLATE;
use crate::domain::{Coordinates, BULK_DAYS};
use crate::infra::listing_source::DEFAULT_LISTINGS_URL;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "WorkspaceFinder";
const APP_NAME: &str = "WorkspaceFinder";

const ENV_LISTINGS_URL: &str = "WORKSPACE_FINDER_LISTINGS_URL";
const ENV_LOCATION: &str = "WORKSPACE_FINDER_LOCATION";
const ENV_GEOIP_URL: &str = "WORKSPACE_FINDER_GEOIP_URL";
const ENV_DISPLAY_COUNT: &str = "WORKSPACE_FINDER_DISPLAY_COUNT";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listings_url: String,
    /// Cards shown on the home page.
    pub display_count: usize,
    pub bulk_days: u32,
    /// `{lat}` and `{lng}` are substituted per workspace.
    pub map_url_template: String,
    pub geolocation: GeolocationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listings_url: DEFAULT_LISTINGS_URL.to_string(),
            display_count: 6,
            bulk_days: BULK_DAYS,
            map_url_template: DEFAULT_MAP_URL_TEMPLATE.to_string(),
            geolocation: GeolocationConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub provider: GeolocationProvider,
    pub timeout_secs: u64,
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            provider: GeolocationProvider::Disabled,
            timeout_secs: 10,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeolocationProvider {
    #[default]
    Disabled,
    Fixed { latitude: f64, longitude: f64 },
    IpLookup { endpoint: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("invalid location {0:?}, expected \"lat,lng\"")]
    InvalidLocation(String),
    #[error("invalid display count {0:?}")]
    InvalidDisplayCount(String),
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Defaults, then `settings.json`, then environment overrides.
pub fn load_config() -> AppConfig {
    let mut config = match config_file() {
        Some(path) if path.exists() => match read_config(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded settings");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                AppConfig::default()
            }
        },
        _ => AppConfig::default(),
    };

    for err in apply_env_overrides(&mut config, std::env::vars()) {
        tracing::warn!(error = %err, "ignoring environment override");
    }
    config
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    parse_config(&data)
}

pub fn parse_config(data: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(data)?;
    validate_url(&config.listings_url)?;
    if let GeolocationProvider::IpLookup { endpoint } = &config.geolocation.provider {
        validate_url(endpoint)?;
    }
    Ok(config)
}

/// Applies recognised variables and returns the ones that were rejected.
pub fn apply_env_overrides<I>(config: &mut AppConfig, vars: I) -> Vec<ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut rejected = Vec::new();
    for (key, value) in vars {
        let outcome = match key.as_str() {
            ENV_LISTINGS_URL => validate_url(&value).map(|_| {
                config.listings_url = value.clone();
            }),
            ENV_LOCATION => parse_coordinates(&value).map(|point| {
                config.geolocation.provider = GeolocationProvider::Fixed {
                    latitude: point.latitude,
                    longitude: point.longitude,
                };
            }),
            ENV_GEOIP_URL => validate_url(&value).map(|_| {
                config.geolocation.provider = GeolocationProvider::IpLookup {
                    endpoint: value.clone(),
                };
            }),
            ENV_DISPLAY_COUNT => match value.trim().parse::<usize>() {
                Ok(count) if count > 0 => {
                    config.display_count = count;
                    Ok(())
                }
                _ => Err(ConfigError::InvalidDisplayCount(value.clone())),
            },
            _ => continue,
        };
        match outcome {
            Ok(()) => tracing::debug!(%key, "applied environment override"),
            Err(err) => rejected.push(err),
        }
    }
    rejected
}

pub fn parse_coordinates(raw: &str) -> Result<Coordinates, ConfigError> {
    let invalid = || ConfigError::InvalidLocation(raw.to_string());
    let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
    let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let longitude = lng.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid());
    }
    Ok(Coordinates::new(latitude, longitude))
}

fn validate_url(raw: &str) -> Result<(), ConfigError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
}
