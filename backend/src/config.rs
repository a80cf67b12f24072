use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, time::Duration};

use crate::{error::RotationConfigError, models::holiday::Holiday};

pub const DEFAULT_ROTATION_CONFIG_PATH: &str = "config/rotation.toml";
const DEFAULT_TIME_ZONE: &str = "America/New_York";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STORE_TIMEOUT_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub time_zone: Tz,
    pub bind_addr: SocketAddr,
    pub store_timeout: Duration,
    pub rotation_config_path: String,
    pub rotation: RotationSettings,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let time_zone_name =
            env::var("APP_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIME_ZONE.to_string());
        let time_zone = parse_time_zone(&time_zone_name)?;

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let store_timeout = parse_store_timeout(env::var("ASSIGNMENT_STORE_TIMEOUT_MS").ok())?;

        let rotation_config_path = env::var("ROTATION_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_ROTATION_CONFIG_PATH.to_string());
        let rotation = RotationSettings::load(&rotation_config_path)?;

        Ok(Config {
            database_url,
            time_zone,
            bind_addr,
            store_timeout,
            rotation_config_path,
            rotation,
        })
    }

    /// Configuration without a store, for tools and tests that supply the
    /// rotation table directly.
    pub fn with_rotation(rotation: RotationSettings, time_zone: Tz) -> Self {
        Self {
            database_url: None,
            time_zone,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
            rotation_config_path: DEFAULT_ROTATION_CONFIG_PATH.to_string(),
            rotation,
        }
    }
}

/// Store lookup timeout in milliseconds; unset means the default, anything
/// else must be a positive integer.
pub fn parse_store_timeout(raw: Option<String>) -> anyhow::Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS));
    };

    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(anyhow!("Invalid ASSIGNMENT_STORE_TIMEOUT_MS value: {}", raw)),
    }
}

pub fn parse_time_zone(name: &str) -> Result<Tz, RotationConfigError> {
    name.parse()
        .map_err(|_| RotationConfigError::InvalidTimeZone(name.to_string()))
}

/// Versioned rotation table: roster order, calibration offset and holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSettings {
    #[serde(default)]
    pub revision: u32,
    /// Week number in which `roster[0]` leads.
    pub offset: i64,
    pub roster: Vec<String>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl RotationSettings {
    /// Reads the TOML table at `path`. `ROTATION_OFFSET` and a comma separated
    /// `ROTATION_ROSTER` override the file.
    pub fn load(path: &str) -> Result<Self, RotationConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix("ROTATION")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("roster"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, RotationConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
