use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::{Show, ShowId};

/// Залы по умолчанию: показ -> количество мест.
pub const DEFAULT_SHOWS: [Show; 3] = [Show::new(1, 45), Show::new(2, 60), Show::new(3, 75)];

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub shows: Vec<Show>,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

// Feature flags для включения/выключения функциональности
#[derive(Debug, Clone)]
pub struct FeatureFlags {
    pub enable_cors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                environment: "development".to_string(),
                rust_log: "show_booking=debug,tower_http=debug".to_string(),
                log_format: LogFormat::Pretty,
            },
            shows: DEFAULT_SHOWS.to_vec(),
            features: FeatureFlags { enable_cors: true },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных (удобно в тестах).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let shows = match lookup("SHOWS") {
            Some(raw) => parse_shows(&raw)?,
            None => defaults.shows,
        };

        Ok(Config {
            app: AppConfig {
                host: lookup("HOST").unwrap_or(defaults.app.host),
                port: parse_var(&lookup, "PORT", defaults.app.port)?,
                environment: lookup("ENVIRONMENT").unwrap_or(defaults.app.environment),
                rust_log: lookup("RUST_LOG").unwrap_or(defaults.app.rust_log),
                log_format: match lookup("LOG_FORMAT").as_deref() {
                    Some("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
            },
            shows,
            features: FeatureFlags {
                enable_cors: parse_flag(&lookup, "ENABLE_CORS", defaults.features.enable_cors)?,
            },
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBool { var, value }),
        None => Ok(default),
    }
}

/// Разбирает `SHOWS` вида `1:45,2:60,3:75`. Порядок записей = порядок регистрации.
pub fn parse_shows(raw: &str) -> Result<Vec<Show>, ConfigError> {
    let shows = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || ConfigError::InvalidShowEntry(entry.to_string());
            let (id, capacity) = entry.split_once(':').ok_or_else(invalid)?;
            let id: ShowId = id.trim().parse().map_err(|_| invalid())?;
            let capacity: u32 = capacity.trim().parse().map_err(|_| invalid())?;
            Ok(Show { id, capacity })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    if shows.is_empty() {
        return Err(ConfigError::NoShows);
    }
    Ok(shows)
}
