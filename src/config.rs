/*
 * Responsibility
 * - Load settings from the environment (.env is honored via dotenvy)
 * - Validate values; startup fails on anything unusable
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            request_body_limit_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let port = parse_port(std::env::var("PORT").ok().as_deref())?
            .unwrap_or(defaults.addr.port());

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let request_timeout =
            parse_timeout(std::env::var("REQUEST_TIMEOUT_SECONDS").ok().as_deref())?
                .unwrap_or(defaults.request_timeout);

        let request_body_limit_bytes =
            parse_body_limit(std::env::var("REQUEST_BODY_LIMIT_BYTES").ok().as_deref())?
                .unwrap_or(defaults.request_body_limit_bytes);

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_timeout,
            request_body_limit_bytes,
        })
    }
}

// Each helper returns Ok(None) when the variable is unset.

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    raw.map(|v| v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid("PORT")))
        .transpose()
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    raw.map(|v| {
        v.trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))
    })
    .transpose()
}

fn parse_body_limit(raw: Option<&str>) -> Result<Option<usize>, ConfigError> {
    raw.map(|v| {
        v.trim()
            .parse::<usize>()
            .ok()
            .filter(|bytes| *bytes > 0)
            .ok_or(ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))
    })
    .transpose()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
