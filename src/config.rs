/*
 * Responsibility
 * - 環境変数や設定の読み込み (APPROOV_BASE64_SECRET, ヘッダ名, token binding 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::{HeaderName, header};

use crate::services::approov::{ApproovSecret, SecretError};

pub const DEFAULT_TOKEN_HEADER: &str = "approov-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(&'static str),

    #[error("invalid configuration: APPROOV_BASE64_SECRET ({0})")]
    Secret(#[from] SecretError),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Obtained with `approov secret -get`, base64 encoded.
    pub approov_secret: ApproovSecret,
    pub token_header: HeaderName,
    pub token_leeway_seconds: u64,

    pub token_binding_enabled: bool,
    // Must be the same header the mobile app binds the Approov token to.
    pub token_binding_header: HeaderName,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source (the process env in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8002,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let approov_secret = lookup("APPROOV_BASE64_SECRET")
            .ok_or(ConfigError::Missing("APPROOV_BASE64_SECRET"))
            .and_then(|v| ApproovSecret::from_base64(&v).map_err(ConfigError::from))?;

        let token_header = parse_header_name(
            lookup("APPROOV_TOKEN_HEADER"),
            HeaderName::from_static(DEFAULT_TOKEN_HEADER),
            "APPROOV_TOKEN_HEADER",
        )?;

        let token_leeway_seconds = match lookup("APPROOV_TOKEN_LEEWAY_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("APPROOV_TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };

        let token_binding_enabled = match lookup("APPROOV_TOKEN_BINDING_ENABLED") {
            Some(v) => {
                parse_bool(&v).ok_or(ConfigError::Invalid("APPROOV_TOKEN_BINDING_ENABLED"))?
            }
            None => false,
        };

        let token_binding_header = parse_header_name(
            lookup("APPROOV_TOKEN_BINDING_HEADER"),
            header::AUTHORIZATION,
            "APPROOV_TOKEN_BINDING_HEADER",
        )?;

        Ok(Self {
            addr,
            app_env,
            approov_secret,
            token_header,
            token_leeway_seconds,
            token_binding_enabled,
            token_binding_header,
        })
    }
}

fn parse_header_name(
    value: Option<String>,
    default: HeaderName,
    key: &'static str,
) -> Result<HeaderName, ConfigError> {
    match value {
        Some(v) => HeaderName::from_str(v.trim()).map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
