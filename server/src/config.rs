//! Server configuration parsed from environment variables.
//!
//! Optional integrations (database, translation, GitHub token) are `None`
//! when their variables are absent; the server still starts and the
//! affected endpoints degrade. Malformed values are errors.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use prefs::Precedence;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        "E_CONFIG_INVALID"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub precedence: Precedence,
    pub admin_token: Option<String>,
    pub gemini: Option<GeminiConfig>,
    pub github_token: Option<String>,
    pub github_base_url: String,
    pub timeouts: HttpTimeouts,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: in-memory document store when absent
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `COOKIE_SECURE`: `1|true|yes|on` / `0|false|no|off`; defaults to true
    ///   when `LEPTOS_ENV` is `PROD`/`production`, false otherwise
    /// - `PREFERENCE_PRECEDENCE`: `local-first` (default), `cookie-first`, `cookie-only`
    /// - `ADMIN_API_TOKEN`: bearer token for admin endpoints; they answer 503 when unset
    /// - `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`: translation
    /// - `GITHUB_TOKEN`, `GITHUB_API_BASE_URL`: repository content proxy
    /// - `HTTP_REQUEST_TIMEOUT_SECS`: default 60
    /// - `HTTP_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for values that fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for values that fail to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(var("PORT"), "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let cookie_secure = match var("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("COOKIE_SECURE", &raw, "expected a boolean"))?,
            None => var("LEPTOS_ENV").is_some_and(|env| is_production(&env)),
        };
        let precedence = parse_or(var("PREFERENCE_PRECEDENCE"), "PREFERENCE_PRECEDENCE", Precedence::default())?;

        let gemini = var("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned()),
            base_url: base_url(var("GEMINI_BASE_URL"), DEFAULT_GEMINI_BASE_URL),
        });

        let timeouts = HttpTimeouts {
            request_secs: parse_or(
                var("HTTP_REQUEST_TIMEOUT_SECS"),
                "HTTP_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                var("HTTP_CONNECT_TIMEOUT_SECS"),
                "HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            port,
            database_url: var("DATABASE_URL"),
            db_max_connections,
            cookie_secure,
            precedence,
            admin_token: var("ADMIN_API_TOKEN"),
            gemini,
            github_token: var("GITHUB_TOKEN"),
            github_base_url: base_url(var("GITHUB_API_BASE_URL"), DEFAULT_GITHUB_BASE_URL),
            timeouts,
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_production(env: &str) -> bool {
    env.eq_ignore_ascii_case("prod") || env.eq_ignore_ascii_case("production")
}

fn parse_or<T>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.parse::<T>().map_err(|e| invalid(var, &raw, &e.to_string())),
        None => Ok(default),
    }
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.as_deref().unwrap_or(default).trim_end_matches('/').to_owned()
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid { var, value: value.to_owned(), reason: reason.to_owned() }
}
