use crate::github::DEFAULT_ENDPOINT;
use std::env;
use std::fmt;

pub const DEFAULT_USERNAME: &str = "octocat";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub endpoint: String,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("port", &self.port)
            .finish()
    }
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let username =
            non_empty("CALENDAR_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if !is_valid_login(&username) {
            return Err(ConfigError(format!(
                "CALENDAR_USERNAME '{username}' is not a valid login"
            )));
        }

        let port = match non_empty("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|err| ConfigError(format!("PORT '{value}': {err}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            username,
            token: non_empty("GITHUB_TOKEN"),
            endpoint: non_empty("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            port,
        })
    }
}

/// GitHub logins: 1-39 ASCII alphanumerics or hyphens, no leading or
/// trailing hyphen.
pub fn is_valid_login(login: &str) -> bool {
    !login.is_empty()
        && login.len() <= 39
        && !login.starts_with('-')
        && !login.ends_with('-')
        && login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
