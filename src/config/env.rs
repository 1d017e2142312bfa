use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

pub enum EnvKey {
    ServerPort,
    DatabaseUrl,
    DbMaxConnections,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::DbMaxConnections => "DB_MAX_CONNECTIONS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Parses the variable, keeping `default` when it is unset or malformed.
pub fn get_parsed<T>(key: EnvKey, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let name = key.as_str();
    match get(key) {
        Ok(val) => parse_or(name, &val, default),
        Err(_) => default,
    }
}

fn parse_or<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("{} has malformed value {:?} ({}), using {}", name, raw, err, default);
            default
        }
    }
}
