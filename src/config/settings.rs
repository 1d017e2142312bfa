use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://filmrate.db?mode=rwc";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_or(EnvKey::DatabaseUrl, DEFAULT_DATABASE_URL),
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 5),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
