//! Configuration for the booking service module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Booking service configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Connection string of the relational store (postgres:// or sqlite:)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long to wait for a connection to be established
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Apply pending schema migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            run_migrations: true,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://booking.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_true() -> bool {
    true
}
