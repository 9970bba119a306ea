use std::env;

use crate::database::connection::ConnectParams;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    /// host:port
    pub db_addr: String,
    pub db_name: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            db_user: env::var("DB_USER")?,
            db_password: env::var("DB_PASSWORD")?,
            db_addr: env::var("DB_ADDR")?,
            db_name: env::var("DB_NAME")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        })
    }

    pub fn connect_params(&self) -> ConnectParams {
        ConnectParams {
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            addr: self.db_addr.clone(),
            database: self.db_name.clone(),
            max_connections: self.db_max_connections,
        }
    }
}
