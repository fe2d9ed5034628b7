use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Process configuration, read once at startup.
///
/// A missing `PIN_SECRET` is fatal before the listener binds: silently
/// hashing pins against an empty secret would make every stored digest
/// recoverable from the pin alone.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pin_secret: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL is not set".into()))?;

        let pin_secret = env::var("PIN_SECRET")
            .map_err(|_| AppError::Config("PIN_SECRET is not set".into()))?;
        if pin_secret.is_empty() {
            return Err(AppError::Config("PIN_SECRET is empty".into()));
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("BIND_ADDR is not an address: {raw}")))?,
            Err(_) => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        Ok(Self {
            database_url,
            pin_secret,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // env::set_var is process-global, so the cases run in one test.
    #[test]
    fn from_env_requires_database_url_and_secret() {
        env::remove_var("DATABASE_URL");
        env::remove_var("PIN_SECRET");
        env::remove_var("BIND_ADDR");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::set_var("DATABASE_URL", "sqlite::memory:");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::set_var("PIN_SECRET", "");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::set_var("PIN_SECRET", "s3cret");
        let config = Config::from_env().expect("complete env");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, SocketAddr::from(DEFAULT_BIND_ADDR));

        env::set_var("BIND_ADDR", "not-an-addr");
        assert!(matches!(Config::from_env(), Err(AppError::Config(_))));

        env::set_var("BIND_ADDR", "0.0.0.0:8080");
        let config = Config::from_env().expect("complete env");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }
}
