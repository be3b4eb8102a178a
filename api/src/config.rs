//! Runtime configuration for the API binary

use anyhow::{bail, Context};
use ff_core::TokenServiceConfig;
use ff_shared::{AppConfig, Environment, StorageBackend};

/// Loaded and checked application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub token: TokenServiceConfig,
}

impl Config {
    /// Read `.env` and the process environment
    ///
    /// Fails when the JWT settings cannot produce a signer, or when a
    /// production deployment still uses the development secret.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_app_config(AppConfig::from_env())
    }

    pub fn from_app_config(app: AppConfig) -> anyhow::Result<Self> {
        if app.environment.is_production() && app.auth.jwt.is_using_default_secret() {
            bail!("JWT_SECRET must be set in production");
        }

        let token = TokenServiceConfig::try_from(&app.auth.jwt)
            .context("invalid JWT configuration")?;
        token.validate().context("invalid JWT configuration")?;

        Ok(Self { app, token })
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn uses_database(&self) -> bool {
        self.app.storage == StorageBackend::Mysql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_shared::JwtConfig;

    #[test]
    fn test_development_defaults_are_accepted() {
        let config = Config::from_app_config(AppConfig::default()).unwrap();
        assert!(config.uses_database());
        assert_eq!(config.token.expiration_hours, 24);
    }

    #[test]
    fn test_production_requires_secret() {
        let app = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(Config::from_app_config(app).is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let mut app = AppConfig::default();
        app.auth.jwt = JwtConfig::new("too-short");
        assert!(Config::from_app_config(app).is_err());
    }

    #[test]
    fn test_out_of_range_lifetime_is_rejected() {
        for hours in [-1, 0, i64::MAX] {
            let mut app = AppConfig::default();
            app.auth.jwt = JwtConfig::default().with_expiration_hours(hours);
            assert!(Config::from_app_config(app).is_err(), "{} hours", hours);
        }
    }

    #[test]
    fn test_memory_backend() {
        let app = AppConfig {
            storage: StorageBackend::Memory,
            ..Default::default()
        };
        assert!(!Config::from_app_config(app).unwrap().uses_database());
    }
}
