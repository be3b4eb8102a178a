//! Configuration for the token service

use ff_shared::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::errors::{DomainError, TokenError};

/// Minimum HMAC secret length in bytes
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted token lifetime, one year
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, HMAC family only
    pub algorithm: Algorithm,
    /// Token lifetime in hours
    pub expiration_hours: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            algorithm: Algorithm::HS256,
            expiration_hours: jwt.expiration_hours,
            issuer: jwt.issuer,
            audience: jwt.audience,
        }
    }
}

impl TokenServiceConfig {
    /// Check the secret and algorithm before any key material is built
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.jwt_secret.is_empty() {
            return Err(TokenError::SigningKeyMissing.into());
        }
        if self.jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(TokenError::SigningKeyTooShort {
                min: MIN_SECRET_LENGTH,
            }
            .into());
        }
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::UnsupportedAlgorithm {
                algorithm: format!("{:?}", self.algorithm),
            }
            .into());
        }
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.expiration_hours) {
            return Err(TokenError::InvalidLifetime {
                hours: self.expiration_hours,
                max: MAX_EXPIRATION_HOURS,
            }
            .into());
        }
        Ok(())
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(jwt: &JwtConfig) -> Result<Self, Self::Error> {
        let algorithm = jwt.algorithm.parse::<Algorithm>().map_err(|_| {
            DomainError::Token(TokenError::UnsupportedAlgorithm {
                algorithm: jwt.algorithm.clone(),
            })
        })?;

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            expiration_hours: jwt.expiration_hours,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        })
    }
}
