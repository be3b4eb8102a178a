//! JWT implementation of the token issuer

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::traits::TokenIssuer;

/// Signs customer tokens with a shared HMAC secret
pub struct JwtTokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates a new issuer
    ///
    /// # Errors
    ///
    /// * `TokenError::SigningKeyMissing` - empty secret
    /// * `TokenError::SigningKeyTooShort` - secret shorter than 32 bytes
    /// * `TokenError::UnsupportedAlgorithm` - non-HMAC algorithm
    /// * `TokenError::InvalidLifetime` - lifetime not within one hour to one year
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Token lifetime
    pub fn lifetime(&self) -> Duration {
        Duration::hours(self.config.expiration_hours)
    }

    /// Decode and validate a token issued by this service
    ///
    /// Checks signature, issuer, audience, `exp` and `nbf`.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    #[instrument(skip_all, fields(customer_id = %customer_id))]
    async fn issue(&self, customer_id: Uuid) -> Result<IssuedToken, DomainError> {
        let issued_at = Utc::now();
        let claims = Claims::for_customer(
            customer_id,
            issued_at,
            self.lifetime(),
            &self.config.issuer,
            &self.config.audience,
        );
        let token = self.encode_jwt(&claims)?;

        // `exp` is truncated to whole seconds, `expires_at` is not
        Ok(IssuedToken {
            token,
            expires_at: issued_at + self.lifetime(),
        })
    }
}
