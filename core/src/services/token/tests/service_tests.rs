//! Unit tests for the JWT token issuer

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use ff_shared::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{
    JwtTokenIssuer, TokenIssuer, TokenServiceConfig, MAX_EXPIRATION_HOURS,
};

const SECRET: &str = "MySuperSecretKeyThatIsAtLeast32CharactersLong";

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: SECRET.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_issued_token_verifies() {
    let issuer = JwtTokenIssuer::new(config()).unwrap();
    let customer_id = Uuid::new_v4();

    let issued = issuer.issue(customer_id).await.unwrap();
    let claims = issuer.verify(&issued.token).unwrap();

    assert_eq!(claims.sub, customer_id.to_string());
    assert_eq!(claims.customer_id, customer_id.to_string());
    assert_eq!(claims.iss, "FastFood.Auth");
    assert_eq!(claims.aud, "FastFood.API");
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
    assert_eq!(issued.expires_at.timestamp(), claims.exp);
}

#[tokio::test]
async fn test_expires_at_follows_configured_lifetime() {
    let issuer = JwtTokenIssuer::new(TokenServiceConfig {
        expiration_hours: 2,
        ..config()
    })
    .unwrap();

    let before = Utc::now();
    let issued = issuer.issue(Uuid::new_v4()).await.unwrap();

    assert!(issued.expires_at > before);
    assert!(issued.expires_at >= before + Duration::hours(2));
    assert!(issued.expires_at <= Utc::now() + Duration::hours(2));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = JwtTokenIssuer::new(config()).unwrap();
    let other = JwtTokenIssuer::new(TokenServiceConfig {
        jwt_secret: "AnotherSecretKeyThatIsAlsoLongEnough!!".to_string(),
        ..config()
    })
    .unwrap();

    let issued = other.issue(Uuid::new_v4()).await.unwrap();
    assert_eq!(
        issuer.verify(&issued.token),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[tokio::test]
async fn test_wrong_audience_is_rejected() {
    let issuer = JwtTokenIssuer::new(config()).unwrap();
    let foreign = JwtTokenIssuer::new(TokenServiceConfig {
        audience: "Other.API".to_string(),
        ..config()
    })
    .unwrap();

    let issued = foreign.issue(Uuid::new_v4()).await.unwrap();
    assert!(issuer.verify(&issued.token).is_err());
}

#[test]
fn test_expired_token() {
    let claims = Claims::for_customer(
        Uuid::new_v4(),
        Utc::now() - Duration::hours(3),
        Duration::hours(1),
        "FastFood.Auth",
        "FastFood.API",
    );
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let issuer = JwtTokenIssuer::new(config()).unwrap();
    assert_eq!(
        issuer.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    );
}

#[test]
fn test_malformed_token() {
    let issuer = JwtTokenIssuer::new(config()).unwrap();
    assert_eq!(
        issuer.verify("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_secret_requirements() {
    let missing = JwtTokenIssuer::new(TokenServiceConfig {
        jwt_secret: String::new(),
        ..config()
    });
    assert!(matches!(
        missing,
        Err(DomainError::Token(TokenError::SigningKeyMissing))
    ));

    let short = JwtTokenIssuer::new(TokenServiceConfig {
        jwt_secret: "short".to_string(),
        ..config()
    });
    assert!(matches!(
        short,
        Err(DomainError::Token(TokenError::SigningKeyTooShort { min: 32 }))
    ));
}

#[test]
fn test_non_hmac_algorithm_rejected() {
    let result = JwtTokenIssuer::new(TokenServiceConfig {
        algorithm: Algorithm::RS256,
        ..config()
    });
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::UnsupportedAlgorithm { .. }))
    ));
}

#[test]
fn test_config_from_jwt_config() {
    let jwt = JwtConfig::new(SECRET).with_expiration_hours(6);
    let config = TokenServiceConfig::try_from(&jwt).unwrap();

    assert_eq!(config.algorithm, Algorithm::HS256);
    assert_eq!(config.expiration_hours, 6);
    assert_eq!(config.issuer, "FastFood.Auth");

    let bad = JwtConfig {
        algorithm: "HS999".to_string(),
        ..JwtConfig::new(SECRET)
    };
    assert!(TokenServiceConfig::try_from(&bad).is_err());
}

#[test]
fn test_lifetime_must_be_positive() {
    for hours in [0, -1, i64::MIN] {
        let result = JwtTokenIssuer::new(TokenServiceConfig {
            expiration_hours: hours,
            ..config()
        });
        assert!(
            matches!(
                result,
                Err(DomainError::Token(TokenError::InvalidLifetime { .. }))
            ),
            "{} hours should be rejected",
            hours
        );
    }
}

#[test]
fn test_lifetime_upper_bound() {
    let too_long = JwtTokenIssuer::new(TokenServiceConfig {
        expiration_hours: i64::MAX,
        ..config()
    });
    assert!(matches!(
        too_long,
        Err(DomainError::Token(TokenError::InvalidLifetime {
            hours: i64::MAX,
            max: MAX_EXPIRATION_HOURS,
        }))
    ));

    let longest = JwtTokenIssuer::new(TokenServiceConfig {
        expiration_hours: MAX_EXPIRATION_HOURS,
        ..config()
    });
    assert!(longest.is_ok());
}

#[tokio::test]
async fn test_shortest_lifetime_expires_after_issue() {
    let issuer = JwtTokenIssuer::new(TokenServiceConfig {
        expiration_hours: 1,
        ..config()
    })
    .unwrap();

    let before = Utc::now();
    let issued = issuer.issue(Uuid::new_v4()).await.unwrap();
    assert!(issued.expires_at > before);
}
