//! Authentication service
//!
//! Tokens are issued out of band (see the `issue-token` binary) and
//! verified on every authenticated request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    error::{AppError, AppResult},
    models::User,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Issue an access token for `user` using the configured expiry
    pub fn issue_token(user: &User, config: &JwtConfig) -> AppResult<String> {
        Self::generate_token(
            &user.username,
            user.is_admin,
            &config.secret,
            Duration::hours(config.expiry_hours),
        )
    }

    /// Sign a token for `username` valid for `ttl` from now
    pub fn generate_token(
        username: &str,
        is_admin: bool,
        secret: &str,
        ttl: Duration,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            is_admin,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
