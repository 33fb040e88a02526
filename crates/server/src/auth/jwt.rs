use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::UserRole;

/// Token type discriminator so a refresh token never passes as an access token.
const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims carried by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique id so two tokens minted in the same second hash differently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default)]
    pub typ: String,
}

impl Claims {
    pub fn user_role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }
}

/// Hex SHA-256 of a raw token. Only this hash is persisted for refresh tokens.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> Result<String, JwtError> {
    std::env::var("JWT_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            tracing::error!("JWT_SECRET is not set");
            JwtError::from(ErrorKind::InvalidKeyFormat)
        })
}

pub fn access_token_expiry_minutes() -> i64 {
    std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(15)
}

pub fn refresh_token_expiry_days() -> i64 {
    std::env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7)
}

fn sign(
    user_id: i64,
    email: &str,
    role: &str,
    typ: &str,
    lifetime: Duration,
) -> Result<(String, chrono::DateTime<Utc>), JwtError> {
    let now = Utc::now();
    let expires_at = now + lifetime;
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
        typ: typ.to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )?;
    Ok((token, expires_at))
}

pub fn create_access_token(user_id: i64, email: &str, role: &str) -> Result<String, JwtError> {
    let lifetime = Duration::minutes(access_token_expiry_minutes());
    sign(user_id, email, role, TOKEN_TYPE_ACCESS, lifetime).map(|(token, _)| token)
}

/// Mint a refresh token, returning it with its expiry for the token store.
pub fn create_refresh_token(
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<(String, chrono::DateTime<Utc>), JwtError> {
    let lifetime = Duration::days(refresh_token_expiry_days());
    sign(user_id, email, role, TOKEN_TYPE_REFRESH, lifetime)
}

fn decode_claims(token: &str) -> Result<Claims, JwtError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Validate an access token; refresh tokens are rejected.
pub fn validate_access_token(token: &str) -> Result<Claims, JwtError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}

/// Validate a refresh token; access tokens are rejected.
pub fn validate_refresh_token(token: &str) -> Result<Claims, JwtError> {
    let claims = decode_claims(token)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(claims)
}
