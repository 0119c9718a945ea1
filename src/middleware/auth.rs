use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{dto::auth::Claims, error::AppError};

pub const REALM_ADMIN: &str = "admin";
pub const REALM_CUSTOMER: &str = "customer";

/// Authenticated admin principal, resolved once at the request boundary.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

/// Authenticated customer principal, resolved once at the request boundary.
#[derive(Debug, Clone)]
pub struct CustomerUser {
    pub customer_id: Uuid,
}

fn bearer_claims(parts: &axum::http::request::Parts) -> Result<Claims, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Auth("Unauthenticated.".into()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Unauthenticated.".into()))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(AppError::Auth("Unauthenticated.".into()));
    }
    let token = auth_str.trim_start_matches("Bearer ").trim();

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Auth("Unauthenticated.".into()))?;

    Ok(decoded.claims)
}

fn principal_id(claims: &Claims, realm: &str) -> Result<Uuid, AppError> {
    if claims.realm != realm {
        return Err(AppError::Auth("Unauthenticated.".into()));
    }
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::Auth("Unauthenticated.".into()))
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts)?;
        let user_id = principal_id(&claims, REALM_ADMIN)?;
        Ok(AdminUser { user_id })
    }
}

impl<S> FromRequestParts<S> for CustomerUser
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts)?;
        let customer_id = principal_id(&claims, REALM_CUSTOMER)?;
        Ok(CustomerUser { customer_id })
    }
}
