use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth::{Claims, CustomerView, LoginData, LoginRequest, RegisterRequest, UserView},
    entity::{customers, users},
    error::{AppError, AppResult},
    middleware::auth::{AdminUser, CustomerUser, REALM_ADMIN, REALM_CUSTOMER},
    models,
    response::ApiResponse,
    state::AppState,
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

pub fn issue_token(principal_id: Uuid, realm: &str) -> AppResult<String> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: principal_id.to_string(),
        realm: realm.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub async fn admin_login(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginData<UserView>>> {
    payload.validate()?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(payload.email.as_str())
        .fetch_optional(&state.pool)
        .await?;

    let user = match user {
        Some(u) if verify_password(&payload.password, &u.password) => u,
        _ => return Err(AppError::Auth("Email or Password is incorrect".into())),
    };

    let token = issue_token(user.id, REALM_ADMIN)?;
    let data = LoginData {
        user: UserView {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        },
        token,
    };

    Ok(ApiResponse::success("Logged in", data))
}

pub async fn admin_profile(state: &AppState, admin: &AdminUser) -> AppResult<ApiResponse<UserView>> {
    let user = users::Entity::find_by_id(admin.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Auth("Unauthenticated.".into()))?;
    Ok(ApiResponse::success("User profile", UserView::from(user)))
}

pub async fn admin_refresh(
    state: &AppState,
    admin: &AdminUser,
) -> AppResult<ApiResponse<LoginData<UserView>>> {
    let user = users::Entity::find_by_id(admin.user_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Auth("Unauthenticated.".into()))?;
    let token = issue_token(user.id, REALM_ADMIN)?;
    let data = LoginData {
        user: UserView::from(user),
        token,
    };
    Ok(ApiResponse::success("Token refreshed", data))
}

pub async fn customer_register(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<CustomerView>> {
    payload.validate()?;

    let exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM customers WHERE email = $1")
        .bind(payload.email.as_str())
        .fetch_optional(&state.pool)
        .await?;
    if exist.is_some() {
        return Err(AppError::Validation(
            [(
                "email".to_string(),
                vec!["The email has already been taken.".to_string()],
            )]
            .into(),
        ));
    }

    let customer = customers::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        password: Set(hash_password(&payload.password)?),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Customer registered",
        CustomerView::from(customer),
    ))
}

pub async fn customer_login(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginData<CustomerView>>> {
    payload.validate()?;

    let customer: Option<models::Customer> =
        sqlx::query_as("SELECT * FROM customers WHERE email = $1")
            .bind(payload.email.as_str())
            .fetch_optional(&state.pool)
            .await?;

    let customer = match customer {
        Some(c) if verify_password(&payload.password, &c.password) => c,
        _ => return Err(AppError::Auth("Email or Password is incorrect".into())),
    };

    let token = issue_token(customer.id, REALM_CUSTOMER)?;
    let data = LoginData {
        user: CustomerView {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        },
        token,
    };

    Ok(ApiResponse::success("Logged in", data))
}

pub async fn customer_profile(
    state: &AppState,
    customer: &CustomerUser,
) -> AppResult<ApiResponse<CustomerView>> {
    let row = customers::Entity::find_by_id(customer.customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Auth("Unauthenticated.".into()))?;
    Ok(ApiResponse::success(
        "Customer profile",
        CustomerView::from(row),
    ))
}

pub async fn customer_refresh(
    state: &AppState,
    customer: &CustomerUser,
) -> AppResult<ApiResponse<LoginData<CustomerView>>> {
    let row = customers::Entity::find_by_id(customer.customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::Auth("Unauthenticated.".into()))?;
    let token = issue_token(row.id, REALM_CUSTOMER)?;
    let data = LoginData {
        user: CustomerView::from(row),
        token,
    };
    Ok(ApiResponse::success("Token refreshed", data))
}
