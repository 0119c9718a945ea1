use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginData, LoginRequest, UserView},
    error::AppResult,
    middleware::auth::AdminUser,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/user", get(current_user))
        .route("/refresh", get(refresh))
        .route("/logout", post(logout))
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login admin", body = ApiResponse<LoginData<UserView>>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Admin Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginData<UserView>>>> {
    let resp = auth_service::admin_login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/admin/user",
    responses(
        (status = 200, description = "Current admin", body = ApiResponse<UserView>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Auth"
)]
pub async fn current_user(
    State(state): State<AppState>,
    admin: AdminUser,
) -> AppResult<Json<ApiResponse<UserView>>> {
    let resp = auth_service::admin_profile(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/admin/refresh",
    responses(
        (status = 200, description = "New token for the current admin", body = ApiResponse<LoginData<UserView>>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Auth"
)]
pub async fn refresh(
    State(state): State<AppState>,
    admin: AdminUser,
) -> AppResult<Json<ApiResponse<LoginData<UserView>>>> {
    let resp = auth_service::admin_refresh(&state, &admin).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Auth"
)]
pub async fn logout(_admin: AdminUser) -> Json<ApiResponse<serde_json::Value>> {
    // Tokens are stateless; logout is an acknowledgement for the client.
    Json(ApiResponse {
        success: true,
        message: "Logged out".into(),
        data: None,
    })
}
