use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::auth::{CustomerView, LoginData, LoginRequest, RegisterRequest},
    error::AppResult,
    middleware::auth::CustomerUser,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user", get(current_user))
        .route("/refresh", get(refresh))
        .route("/logout", post(logout))
}

#[utoipa::path(
    post,
    path = "/customer/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register customer", body = ApiResponse<CustomerView>),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Customer Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CustomerView>>)> {
    let resp = auth_service::customer_register(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/customer/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login customer", body = ApiResponse<LoginData<CustomerView>>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Customer Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginData<CustomerView>>>> {
    let resp = auth_service::customer_login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/customer/user",
    responses(
        (status = 200, description = "Current customer", body = ApiResponse<CustomerView>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Auth"
)]
pub async fn current_user(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<CustomerView>>> {
    let resp = auth_service::customer_profile(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/customer/refresh",
    responses(
        (status = 200, description = "New token for the current customer", body = ApiResponse<LoginData<CustomerView>>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Auth"
)]
pub async fn refresh(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<LoginData<CustomerView>>>> {
    let resp = auth_service::customer_refresh(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/customer/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Auth"
)]
pub async fn logout(_customer: CustomerUser) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse {
        success: true,
        message: "Logged out".into(),
        data: None,
    })
}
