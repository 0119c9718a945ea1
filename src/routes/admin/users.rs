use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::auth::UserView,
    dto::users::{CreateUserRequest, UpdateUserRequest},
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

#[utoipa::path(
    get,
    path = "/admin/users",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on name"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List admin users", body = ApiResponse<Paginated<UserView>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<UserView>>>> {
    let resp = user_service::list_users(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserView>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserView>>)> {
    let resp = user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User detail", body = ApiResponse<UserView>),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<UserView>>> {
    let resp = user_service::get_user(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserView>),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserView>>> {
    let resp = user_service::update_user(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = user_service::delete_user(&state, id).await?;
    Ok(Json(resp))
}
