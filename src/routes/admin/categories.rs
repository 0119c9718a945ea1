use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalog::CategoryView,
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::category_service::{self, CategoryForm},
    services::image_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

#[utoipa::path(
    get,
    path = "/admin/categories",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on name"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List categories", body = ApiResponse<Paginated<CategoryView>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<CategoryView>>>> {
    let resp =
        category_service::list_categories(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryView>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<CategoryView>>)> {
    let (fields, image) = image_service::collect_multipart(multipart).await?;
    let form = CategoryForm::from_parts(fields, image);
    let resp = category_service::create_category(&state, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category detail", body = ApiResponse<CategoryView>),
        (status = 404, description = "Category not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CategoryView>>> {
    let resp = category_service::get_category(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryView>),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<CategoryView>>> {
    let (fields, image) = image_service::collect_multipart(multipart).await?;
    let form = CategoryForm::from_parts(fields, image);
    let resp = category_service::update_category(&state, id, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Category not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = category_service::delete_category(&state, id).await?;
    Ok(Json(resp))
}
