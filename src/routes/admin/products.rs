use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalog::{ProductView, ProductWithCategory},
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::image_service,
    services::product_service::{self, ProductForm},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/admin/products",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on title"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List products with categories", body = ApiResponse<Paginated<ProductWithCategory>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<ProductWithCategory>>>> {
    let resp = product_service::list_products(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/products",
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductView>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductView>>)> {
    let (fields, image) = image_service::collect_multipart(multipart).await?;
    let form = ProductForm::from_parts(fields, image);
    let resp = product_service::create_product(&state, &admin, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/admin/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductView>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductView>),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let (fields, image) = image_service::collect_multipart(multipart).await?;
    let form = ProductForm::from_parts(fields, image);
    let resp = product_service::update_product(&state, &admin, id, form).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::delete_product(&state, id).await?;
    Ok(Json(resp))
}
