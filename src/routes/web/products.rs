use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::catalog::{ProductDetail, RatedProduct},
    error::AppResult,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{slug}", get(product_detail))
}

#[utoipa::path(
    get,
    path = "/web/products",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on title"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "Products with rating aggregates", body = ApiResponse<Paginated<RatedProduct>>)
    ),
    tag = "Web Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<RatedProduct>>>> {
    let resp = catalog_service::list_products(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/web/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product with category, reviews and aggregates", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Web Products"
)]
pub async fn product_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    let resp = catalog_service::product_detail(&state, &slug).await?;
    Ok(Json(resp))
}
