use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::catalog::{CategoryDetail, CategoryView},
    error::AppResult,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/{slug}", get(category_detail))
}

#[utoipa::path(
    get,
    path = "/web/categories",
    responses(
        (status = 200, description = "All categories, newest first", body = ApiResponse<Vec<CategoryView>>)
    ),
    tag = "Web Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CategoryView>>>> {
    let resp = catalog_service::list_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/web/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with its rated products", body = ApiResponse<CategoryDetail>),
        (status = 404, description = "Category not found"),
    ),
    tag = "Web Categories"
)]
pub async fn category_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<CategoryDetail>>> {
    let resp = catalog_service::category_detail(&state, &slug).await?;
    Ok(Json(resp))
}
