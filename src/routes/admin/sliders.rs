use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalog::SliderView,
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::PageQuery,
    services::image_service,
    services::slider_service::{self, SliderForm},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sliders).post(create_slider))
        .route("/{id}", axum::routing::delete(delete_slider))
}

#[utoipa::path(
    get,
    path = "/admin/sliders",
    params(("page" = Option<i64>, Query, description = "Page number, default 1")),
    responses(
        (status = 200, description = "List sliders", body = ApiResponse<Paginated<SliderView>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Sliders"
)]
pub async fn list_sliders(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<SliderView>>>> {
    let resp = slider_service::list_sliders(&state, query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/sliders",
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<SliderView>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Sliders"
)]
pub async fn create_slider(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<SliderView>>)> {
    let (fields, image) = image_service::collect_multipart(multipart).await?;
    let form = SliderForm::from_parts(fields, image);
    let resp = slider_service::create_slider(&state, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Slider not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Sliders"
)]
pub async fn delete_slider(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = slider_service::delete_slider(&state, id).await?;
    Ok(Json(resp))
}
