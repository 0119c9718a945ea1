use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::catalog::SliderView,
    error::AppResult,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_sliders))
}

#[utoipa::path(
    get,
    path = "/web/sliders",
    responses(
        (status = 200, description = "All sliders, newest first", body = ApiResponse<Vec<SliderView>>)
    ),
    tag = "Web Sliders"
)]
pub async fn list_sliders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<SliderView>>>> {
    let resp = catalog_service::list_sliders(&state).await?;
    Ok(Json(resp))
}
