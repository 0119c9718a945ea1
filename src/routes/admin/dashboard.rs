use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::dashboard::DashboardData,
    error::AppResult,
    middleware::auth::AdminUser,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Invoice status counts and monthly chart", body = ApiResponse<DashboardData>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let resp = dashboard_service::dashboard_stats(&state, None).await?;
    Ok(Json(resp))
}
