use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::dashboard::DashboardData,
    error::AppResult,
    middleware::auth::CustomerUser,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

#[utoipa::path(
    get,
    path = "/customer/dashboard",
    responses(
        (status = 200, description = "Invoice status counts and monthly chart, scoped to the customer", body = ApiResponse<DashboardData>)
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let resp = dashboard_service::dashboard_stats(&state, Some(customer.customer_id)).await?;
    Ok(Json(resp))
}
