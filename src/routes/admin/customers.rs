use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::auth::CustomerView,
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/customers", get(list_customers))
}

#[utoipa::path(
    get,
    path = "/admin/customers",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on name"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List customers", body = ApiResponse<Paginated<CustomerView>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<CustomerView>>>> {
    let resp = customer_service::list_customers(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}
