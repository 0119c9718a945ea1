use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::invoices::{InvoiceDetail, InvoiceWithCustomer},
    error::AppResult,
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::invoice_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/{id}", get(get_invoice))
}

#[utoipa::path(
    get,
    path = "/admin/invoices",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on invoice number"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List invoices with customers", body = ApiResponse<Paginated<InvoiceWithCustomer>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Invoices"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<InvoiceWithCustomer>>>> {
    let resp =
        invoice_service::admin_list_invoices(&state, query.q.as_deref(), query.page()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/admin/invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice detail with orders", body = ApiResponse<InvoiceDetail>),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin Invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<InvoiceDetail>>> {
    let resp = invoice_service::admin_invoice_detail(&state, id).await?;
    Ok(Json(resp))
}
