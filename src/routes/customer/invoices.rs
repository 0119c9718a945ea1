use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::invoices::{InvoiceDetail, InvoiceWithCustomer},
    error::AppResult,
    middleware::auth::CustomerUser,
    response::{ApiResponse, Paginated},
    routes::params::ListQuery,
    services::invoice_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/{snap_token}", get(get_invoice))
}

#[utoipa::path(
    get,
    path = "/customer/invoices",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on invoice number"),
        ("page" = Option<i64>, Query, description = "Page number, default 1")
    ),
    responses(
        (status = 200, description = "List the customer's invoices", body = ApiResponse<Paginated<InvoiceWithCustomer>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Invoices"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    customer: CustomerUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Paginated<InvoiceWithCustomer>>>> {
    let resp = invoice_service::customer_list_invoices(
        &state,
        &customer,
        query.q.as_deref(),
        query.page(),
    )
    .await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/customer/invoices/{snap_token}",
    params(("snap_token" = String, Path, description = "Payment session token")),
    responses(
        (status = 200, description = "Invoice detail with orders", body = ApiResponse<InvoiceDetail>),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    customer: CustomerUser,
    Path(snap_token): Path<String>,
) -> AppResult<Json<ApiResponse<InvoiceDetail>>> {
    let resp = invoice_service::customer_invoice_detail(&state, &customer, &snap_token).await?;
    Ok(Json(resp))
}
