use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::carts::{AddToCartRequest, CartLine, CartLineWithProduct, RemoveCartRequest},
    error::AppResult,
    middleware::auth::CustomerUser,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carts).post(add_to_cart))
        .route("/total_price", get(total_price))
        .route("/total_weight", get(total_weight))
        .route("/remove", post(remove_cart))
}

#[utoipa::path(
    get,
    path = "/web/carts",
    responses(
        (status = 200, description = "The customer's cart lines with products", body = ApiResponse<Vec<CartLineWithProduct>>)
    ),
    security(("bearer_auth" = [])),
    tag = "Web Carts"
)]
pub async fn list_carts(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<Vec<CartLineWithProduct>>>> {
    let resp = cart_service::list_carts(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/web/carts",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "New cart line created", body = ApiResponse<CartLine>),
        (status = 200, description = "Existing cart line incremented", body = ApiResponse<CartLine>),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Web Carts"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    customer: CustomerUser,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CartLine>>)> {
    let (created, resp) = cart_service::add_to_cart(&state, &customer, payload).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/web/carts/total_price",
    responses(
        (status = 200, description = "Sum of cart line prices, 0 when empty", body = ApiResponse<i64>)
    ),
    security(("bearer_auth" = [])),
    tag = "Web Carts"
)]
pub async fn total_price(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<i64>>> {
    let resp = cart_service::total_price(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/web/carts/total_weight",
    responses(
        (status = 200, description = "Sum of cart line weights, 0 when empty", body = ApiResponse<i64>)
    ),
    security(("bearer_auth" = [])),
    tag = "Web Carts"
)]
pub async fn total_weight(
    State(state): State<AppState>,
    customer: CustomerUser,
) -> AppResult<Json<ApiResponse<i64>>> {
    let resp = cart_service::total_weight(&state, &customer).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/web/carts/remove",
    request_body = RemoveCartRequest,
    responses(
        (status = 200, description = "Cart line removed", body = ApiResponse<CartLineWithProduct>),
        (status = 404, description = "Cart not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Web Carts"
)]
pub async fn remove_cart(
    State(state): State<AppState>,
    _customer: CustomerUser,
    Json(payload): Json<RemoveCartRequest>,
) -> AppResult<Json<ApiResponse<CartLineWithProduct>>> {
    let resp = cart_service::remove_cart(&state, payload.cart_id).await?;
    Ok(Json(resp))
}
