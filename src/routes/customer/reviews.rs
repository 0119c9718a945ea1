use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::reviews::{CreateReviewRequest, ReviewRecord},
    error::AppResult,
    middleware::auth::CustomerUser,
    response::ApiResponse,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/review", post(create_review))
}

#[utoipa::path(
    post,
    path = "/customer/review",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewRecord>),
        (status = 409, description = "Review already exists for this order and product"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customer Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    customer: CustomerUser,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ReviewRecord>>)> {
    let resp = review_service::create_review(&state, &customer, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
