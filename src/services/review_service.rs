use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::reviews::{CreateReviewRequest, ReviewRecord},
    entity::reviews::{ActiveModel, Column, Entity as Reviews},
    error::{AppError, AppResult},
    middleware::auth::CustomerUser,
    response::ApiResponse,
    state::AppState,
};

/// One review per (order, product); a duplicate submission is rejected with
/// the existing record echoed back.
pub async fn create_review(
    state: &AppState,
    customer: &CustomerUser,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<ReviewRecord>> {
    payload.validate()?;

    let existing = Reviews::find()
        .filter(
            Condition::all()
                .add(Column::OrderId.eq(payload.order_id))
                .add(Column::ProductId.eq(payload.product_id)),
        )
        .one(&state.orm)
        .await?;

    if let Some(existing) = existing {
        let echoed = serde_json::to_value(ReviewRecord::from(existing))
            .map_err(|e| AppError::Internal(e.into()))?;
        return Err(AppError::Conflict(echoed));
    }

    let review = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        order_id: Set(payload.order_id),
        customer_id: Set(customer.customer_id),
        rating: Set(payload.rating),
        review: Set(payload.review),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Review created",
        ReviewRecord::from(review),
    ))
}
