use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use chrono::{DateTime, Utc};

use crate::entity::reviews;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    pub order_id: Uuid,
    pub product_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "The rating must be between 1 and 5."))]
    pub rating: i32,
    #[validate(length(min = 1, message = "The review field is required."))]
    pub review: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub rating: i32,
    pub review: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<reviews::Model> for ReviewRecord {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            order_id: model.order_id,
            customer_id: model.customer_id,
            rating: model.rating,
            review: model.review,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
