use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalog::ProductView;
use crate::entity::carts;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "The qty must be at least 1."))]
    pub qty: i32,
    /// Unit price; the stored line price is unit price times quantity.
    #[validate(range(min = 1, message = "The price must be at least 1."))]
    pub price: i64,
    /// Unit weight in grams.
    #[validate(range(min = 1, message = "The weight must be at least 1."))]
    pub weight: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemoveCartRequest {
    pub cart_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub customer_id: Uuid,
    pub qty: i32,
    pub price: i64,
    pub weight: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<carts::Model> for CartLine {
    fn from(model: carts::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            customer_id: model.customer_id,
            qty: model.qty,
            price: model.price,
            weight: model.weight,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineWithProduct {
    #[serde(flatten)]
    pub line: CartLine,
    pub product: ProductView,
}
