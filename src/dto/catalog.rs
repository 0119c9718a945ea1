use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::auth::CustomerView;
use crate::entity::{categories, products, sliders};

/// Resolve a stored image name to the fully-qualified public URL.
pub fn image_url(base_url: &str, dir: &str, file: &str) -> String {
    format!("{}/storage/{}/{}", base_url, dir, file)
}

/// Rating presentation: truncated to one decimal and rendered as a string
/// when reviews exist, numeric zero when none do.
pub fn format_rating(avg: Option<f64>) -> serde_json::Value {
    match avg {
        Some(value) => {
            let truncated = (value * 10.0).trunc() / 10.0;
            serde_json::Value::String(format!("{:.1}", truncated))
        }
        None => serde_json::json!(0),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryView {
    pub fn from_model(model: categories::Model, base_url: &str) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            image: image_url(base_url, "categories", &model.image),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductView {
    pub id: Uuid,
    pub category_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub weight: i32,
    pub price: i64,
    pub stock: i32,
    pub discount: i32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductView {
    pub fn from_model(model: products::Model, base_url: &str) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            user_id: model.user_id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            weight: model.weight,
            price: model.price,
            stock: model.stock,
            discount: model.discount,
            image: image_url(base_url, "products", &model.image),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Admin listing row: product with its category embedded.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: ProductView,
    pub category: CategoryView,
}

/// Public listing row: product annotated with read-time review aggregates.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatedProduct {
    #[serde(flatten)]
    pub product: ProductView,
    pub category: CategoryView,
    #[schema(value_type = Object)]
    pub reviews_avg_rating: serde_json::Value,
    pub reviews_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewView {
    pub id: Uuid,
    pub rating: i32,
    pub review: String,
    pub customer: CustomerView,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: RatedProduct,
    pub reviews: Vec<ReviewView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: CategoryView,
    pub products: Vec<RatedProduct>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SliderView {
    pub id: Uuid,
    pub image: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SliderView {
    pub fn from_model(model: sliders::Model, base_url: &str) -> Self {
        Self {
            id: model.id,
            image: image_url(base_url, "sliders", &model.image),
            link: model.link,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_truncated_not_rounded() {
        assert_eq!(
            format_rating(Some(4.666666)),
            serde_json::Value::String("4.6".into())
        );
        assert_eq!(
            format_rating(Some(4.95)),
            serde_json::Value::String("4.9".into())
        );
        assert_eq!(
            format_rating(Some(5.0)),
            serde_json::Value::String("5.0".into())
        );
    }

    #[test]
    fn missing_rating_is_numeric_zero() {
        assert_eq!(format_rating(None), serde_json::json!(0));
    }

    #[test]
    fn image_urls_are_fully_qualified() {
        assert_eq!(
            image_url("http://shop.test", "categories", "abc.png"),
            "http://shop.test/storage/categories/abc.png"
        );
    }
}
