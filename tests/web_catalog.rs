mod common;

use serde_json::Value;
use storefront_api::{error::AppError, services::catalog_service};

// Read-time rating aggregates, the zero-review asymmetry, slug lookups and
// the public search.
#[tokio::test]
async fn product_listing_aggregates_and_detail() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let admin_id = common::create_admin(&state, "admin@example.com").await?;
    let customer_row = common::create_customer(&state, "buyer@example.com").await?;
    let (_province, city) = common::create_region(&state).await?;
    let category = common::create_category(&state, "Apparel").await?;
    let rated = common::create_product(&state, category.id, admin_id, "Rated Widget", 1000).await?;
    let unrated =
        common::create_product(&state, category.id, admin_id, "Plain Widget", 2000).await?;

    // Three reviews averaging 4.666… must surface as the string "4.6".
    let invoice = common::create_invoice(&state, customer_row.id, &city, "success", 3_000).await?;
    for rating in [5, 5, 4] {
        let order = common::create_order(&state, invoice.id, rated.id, 1, 1000).await?;
        common::create_review(&state, rated.id, order.id, customer_row.id, rating).await?;
    }

    let listing = catalog_service::list_products(&state, None, 1).await?;
    let listing = listing.data.unwrap();
    assert_eq!(listing.per_page, 10);
    assert_eq!(listing.total, 2);

    let rated_row = listing
        .data
        .iter()
        .find(|p| p.product.id == rated.id)
        .expect("rated product listed");
    assert_eq!(rated_row.reviews_avg_rating, Value::String("4.6".into()));
    assert_eq!(rated_row.reviews_count, 3);
    assert_eq!(rated_row.category.name, "Apparel");

    // No reviews: numeric zero, not null and not "0.0".
    let unrated_row = listing
        .data
        .iter()
        .find(|p| p.product.id == unrated.id)
        .expect("unrated product listed");
    assert_eq!(unrated_row.reviews_avg_rating, serde_json::json!(0));
    assert_eq!(unrated_row.reviews_count, 0);

    // Image fields resolve to fully-qualified URLs.
    assert!(
        rated_row
            .product
            .image
            .starts_with("http://localhost:3000/storage/products/")
    );

    // Case-insensitive substring search; a miss is an empty page.
    let hits = catalog_service::list_products(&state, Some("RATED"), 1).await?;
    assert_eq!(hits.data.unwrap().total, 1);
    let misses = catalog_service::list_products(&state, Some("zzz"), 1).await?;
    assert!(misses.data.unwrap().data.is_empty());

    // Product detail carries reviews with their customers.
    let detail = catalog_service::product_detail(&state, "rated-widget").await?;
    let detail = detail.data.unwrap();
    assert_eq!(detail.reviews.len(), 3);
    assert_eq!(detail.reviews[0].customer.email, "buyer@example.com");
    assert_eq!(
        detail.product.reviews_avg_rating,
        Value::String("4.6".into())
    );

    let missing = catalog_service::product_detail(&state, "missing-widget").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Category detail nests its rated products.
    let category_detail = catalog_service::category_detail(&state, "apparel").await?;
    let category_detail = category_detail.data.unwrap();
    assert_eq!(category_detail.products.len(), 2);

    let missing = catalog_service::category_detail(&state, "missing").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
