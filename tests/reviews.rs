mod common;

use storefront_api::{
    dto::reviews::CreateReviewRequest,
    error::AppError,
    middleware::auth::CustomerUser,
    services::review_service,
};

// A review lands once per (order, product); the duplicate is rejected with
// the stored record echoed back.
#[tokio::test]
async fn duplicate_review_is_rejected_with_existing_record() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let admin_id = common::create_admin(&state, "admin@example.com").await?;
    let customer_row = common::create_customer(&state, "buyer@example.com").await?;
    let (_province, city) = common::create_region(&state).await?;
    let category = common::create_category(&state, "Apparel").await?;
    let product = common::create_product(&state, category.id, admin_id, "Test Widget", 1000).await?;
    let invoice = common::create_invoice(&state, customer_row.id, &city, "success", 2_000).await?;
    let order = common::create_order(&state, invoice.id, product.id, 2, 1000).await?;

    let customer = CustomerUser {
        customer_id: customer_row.id,
    };

    let first = review_service::create_review(
        &state,
        &customer,
        CreateReviewRequest {
            order_id: order.id,
            product_id: product.id,
            rating: 5,
            review: "Excellent".into(),
        },
    )
    .await?;
    let first = first.data.unwrap();
    assert_eq!(first.rating, 5);

    // Out-of-range rating never reaches the database.
    let invalid = review_service::create_review(
        &state,
        &customer,
        CreateReviewRequest {
            order_id: order.id,
            product_id: product.id,
            rating: 6,
            review: "Too good".into(),
        },
    )
    .await;
    assert!(matches!(invalid, Err(AppError::Validation(_))));

    let duplicate = review_service::create_review(
        &state,
        &customer,
        CreateReviewRequest {
            order_id: order.id,
            product_id: product.id,
            rating: 4,
            review: "Again".into(),
        },
    )
    .await;

    match duplicate {
        Err(AppError::Conflict(existing)) => {
            assert_eq!(existing["id"], serde_json::json!(first.id.to_string()));
            assert_eq!(existing["rating"], serde_json::json!(5));
            assert_eq!(existing["review"], serde_json::json!("Excellent"));
        }
        other => panic!("expected conflict, got {:?}", other.map(|r| r.message)),
    }

    Ok(())
}
