mod common;

use storefront_api::{
    dto::carts::AddToCartRequest,
    error::AppError,
    middleware::auth::CustomerUser,
    services::cart_service,
};
use uuid::Uuid;

// Flow: totals on an empty cart, upsert-or-increment on repeated adds,
// serialized concurrent increments, and removal semantics.
#[tokio::test]
async fn cart_upsert_totals_and_removal_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let admin_id = common::create_admin(&state, "admin@example.com").await?;
    let customer_row = common::create_customer(&state, "buyer@example.com").await?;
    let category = common::create_category(&state, "Apparel").await?;
    let product = common::create_product(&state, category.id, admin_id, "Test Widget", 1000).await?;

    let customer = CustomerUser {
        customer_id: customer_row.id,
    };

    // Empty cart sums to zero.
    let price = cart_service::total_price(&state, &customer).await?;
    assert_eq!(price.data, Some(0));
    let weight = cart_service::total_weight(&state, &customer).await?;
    assert_eq!(weight.data, Some(0));

    // First add inserts a fresh line with the given values.
    let (created, resp) = cart_service::add_to_cart(
        &state,
        &customer,
        AddToCartRequest {
            product_id: product.id,
            qty: 2,
            price: 1000,
            weight: 500,
        },
    )
    .await?;
    assert!(created);
    let line = resp.data.ok_or_else(|| anyhow::anyhow!("no cart line"))?;
    assert_eq!(line.qty, 2);
    assert_eq!(line.price, 1000);

    // Second add increments the same row and rescales from unit values.
    let (created, resp) = cart_service::add_to_cart(
        &state,
        &customer,
        AddToCartRequest {
            product_id: product.id,
            qty: 3,
            price: 1200,
            weight: 500,
        },
    )
    .await?;
    assert!(!created);
    let line = resp.data.ok_or_else(|| anyhow::anyhow!("no cart line"))?;
    assert_eq!(line.qty, 5);
    assert_eq!(line.price, 1200 * 5);
    assert_eq!(line.weight, 500 * 5);
    assert_eq!(common::count_carts(&state, customer_row.id).await?, 1);

    // Concurrent increments serialize on the row lock; no update is lost.
    let state_a = state.clone();
    let state_b = state.clone();
    let customer_a = customer.clone();
    let customer_b = customer.clone();
    let product_id = product.id;
    let add = |state, customer| async move {
        cart_service::add_to_cart(
            &state,
            &customer,
            AddToCartRequest {
                product_id,
                qty: 1,
                price: 1200,
                weight: 500,
            },
        )
        .await
    };
    let (first, second) = tokio::join!(add(state_a, customer_a), add(state_b, customer_b));
    first?;
    second?;

    let cart = common::find_cart(&state, customer_row.id, product.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("cart row missing"))?;
    assert_eq!(cart.qty, 7, "both concurrent increments must land");
    assert_eq!(cart.price, 1200 * 7);

    // Totals reflect the stored line.
    let price = cart_service::total_price(&state, &customer).await?;
    assert_eq!(price.data, Some(1200 * 7));
    let weight = cart_service::total_weight(&state, &customer).await?;
    assert_eq!(weight.data, Some(500 * 7));

    // Removing an unknown id is a not-found error.
    let missing = cart_service::remove_cart(&state, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Removing the known id returns the line and empties the cart.
    let removed = cart_service::remove_cart(&state, cart.id).await?;
    let removed = removed.data.ok_or_else(|| anyhow::anyhow!("no removed line"))?;
    assert_eq!(removed.line.id, cart.id);
    assert_eq!(common::count_carts(&state, customer_row.id).await?, 0);

    let listed = cart_service::list_carts(&state, &customer).await?;
    assert!(listed.data.unwrap().is_empty());

    Ok(())
}
