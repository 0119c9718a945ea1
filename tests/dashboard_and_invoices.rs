mod common;

use chrono::Utc;
use serde_json::Value;
use storefront_api::{
    error::AppError,
    middleware::auth::CustomerUser,
    services::{dashboard_service, invoice_service},
};
use uuid::Uuid;

// Fixture counts per status, the monthly success chart, the empty-state
// placeholder, and the invoice read models for both realms.
#[tokio::test]
async fn dashboard_counts_chart_and_invoice_read_models() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    // Empty state: single empty-string element in both chart arrays.
    let empty = dashboard_service::dashboard_stats(&state, None).await?;
    let empty = empty.data.unwrap();
    assert_eq!(empty.count.pending, 0);
    assert_eq!(empty.chart.month_name, vec![Value::String(String::new())]);
    assert_eq!(empty.chart.grand_total, vec![Value::String(String::new())]);

    let admin_id = common::create_admin(&state, "admin@example.com").await?;
    let customer_row = common::create_customer(&state, "buyer@example.com").await?;
    let other_row = common::create_customer(&state, "other@example.com").await?;
    let (_province, city) = common::create_region(&state).await?;
    let category = common::create_category(&state, "Apparel").await?;
    let product = common::create_product(&state, category.id, admin_id, "Test Widget", 1000).await?;

    for _ in 0..5 {
        common::create_invoice(&state, customer_row.id, &city, "pending", 100_000).await?;
    }
    for _ in 0..4 {
        common::create_invoice(&state, customer_row.id, &city, "success", 250_000).await?;
    }
    for _ in 0..2 {
        common::create_invoice(&state, customer_row.id, &city, "expired", 100_000).await?;
    }
    let failed = common::create_invoice(&state, other_row.id, &city, "failed", 100_000).await?;

    let stats = dashboard_service::dashboard_stats(&state, None).await?;
    let stats = stats.data.unwrap();
    assert_eq!(stats.count.pending, 5);
    assert_eq!(stats.count.success, 4);
    assert_eq!(stats.count.expired, 2);
    assert_eq!(stats.count.failed, 1);

    // All success invoices were created this month, so the chart has one
    // bucket: the English month name and the grand_total sum.
    let month = Utc::now().format("%B").to_string();
    assert_eq!(stats.chart.month_name, vec![Value::String(month)]);
    assert_eq!(stats.chart.grand_total, vec![serde_json::json!(4 * 250_000)]);

    // Customer scope drops the other customer's invoice.
    let customer = CustomerUser {
        customer_id: customer_row.id,
    };
    let scoped = dashboard_service::dashboard_stats(&state, Some(customer_row.id)).await?;
    let scoped = scoped.data.unwrap();
    assert_eq!(scoped.count.pending, 5);
    assert_eq!(scoped.count.failed, 0);

    // Admin invoice listing paginates 5 per page.
    let listing = invoice_service::admin_list_invoices(&state, None, 1).await?;
    let listing = listing.data.unwrap();
    assert_eq!(listing.per_page, 5);
    assert_eq!(listing.total, 12);
    assert_eq!(listing.last_page, 3);
    assert_eq!(listing.data.len(), 5);

    // Admin detail composes orders, customer and destination.
    let invoice =
        common::create_invoice(&state, customer_row.id, &city, "success", 2_000).await?;
    common::create_order(&state, invoice.id, product.id, 2, 1000).await?;

    let detail = invoice_service::admin_invoice_detail(&state, invoice.id).await?;
    let detail = detail.data.unwrap();
    assert_eq!(detail.orders.len(), 1);
    assert_eq!(detail.orders[0].qty, 2);
    assert_eq!(detail.orders[0].product.title, "Test Widget");
    assert_eq!(detail.city.name, "Demak");
    assert_eq!(detail.customer.email, "buyer@example.com");

    let missing = invoice_service::admin_invoice_detail(&state, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Customers look up by snap token, scoped to the owner.
    let own = invoice_service::customer_invoice_detail(&state, &customer, &invoice.snap_token)
        .await?;
    assert_eq!(own.data.unwrap().invoice.id, invoice.id);

    let foreign =
        invoice_service::customer_invoice_detail(&state, &customer, &failed.snap_token).await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    // Search narrows on the invoice number.
    let searched =
        invoice_service::admin_list_invoices(&state, Some(invoice.invoice.as_str()), 1).await?;
    assert_eq!(searched.data.unwrap().total, 1);

    Ok(())
}
