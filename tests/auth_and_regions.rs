mod common;

use storefront_api::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppError,
    middleware::auth::CustomerUser,
    services::{auth_service, shipping_service},
};

// Register/login round trip for the customer realm plus the shipping
// reference data lookups.
#[tokio::test]
async fn customer_auth_and_region_lookups() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    // Token issuance reads the signing secret from the environment.
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };

    let registered = auth_service::customer_register(
        &state,
        RegisterRequest {
            name: "Buyer".into(),
            email: "buyer@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
        },
    )
    .await?;
    let registered = registered.data.unwrap();
    assert_eq!(registered.email, "buyer@example.com");

    // Mismatched confirmation fails validation before touching the database.
    let mismatched = auth_service::customer_register(
        &state,
        RegisterRequest {
            name: "Buyer".into(),
            email: "second@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "different".into(),
        },
    )
    .await;
    assert!(matches!(mismatched, Err(AppError::Validation(_))));

    // The email uniqueness check feeds the same 422 map.
    let duplicate = auth_service::customer_register(
        &state,
        RegisterRequest {
            name: "Buyer".into(),
            email: "buyer@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
        },
    )
    .await;
    match duplicate {
        Err(AppError::Validation(map)) => assert!(map.contains_key("email")),
        other => panic!("expected validation error, got {:?}", other.map(|r| r.message)),
    }

    let logged_in = auth_service::customer_login(
        &state,
        LoginRequest {
            email: "buyer@example.com".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    let logged_in = logged_in.data.unwrap();
    assert!(!logged_in.token.is_empty());

    let wrong = auth_service::customer_login(
        &state,
        LoginRequest {
            email: "buyer@example.com".into(),
            password: "not-the-password".into(),
        },
    )
    .await;
    assert!(matches!(wrong, Err(AppError::Auth(_))));

    let customer = CustomerUser {
        customer_id: registered.id,
    };
    let profile = auth_service::customer_profile(&state, &customer).await?;
    assert_eq!(profile.data.unwrap().email, "buyer@example.com");

    // Region reference data.
    let (province, city) = common::create_region(&state).await?;

    let provinces = shipping_service::get_provinces(&state).await?;
    assert_eq!(provinces.data.unwrap().len(), 1);

    let cities = shipping_service::get_cities(&state, province.id).await?;
    let resolved = cities.data.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, city.id);

    let missing = shipping_service::get_cities(&state, 999).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
