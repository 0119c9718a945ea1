#![allow(dead_code)]

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

use storefront_api::{
    config::{AppConfig, CourierConfig},
    db::{create_orm_conn, create_pool, run_migrations},
    entity::{carts, categories, cities, customers, invoices, orders, products, provinces, reviews},
    services::shipping_service::ShippingGateway,
    services::slugify,
    state::AppState,
};

/// Build an AppState against the configured test database, or None when no
/// database is configured so the caller can skip.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests."
                );
                return Ok(None);
            }
        };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;
    let pool = create_pool(&database_url).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE reviews, orders, invoices, carts, sliders, products, categories, cities, provinces, customers, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let storage_dir = std::env::temp_dir()
        .join("storefront-api-test-storage")
        .to_string_lossy()
        .into_owned();

    let config = AppConfig {
        database_url,
        host: "127.0.0.1".into(),
        port: 0,
        app_url: "http://localhost:3000".into(),
        storage_dir,
        courier: CourierConfig {
            api_key: String::new(),
            base_url: "https://api.rajaongkir.com/starter".into(),
            origin: "113".into(),
        },
    };
    let shipping = ShippingGateway::new(config.courier.clone())?;

    Ok(Some(AppState {
        pool,
        orm,
        config,
        shipping,
    }))
}

pub async fn create_admin(state: &AppState, email: &str) -> anyhow::Result<Uuid> {
    let user = storefront_api::entity::users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Admin".into()),
        email: Set(email.to_string()),
        password: Set("dummy".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_customer(state: &AppState, email: &str) -> anyhow::Result<customers::Model> {
    let customer = customers::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Customer".into()),
        email: Set(email.to_string()),
        password: Set("dummy".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(customer)
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<categories::Model> {
    let category = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        slug: Set(slugify(name)),
        image: Set("category.png".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(category)
}

pub async fn create_product(
    state: &AppState,
    category_id: Uuid,
    user_id: Uuid,
    title: &str,
    price: i64,
) -> anyhow::Result<products::Model> {
    let product = products::ActiveModel {
        id: Set(Uuid::new_v4()),
        category_id: Set(category_id),
        user_id: Set(user_id),
        title: Set(title.to_string()),
        slug: Set(slugify(title)),
        description: Set("A product for testing".into()),
        weight: Set(500),
        price: Set(price),
        stock: Set(10),
        discount: Set(0),
        image: Set("product.png".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(product)
}

pub async fn create_region(state: &AppState) -> anyhow::Result<(provinces::Model, cities::Model)> {
    let province = provinces::ActiveModel {
        id: Set(11),
        name: Set("Jawa Tengah".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    let city = cities::ActiveModel {
        id: Set(113),
        province_id: Set(province.id),
        name: Set("Demak".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok((province, city))
}

pub async fn create_invoice(
    state: &AppState,
    customer_id: Uuid,
    city: &cities::Model,
    status: &str,
    grand_total: i64,
) -> anyhow::Result<invoices::Model> {
    let invoice = invoices::ActiveModel {
        id: Set(Uuid::new_v4()),
        invoice: Set(format!("INV-{}", Uuid::new_v4())),
        customer_id: Set(customer_id),
        courier: Set("jne".into()),
        courier_service: Set("REG".into()),
        courier_cost: Set(9000),
        weight: Set(1000),
        name: Set("Customer".into()),
        phone: Set("0800000000".into()),
        city_id: Set(city.id),
        province_id: Set(city.province_id),
        address: Set("Jl. Testing No. 1".into()),
        status: Set(status.to_string()),
        grand_total: Set(grand_total),
        snap_token: Set(Uuid::new_v4().to_string()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(invoice)
}

pub async fn create_order(
    state: &AppState,
    invoice_id: Uuid,
    product_id: Uuid,
    qty: i32,
    price: i64,
) -> anyhow::Result<orders::Model> {
    let order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        invoice_id: Set(invoice_id),
        product_id: Set(product_id),
        qty: Set(qty),
        price: Set(price),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(order)
}

pub async fn create_review(
    state: &AppState,
    product_id: Uuid,
    order_id: Uuid,
    customer_id: Uuid,
    rating: i32,
) -> anyhow::Result<reviews::Model> {
    let review = reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        order_id: Set(order_id),
        customer_id: Set(customer_id),
        rating: Set(rating),
        review: Set("Great product".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(review)
}

pub async fn count_carts(state: &AppState, customer_id: Uuid) -> anyhow::Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM carts WHERE customer_id = $1")
        .bind(customer_id)
        .fetch_one(&state.pool)
        .await?;
    Ok(count.0)
}

pub async fn find_cart(
    state: &AppState,
    customer_id: Uuid,
    product_id: Uuid,
) -> anyhow::Result<Option<carts::Model>> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
    let cart = carts::Entity::find()
        .filter(carts::Column::CustomerId.eq(customer_id))
        .filter(carts::Column::ProductId.eq(product_id))
        .one(&state.orm)
        .await?;
    Ok(cart)
}
