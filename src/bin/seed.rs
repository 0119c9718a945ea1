use serde::Deserialize;
use storefront_api::{config::AppConfig, db::create_pool, services::auth_service::hash_password};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "Admin", "admin@example.com", "admin123").await?;
    seed_regions(&pool, &config).await?;

    println!("Seed completed. Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_admin(
    pool: &sqlx::PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let password = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, name, email, password)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    // If the admin already exists, fetch its id.
    let admin_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured admin {email}");
    Ok(admin_id)
}

#[derive(Deserialize)]
struct ProvinceRow {
    province_id: String,
    province: String,
}

#[derive(Deserialize)]
struct CityRow {
    city_id: String,
    province_id: String,
    city_name: String,
}

#[derive(Deserialize)]
struct RegionEnvelope<T> {
    rajaongkir: RegionResults<T>,
}

#[derive(Deserialize)]
struct RegionResults<T> {
    results: Vec<T>,
}

/// Pull the province/city reference tables from the courier API. Skipped
/// when no API key is configured.
async fn seed_regions(pool: &sqlx::PgPool, config: &AppConfig) -> anyhow::Result<()> {
    if config.courier.api_key.is_empty() {
        println!("RAJAONGKIR_KEY not set; skipping region seed");
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let provinces: RegionEnvelope<ProvinceRow> = client
        .get(format!("{}/province", config.courier.base_url))
        .header("key", &config.courier.api_key)
        .send()
        .await?
        .json()
        .await?;

    for province in &provinces.rajaongkir.results {
        sqlx::query(
            r#"
            INSERT INTO provinces (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(province.province_id.parse::<i32>()?)
        .bind(&province.province)
        .execute(pool)
        .await?;
    }
    println!("Seeded {} provinces", provinces.rajaongkir.results.len());

    let cities: RegionEnvelope<CityRow> = client
        .get(format!("{}/city", config.courier.base_url))
        .header("key", &config.courier.api_key)
        .send()
        .await?
        .json()
        .await?;

    for city in &cities.rajaongkir.results {
        sqlx::query(
            r#"
            INSERT INTO cities (id, province_id, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(city.city_id.parse::<i32>()?)
        .bind(city.province_id.parse::<i32>()?)
        .bind(&city.city_name)
        .execute(pool)
        .await?;
    }
    println!("Seeded {} cities", cities.rajaongkir.results.len());

    Ok(())
}
