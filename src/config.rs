use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Public base URL, used to resolve stored image names to full URLs.
    pub app_url: String,
    /// Root directory for uploaded files.
    pub storage_dir: String,
    pub courier: CourierConfig,
}

#[derive(Debug, Clone)]
pub struct CourierConfig {
    pub api_key: String,
    pub base_url: String,
    /// Origin city id sent with every shipping quote.
    pub origin: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let storage_dir = env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".to_string());
        let courier = CourierConfig {
            api_key: env::var("RAJAONGKIR_KEY").unwrap_or_default(),
            base_url: env::var("RAJAONGKIR_BASE_URL")
                .unwrap_or_else(|_| "https://api.rajaongkir.com/starter".to_string()),
            origin: env::var("RAJAONGKIR_ORIGIN").unwrap_or_else(|_| "113".to_string()),
        };
        Ok(Self {
            port,
            database_url,
            host,
            app_url,
            storage_dir,
            courier,
        })
    }
}
