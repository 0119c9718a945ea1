use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn},
    services::shipping_service::ShippingGateway,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub config: AppConfig,
    pub shipping: ShippingGateway,
}
