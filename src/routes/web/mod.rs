use axum::Router;

use crate::state::AppState;

pub mod carts;
pub mod categories;
pub mod products;
pub mod rajaongkir;
pub mod sliders;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/sliders", sliders::router())
        .nest("/carts", carts::router())
        .nest("/rajaongkir", rajaongkir::router())
}
