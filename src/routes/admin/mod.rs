use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod products;
pub mod sliders;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(customers::router())
        .merge(dashboard::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/invoices", invoices::router())
        .nest("/sliders", sliders::router())
        .nest("/users", users::router())
}
