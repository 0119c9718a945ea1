use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod customer;
pub mod doc;
pub mod health;
pub mod params;
pub mod web;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/customer", customer::router())
        .nest("/web", web::router())
}
