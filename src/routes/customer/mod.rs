use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod dashboard;
pub mod invoices;
pub mod reviews;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(reviews::router())
        .nest("/invoices", invoices::router())
}
