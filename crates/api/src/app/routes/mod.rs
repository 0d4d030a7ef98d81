use axum::Router;

pub mod producers;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new().nest("/producers", producers::router())
}
