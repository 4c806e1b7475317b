use axum::Router;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod error;
pub mod quote;
pub mod render;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(quote::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
