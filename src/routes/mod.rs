use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::EmailService;

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub email: EmailService,
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/health", get(health::health))
        .nest_service("/images", ServeDir::new(&state.config.server.images_dir));

    // Production additionally serves the prebuilt client bundle for
    // everything the API does not claim.
    if state.config.server.production {
        app = app.fallback_service(
            ServeDir::new(&state.config.server.client_bundle_dir)
                .append_index_html_on_directories(true),
        );
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
