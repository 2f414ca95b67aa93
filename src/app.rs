// region:    --- Imports
use crate::handlers::{self, SharedStore};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// endregion: --- Imports

/// Routes for every resource group
pub fn build_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::handle_index))
        .route(
            "/users",
            post(handlers::handle_create_user).get(handlers::handle_get_users),
        )
        .route(
            "/items",
            post(handlers::handle_create_item).get(handlers::handle_get_items),
        )
        .route("/auctions", get(handlers::handle_get_auctions))
        .route("/bids", post(handlers::handle_place_bid))
        .route("/winners", get(handlers::handle_get_winners))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_success() {
                            tracing::info!(%status, "response");
                        } else {
                            tracing::warn!(%status, "response");
                        }
                    },
                ),
        )
        .with_state(store)
}
