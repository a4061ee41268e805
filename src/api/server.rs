//! HTTP server implementation for the blog service API

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::core::AppState;
use crate::types::Result;

/// Creates the main application router with all routes and middleware
pub fn create_app(app_state: AppState) -> Router {
    // CORS configuration - permissive, no credentials
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_origin(Any);

    Router::new()
        // System routes
        .route("/version", get(handlers::read_version))
        .route("/stats", get(handlers::read_stats))

        // Post routes: create/read hit the document store, update/delete the board
        .route("/posts", post(handlers::create_post))
        .route(
            "/posts/{post_id}",
            get(handlers::read_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )

        // Comment routes
        .route("/comments", post(handlers::create_comment))
        .route("/comments/{comment_id}", get(handlers::read_comment))

        // User routes
        .route("/users", post(handlers::create_user))
        .route("/users/{user_id}", get(handlers::read_user))

        // Profile routes, read keyed by owning user
        .route("/profiles", post(handlers::create_profile))
        .route("/profiles/{user_id}", get(handlers::read_profile))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

/// Start the HTTP server and run until Ctrl-C or SIGTERM
pub async fn start_server(app_state: AppState) -> Result<()> {
    let addr = app_state.config.server.http_addr;
    tracing::info!("Starting blog service API server on {}", addr);

    let app = create_app(app_state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on the first shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::warn!("Received terminate signal");
        },
    }
}
