//! Route configuration.
//!
//! # Routes
//!
//! | Method | Path | Auth | Handler |
//! |--------|------|------|---------|
//! | GET | /api/ping | none | `ping` |
//! | GET | /api/user | bearer | `current_user` |
//! | POST | /api/points | bearer | `add_points` |
//! | GET | /api/customers/{customer_id}/point-events | bearer | `point_history` |

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{add_points, current_user, ping, point_history};
use crate::infrastructure::AppDependencies;

/// Creates the router with every API route, request tracing, and state.
///
/// # Example
///
/// ```rust,ignore
/// let router = create_router(dependencies);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(dependencies: AppDependencies) -> Router {
    let api = Router::new()
        .route("/ping", get(ping))
        .route("/user", get(current_user))
        .route("/points", post(add_points))
        .route(
            "/customers/{customer_id}/point-events",
            get(point_history),
        );

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(dependencies)
}
