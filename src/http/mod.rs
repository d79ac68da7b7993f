//! HTTP transport: maps REST routes onto a record store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /`: greeting.
//! - `GET /users`, `POST /users`, `GET /users/:id`
//! - `GET /products`, `POST /products`, `GET|PATCH|DELETE /products/:id`
//! - `GET /product-categories`, `POST /product-categories`,
//!   `GET|PATCH|DELETE /product-categories/:id`
//!
//! Success bodies are `{ "data": ... }` or `{ "message": ..., "data": ... }`;
//! failures are `{ "error": ... }`. Unknown paths answer 404 and unsupported
//! methods 405, both as JSON.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_api::{http, InMemoryStore};
//!
//! let catalog = Arc::new(http::Catalog::new(InMemoryStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(catalog.clone());
//!
//! // Or serve directly
//! http::serve(catalog, "127.0.0.1:3000".parse()?).await?;
//! ```

mod envelope;
mod error;
mod handlers;
mod resource;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{Product, ProductCategory, User};
use crate::store::RecordStore;

pub use envelope::{DataBody, ErrorBody, MessageBody};
pub use error::ApiError;
pub use resource::{Mutable, Resource};

/// Shared application state: the store every handler works against.
pub struct Catalog<S> {
    store: S,
}

impl<S: RecordStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Build an axum `Router` serving the catalogue from the given store.
pub fn router<S: RecordStore + 'static>(catalog: Arc<Catalog<S>>) -> Router {
    use handlers::{create, get_one, list, remove, update};

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/users", get(list::<S, User>).post(create::<S, User>))
        .route("/users/:id", get(get_one::<S, User>))
        .route(
            "/products",
            get(list::<S, Product>).post(create::<S, Product>),
        )
        .route(
            "/products/:id",
            get(get_one::<S, Product>)
                .patch(update::<S, Product>)
                .delete(remove::<S, Product>),
        )
        .route(
            "/product-categories",
            get(list::<S, ProductCategory>).post(create::<S, ProductCategory>),
        )
        .route(
            "/product-categories/:id",
            get(get_one::<S, ProductCategory>)
                .patch(update::<S, ProductCategory>)
                .delete(remove::<S, ProductCategory>),
        )
        .fallback(handlers::route_not_found)
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

/// Serve the catalogue over HTTP until Ctrl-C.
pub async fn serve<S: RecordStore + 'static>(
    catalog: Arc<Catalog<S>>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Any origin; preflight allows the verbs routed above and `Content-Type`.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// axum answers a known path with an unrouted method with an empty 405;
/// give it the same `{ "error": ... }` body as every other failure.
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}
