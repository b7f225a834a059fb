use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::get;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{Config, NodeEnv};
use crate::error::ServerError;
use crate::http::{create_user, get_user, health, list_users, not_found};
use crate::signaling::ws_handler;
use crate::store::{InMemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub node_env: NodeEnv,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()), config.node_env)
    }

    pub fn with_store(users: Arc<dyn UserStore>, node_env: NodeEnv) -> Self {
        Self { users, node_env }
    }
}

/// Builds the full application: HTTP routes, the `/ws` handshake endpoint
/// and the middleware stack.
pub fn router(config: &Config, state: AppState) -> Result<Router, ServerError> {
    let cors = cors_layer(&config.cors_origin)?;

    let app = Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/ws", get(ws_handler))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(security_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(security_header(header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .layer(security_header(header::REFERRER_POLICY, "no-referrer"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    Ok(app)
}

fn security_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| ServerError::Config(format!("invalid CORS_ORIGIN entry '{}'", o)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
