use std::sync::Arc;

use axum::{routing::get, Router};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    application::Application,
    config::{ApplicationConfig, CorsConfig},
};

mod extractor;
mod response;
mod router;

pub(super) struct ServerConfig {
    pub port: u16,
    pub cors: Option<CorsConfig>,
}

impl From<&ApplicationConfig> for ServerConfig {
    fn from(value: &ApplicationConfig) -> Self {
        Self { port: value.port, cors: value.cors.clone() }
    }
}

pub(super) async fn run(application: Application, config: ServerConfig) -> anyhow::Result<()> {
    let app = app(Arc::new(application), config.cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("starting backbone server on {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

fn app(application: Arc<Application>, cors: Option<CorsConfig>) -> Router {
    let app = Router::new()
        .route("/health", get(|| async { "" }))
        .nest("/api/teams", router::teams::router(application))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        app.layer(cors_layer(cors))
    } else {
        app
    }
}

fn cors_layer(cors: CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(match cors {
            CorsConfig::AllowAll => AllowOrigin::any(),
            CorsConfig::AllowList { origins } => {
                AllowOrigin::predicate(move |value, _| origins.iter().any(|origin| origin_matches(origin, value.as_bytes())))
            }
        })
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// An allowed origin may carry a single `*` wildcard.
fn origin_matches(origin: &str, value: &[u8]) -> bool {
    let split_byte_wildcard = origin.split('*').map(str::as_bytes).collect::<Vec<_>>();
    if split_byte_wildcard.len() == 2 {
        let (prefix, suffix) = (split_byte_wildcard[0], split_byte_wildcard[1]);
        value.len() >= prefix.len() + suffix.len() && value.starts_with(prefix) && value.ends_with(suffix)
    } else {
        origin.as_bytes() == value
    }
}
