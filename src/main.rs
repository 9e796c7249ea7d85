use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pkmn_api::adapters::mysql::{
    self, MySqlBadgeReader, MySqlBoostFactReader, MySqlForecastReader, MySqlPokemonReader,
    MySqlTypeWarReader, MySqlUserReader,
};
use pkmn_api::adapters::{api_router, AppState, InMemoryIvCache, JwtSessionValidator};
use pkmn_api::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    let pool = mysql::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    tracing::info!(
        max_connections = config.database.pool.max_connections,
        "Database pool ready"
    );

    let state = AppState {
        users: Arc::new(MySqlUserReader::new(pool.clone())),
        boost_facts: Arc::new(MySqlBoostFactReader::new(pool.clone())),
        forecasts: Arc::new(MySqlForecastReader::new(pool.clone())),
        type_war: Arc::new(MySqlTypeWarReader::new(pool.clone())),
        badges: Arc::new(MySqlBadgeReader::new(pool.clone())),
        pokemon: Arc::new(MySqlPokemonReader::new(pool)),
        iv_cache: Arc::new(InMemoryIvCache::new(config.cache.iv_cache_capacity)),
        session_validator: Arc::new(JwtSessionValidator::new(&config.auth.jwt_secret)),
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(environment = ?config.server.environment, "Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// All endpoints are read-only GETs; an empty origin list allows any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
