use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use recommender::config::Config;
use recommender::db::create_pool;
use recommender::logging;
use recommender::routes::build_router;
use recommender::state::AppState;
use recommender::store::PgSkillStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing DATABASE_URL)
    let config = Config::from_env()?;

    logging::init(&config.rust_log);

    info!("Starting recommender API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url, 10).await?;
    let store = Arc::new(PgSkillStore::new(db));
    info!(
        "Recommendation limit: {} postings per student",
        config.recommendation_limit
    );

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
