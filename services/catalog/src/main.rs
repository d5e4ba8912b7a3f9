use sea_orm::Database;
use tracing::info;

use cinelog_catalog::config::CatalogConfig;
use cinelog_catalog::infra::omdb::OmdbClient;
use cinelog_catalog::router::build_router;
use cinelog_catalog::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let lookup = OmdbClient::new(&config.omdb_base_url, &config.omdb_api_key);

    let state = AppState { db, lookup };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
