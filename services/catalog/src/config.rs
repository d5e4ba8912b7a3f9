/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// Database connection URL (PostgreSQL or SQLite).
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
    /// Base URL of the OMDb metadata API. Env var: `OMDB_BASE_URL`.
    pub omdb_base_url: String,
    /// API key for the OMDb metadata API. Env var: `OMDB_API_KEY`.
    pub omdb_api_key: String,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            catalog_port: std::env::var("CATALOG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3120),
            omdb_base_url: std::env::var("OMDB_BASE_URL")
                .unwrap_or_else(|_| "http://www.omdbapi.com".to_owned()),
            omdb_api_key: std::env::var("OMDB_API_KEY").expect("OMDB_API_KEY"),
        }
    }
}
