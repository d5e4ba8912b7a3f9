use sea_orm::DatabaseConnection;

use crate::infra::db::{DbMovieRepository, DbRatingRepository, DbUserRepository};
use crate::infra::omdb::OmdbClient;

/// Shared application state passed to every handler via axum `State`.
///
/// The connection handle is owned by `main` and cloned into each repository
/// per request; no operation holds a session beyond its own scope.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub lookup: OmdbClient,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_lookup(&self) -> OmdbClient {
        self.lookup.clone()
    }
}
