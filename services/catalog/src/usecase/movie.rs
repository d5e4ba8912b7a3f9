use tracing::info;

use crate::domain::repository::{MovieLookupPort, MovieRepository};
use crate::domain::types::{Movie, MovieAttributes, MoviePatch, MovieWithUsers};
use crate::error::CatalogServiceError;

// ── CreateMovie ──────────────────────────────────────────────────────────────

pub struct CreateMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> CreateMovieUseCase<R> {
    pub async fn execute(&self, attrs: MovieAttributes) -> Result<Movie, CatalogServiceError> {
        if attrs.name.trim().is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        self.repo.create(&attrs).await
    }
}

// ── AddMovieByTitle ──────────────────────────────────────────────────────────

/// Resolve a title through the metadata lookup port and store the result.
pub struct AddMovieByTitleUseCase<R: MovieRepository, L: MovieLookupPort> {
    pub repo: R,
    pub lookup: L,
}

impl<R: MovieRepository, L: MovieLookupPort> AddMovieByTitleUseCase<R, L> {
    pub async fn execute(&self, title: &str) -> Result<Movie, CatalogServiceError> {
        if title.trim().is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        let attrs = self
            .lookup
            .lookup(title)
            .await?
            .ok_or(CatalogServiceError::TitleNotFound)?;
        let movie = self.repo.create(&attrs).await?;
        info!(movie_id = movie.id, title = %movie.name, "movie added from lookup");
        Ok(movie)
    }
}

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> ListMoviesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<MovieWithUsers>, CatalogServiceError> {
        self.repo.list_with_users().await
    }
}

// ── UpdateMovie ──────────────────────────────────────────────────────────────

pub struct UpdateMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> UpdateMovieUseCase<R> {
    pub async fn execute(
        &self,
        movie_id: i32,
        patch: MoviePatch,
    ) -> Result<Movie, CatalogServiceError> {
        if patch.is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        self.repo
            .update(movie_id, &patch)
            .await?
            .ok_or(CatalogServiceError::MovieNotFound)
    }
}

// ── DeleteMovie ──────────────────────────────────────────────────────────────

pub struct DeleteMovieUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> DeleteMovieUseCase<R> {
    /// Returns `false` when the movie does not exist; a second delete of the
    /// same id is a no-op, not an error.
    pub async fn execute(&self, movie_id: i32) -> Result<bool, CatalogServiceError> {
        let deleted = self.repo.delete(movie_id).await?;
        if deleted {
            info!(movie_id, "movie deleted with its rating edges");
        }
        Ok(deleted)
    }
}
