use tracing::info;

use crate::domain::repository::RatingRepository;
use crate::domain::types::{MovieWithRating, RatingEdge, RatingOutcome};
use crate::error::CatalogServiceError;

// ── UpsertRating ─────────────────────────────────────────────────────────────

pub struct UpsertRatingInput {
    pub rating: f64,
    /// Secondary rating attribute; defaults to 0.0 when omitted.
    pub user_rating: Option<f64>,
}

pub struct UpsertRatingUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> UpsertRatingUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        movie_id: i32,
        input: UpsertRatingInput,
    ) -> Result<RatingOutcome, CatalogServiceError> {
        let edge = RatingEdge {
            user_id,
            movie_id,
            rating: input.rating,
            user_rating: input.user_rating.unwrap_or(0.0),
        };
        let outcome = self.repo.upsert(&edge).await?;
        match outcome {
            RatingOutcome::Created => {
                info!(user_id, movie_id, rating = edge.rating, "rating edge created");
            }
            RatingOutcome::Updated => {
                info!(user_id, movie_id, rating = edge.rating, "rating edge updated");
            }
            RatingOutcome::NotFound => {}
        }
        Ok(outcome)
    }
}

// ── GetUserMovies ────────────────────────────────────────────────────────────

pub struct GetUserMoviesUseCase<R: RatingRepository> {
    pub repo: R,
}

impl<R: RatingRepository> GetUserMoviesUseCase<R> {
    /// An unknown user yields an empty list, not an error.
    pub async fn execute(
        &self,
        user_id: i32,
    ) -> Result<Vec<MovieWithRating>, CatalogServiceError> {
        self.repo.list_for_user(user_id).await
    }
}
