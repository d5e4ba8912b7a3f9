use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{MovieWithRating, RatingOutcome};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::rating::{GetUserMoviesUseCase, UpsertRatingInput, UpsertRatingUseCase};

// ── GET /users/{user_id}/movies ──────────────────────────────────────────────

/// `rating` here is the edge's value for this user, not the movie's
/// canonical score.
#[derive(Serialize)]
pub struct MovieWithRatingResponse {
    pub id: i32,
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

impl From<MovieWithRating> for MovieWithRatingResponse {
    fn from(entry: MovieWithRating) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            director: entry.director,
            year: entry.year,
            poster: entry.poster,
            rating: entry.rating,
        }
    }
}

pub async fn get_user_movies(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<MovieWithRatingResponse>>, CatalogServiceError> {
    let usecase = GetUserMoviesUseCase {
        repo: state.rating_repo(),
    };
    let movies = usecase.execute(user_id).await?;
    Ok(Json(
        movies
            .into_iter()
            .map(MovieWithRatingResponse::from)
            .collect(),
    ))
}

// ── PUT /users/{user_id}/movies/{movie_id} ───────────────────────────────────

#[derive(Deserialize)]
pub struct UpsertRatingRequest {
    pub rating: f64,
    pub user_rating: Option<f64>,
}

#[derive(Serialize)]
pub struct UpsertRatingResponse {
    pub outcome: &'static str,
}

pub async fn upsert_rating(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(i32, i32)>,
    Json(body): Json<UpsertRatingRequest>,
) -> Result<(StatusCode, Json<UpsertRatingResponse>), CatalogServiceError> {
    let usecase = UpsertRatingUseCase {
        repo: state.rating_repo(),
    };
    let outcome = usecase
        .execute(
            user_id,
            movie_id,
            UpsertRatingInput {
                rating: body.rating,
                user_rating: body.user_rating,
            },
        )
        .await?;
    match outcome {
        RatingOutcome::Created => Ok((
            StatusCode::CREATED,
            Json(UpsertRatingResponse { outcome: "created" }),
        )),
        RatingOutcome::Updated => Ok((
            StatusCode::OK,
            Json(UpsertRatingResponse { outcome: "updated" }),
        )),
        RatingOutcome::NotFound => Err(CatalogServiceError::RatingTargetNotFound),
    }
}
