use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Movie, MovieAttributes, MoviePatch, MovieWithUsers};
use crate::error::CatalogServiceError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::movie::{
    AddMovieByTitleUseCase, CreateMovieUseCase, DeleteMovieUseCase, ListMoviesUseCase,
    UpdateMovieUseCase,
};

#[derive(Serialize)]
pub struct MovieResponse {
    pub id: i32,
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            director: movie.director,
            year: movie.year,
            poster: movie.poster,
            rating: movie.rating,
        }
    }
}

#[derive(Serialize)]
pub struct MovieWithUsersResponse {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub users: Vec<UserResponse>,
}

impl From<MovieWithUsers> for MovieWithUsersResponse {
    fn from(entry: MovieWithUsers) -> Self {
        Self {
            movie: entry.movie.into(),
            users: entry.users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

// ── GET /movies ──────────────────────────────────────────────────────────────

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieWithUsersResponse>>, CatalogServiceError> {
    let usecase = ListMoviesUseCase {
        repo: state.movie_repo(),
    };
    let movies = usecase.execute().await?;
    Ok(Json(
        movies.into_iter().map(MovieWithUsersResponse::from).collect(),
    ))
}

// ── POST /movies ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMovieRequest {
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), CatalogServiceError> {
    let usecase = CreateMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase
        .execute(MovieAttributes {
            name: body.name,
            director: body.director,
            year: body.year,
            poster: body.poster,
            rating: body.rating,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

// ── POST /movies/lookup ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LookupMovieRequest {
    pub title: String,
}

pub async fn lookup_movie(
    State(state): State<AppState>,
    Json(body): Json<LookupMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), CatalogServiceError> {
    let usecase = AddMovieByTitleUseCase {
        repo: state.movie_repo(),
        lookup: state.movie_lookup(),
    };
    let movie = usecase.execute(&body.title).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

// ── PATCH /movies/{movie_id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMovieRequest {
    pub name: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub rating: Option<f64>,
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
    Json(body): Json<UpdateMovieRequest>,
) -> Result<Json<MovieResponse>, CatalogServiceError> {
    let usecase = UpdateMovieUseCase {
        repo: state.movie_repo(),
    };
    let movie = usecase
        .execute(
            movie_id,
            MoviePatch {
                name: body.name,
                director: body.director,
                year: body.year,
                poster: body.poster,
                rating: body.rating,
            },
        )
        .await?;
    Ok(Json(movie.into()))
}

// ── DELETE /movies/{movie_id} ────────────────────────────────────────────────

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = DeleteMovieUseCase {
        repo: state.movie_repo(),
    };
    let deleted = usecase.execute(movie_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CatalogServiceError::MovieNotFound)
    }
}
