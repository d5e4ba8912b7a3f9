use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health::{healthz, readyz},
    movie::{create_movie, delete_movie, list_movies, lookup_movie, update_movie},
    rating::{get_user_movies, upsert_rating},
    user::{create_user, list_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        // Ratings
        .route("/users/{user_id}/movies", get(get_user_movies))
        .route("/users/{user_id}/movies/{movie_id}", put(upsert_rating))
        // Movies
        .route("/movies", get(list_movies))
        .route("/movies", post(create_movie))
        .route("/movies/lookup", post(lookup_movie))
        .route("/movies/{movie_id}", patch(update_movie))
        .route("/movies/{movie_id}", delete(delete_movie))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
