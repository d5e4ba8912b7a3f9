use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::user::{CreateUserUseCase, ListUsersUseCase};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), CatalogServiceError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, CatalogServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
