use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use cinelog_catalog_schema::{movies, user_movies, users};

use crate::domain::repository::{MovieRepository, RatingRepository, UserRepository};
use crate::domain::types::{
    Movie, MovieAttributes, MoviePatch, MovieWithRating, MovieWithUsers, RatingEdge,
    RatingOutcome, User,
};
use crate::error::CatalogServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, name: &str) -> Result<User, CatalogServiceError> {
        let model = users::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
    }
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl MovieRepository for DbMovieRepository {
    async fn list_with_users(&self) -> Result<Vec<MovieWithUsers>, CatalogServiceError> {
        // Many-to-many through user_movies, resolved in one logical fetch.
        let rows = movies::Entity::find()
            .find_with_related(users::Entity)
            .all(&self.db)
            .await
            .context("list movies with users")?;
        Ok(rows
            .into_iter()
            .map(|(movie, users)| MovieWithUsers {
                movie: movie_from_model(movie),
                users: users.into_iter().map(user_from_model).collect(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogServiceError> {
        let model = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find movie by id")?;
        Ok(model.map(movie_from_model))
    }

    async fn create(&self, attrs: &MovieAttributes) -> Result<Movie, CatalogServiceError> {
        let model = movies::ActiveModel {
            name: Set(attrs.name.clone()),
            director: Set(attrs.director.clone()),
            year: Set(attrs.year),
            poster: Set(attrs.poster.clone()),
            rating: Set(attrs.rating),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create movie")?;
        Ok(movie_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        patch: &MoviePatch,
    ) -> Result<Option<Movie>, CatalogServiceError> {
        let patch = patch.clone();
        let updated = self
            .db
            .transaction::<_, Option<movies::Model>, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let existing = movies::Entity::find_by_id(id).one(txn).await?;
                    let Some(row) = existing else {
                        return Ok(None);
                    };

                    let mut movie = row.into_active_model();
                    if let Some(name) = patch.name {
                        movie.name = Set(name);
                    }
                    if let Some(director) = patch.director {
                        movie.director = Set(director);
                    }
                    if let Some(year) = patch.year {
                        movie.year = Set(year);
                    }
                    if let Some(poster) = patch.poster {
                        movie.poster = Set(poster);
                    }
                    if let Some(rating) = patch.rating {
                        movie.rating = Set(rating);
                    }
                    match movie.update(txn).await {
                        Ok(model) => Ok(Some(model)),
                        // The row can vanish between the read and the write
                        // when a concurrent delete commits in between.
                        Err(sea_orm::DbErr::RecordNotUpdated) => Ok(None),
                        Err(err) => Err(err),
                    }
                })
            })
            .await
            .context("update movie")?;
        Ok(updated.map(movie_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        // Edges and the movie row go in one transaction; a failure after the
        // edge delete rolls both back.
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    user_movies::Entity::delete_many()
                        .filter(user_movies::Column::MovieId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = movies::Entity::delete_many()
                        .filter(movies::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete movie with rating edges")?;
        Ok(deleted)
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: model.id,
        name: model.name,
        director: model.director,
        year: model.year,
        poster: model.poster,
        rating: model.rating,
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn upsert(&self, edge: &RatingEdge) -> Result<RatingOutcome, CatalogServiceError> {
        let edge = *edge;
        let outcome = self
            .db
            .transaction::<_, RatingOutcome, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let user = users::Entity::find_by_id(edge.user_id).one(txn).await?;
                    let movie = movies::Entity::find_by_id(edge.movie_id).one(txn).await?;
                    if user.is_none() || movie.is_none() {
                        return Ok(RatingOutcome::NotFound);
                    }

                    // Update-in-place first; rows_affected tells whether the
                    // edge existed, without a separate read.
                    let hit = user_movies::Entity::update_many()
                        .col_expr(user_movies::Column::Rating, Expr::value(edge.rating))
                        .col_expr(user_movies::Column::UserRating, Expr::value(edge.user_rating))
                        .filter(user_movies::Column::UserId.eq(edge.user_id))
                        .filter(user_movies::Column::MovieId.eq(edge.movie_id))
                        .exec(txn)
                        .await?;
                    if hit.rows_affected > 0 {
                        return Ok(RatingOutcome::Updated);
                    }

                    // A same-pair insert race is resolved by the unique
                    // index: the losing writer's insert becomes an update.
                    user_movies::Entity::insert(user_movies::ActiveModel {
                        user_id: Set(edge.user_id),
                        movie_id: Set(edge.movie_id),
                        rating: Set(edge.rating),
                        user_rating: Set(edge.user_rating),
                        ..Default::default()
                    })
                    .on_conflict(
                        OnConflict::columns([
                            user_movies::Column::UserId,
                            user_movies::Column::MovieId,
                        ])
                        .update_columns([
                            user_movies::Column::Rating,
                            user_movies::Column::UserRating,
                        ])
                        .to_owned(),
                    )
                    .exec_without_returning(txn)
                    .await?;

                    Ok(RatingOutcome::Created)
                })
            })
            .await
            .context("upsert rating edge")?;
        Ok(outcome)
    }

    async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<MovieWithRating>, CatalogServiceError> {
        let rows = user_movies::Entity::find()
            .filter(user_movies::Column::UserId.eq(user_id))
            .find_also_related(movies::Entity)
            .order_by_asc(user_movies::Column::Id)
            .all(&self.db)
            .await
            .context("list rated movies for user")?;
        Ok(rows
            .into_iter()
            .filter_map(|(edge, movie)| {
                movie.map(|m| MovieWithRating {
                    id: m.id,
                    name: m.name,
                    director: m.director,
                    year: m.year,
                    poster: m.poster,
                    rating: edge.rating,
                })
            })
            .collect())
    }
}
