#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Movie, MovieAttributes, MoviePatch, MovieWithRating, MovieWithUsers, RatingEdge,
    RatingOutcome, User,
};
use crate::error::CatalogServiceError;

/// Repository for viewer accounts.
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError>;

    async fn create(&self, name: &str) -> Result<User, CatalogServiceError>;
}

/// Repository for catalog movies.
pub trait MovieRepository: Send + Sync {
    /// All movies, each eagerly carrying the users who rated it. The join is
    /// resolved in one logical fetch, never one query per movie.
    async fn list_with_users(&self) -> Result<Vec<MovieWithUsers>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogServiceError>;

    async fn create(&self, attrs: &MovieAttributes) -> Result<Movie, CatalogServiceError>;

    /// Apply a field-subset patch. Unspecified fields keep their prior
    /// values. Returns `None` if the movie does not exist.
    async fn update(
        &self,
        id: i32,
        patch: &MoviePatch,
    ) -> Result<Option<Movie>, CatalogServiceError>;

    /// Delete a movie and every rating edge referencing it as one atomic
    /// unit. Returns `true` if a movie row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for user-movie rating edges.
pub trait RatingRepository: Send + Sync {
    /// Insert or update the edge for (user_id, movie_id) as a single atomic
    /// step. Concurrent upserts for the same pair serialize on the store's
    /// uniqueness constraint; exactly one edge remains afterwards.
    async fn upsert(&self, edge: &RatingEdge) -> Result<RatingOutcome, CatalogServiceError>;

    /// Movies the user rated, each carrying the edge's rating, ordered by
    /// edge creation. An unknown user yields an empty list.
    async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<MovieWithRating>, CatalogServiceError>;
}

/// Port for the external movie metadata lookup.
pub trait MovieLookupPort: Send + Sync {
    async fn lookup(
        &self,
        title: &str,
    ) -> Result<Option<MovieAttributes>, CatalogServiceError>;
}
