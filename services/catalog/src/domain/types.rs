/// Registered viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Catalog movie. `rating` is the canonical score, not any user's rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

/// Attributes for creating a movie; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieAttributes {
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

/// Field-subset patch for a movie. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub name: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub rating: Option<f64>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.director.is_none()
            && self.year.is_none()
            && self.poster.is_none()
            && self.rating.is_none()
    }
}

/// Rating edge between a user and a movie. Both numeric attributes are
/// opaque; `user_rating` defaults to 0.0 when the caller omits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingEdge {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: f64,
    pub user_rating: f64,
}

/// Projection of a movie joined with the rating edge a given user holds on
/// it. `rating` is the edge's value, not the movie's canonical score.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithRating {
    pub id: i32,
    pub name: String,
    pub director: String,
    pub year: i32,
    pub poster: String,
    pub rating: f64,
}

/// Movie together with every user holding a rating edge on it.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithUsers {
    pub movie: Movie,
    pub users: Vec<User>,
}

/// Outcome of a rating upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingOutcome {
    /// A new edge was inserted for the (user, movie) pair.
    Created,
    /// The existing edge's attributes were replaced.
    Updated,
    /// The user or the movie id did not resolve; nothing was written.
    NotFound,
}
