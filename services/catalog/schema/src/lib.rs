pub mod movies;
pub mod user_movies;
pub mod users;
