pub mod health;
pub mod movie;
pub mod rating;
pub mod user;
