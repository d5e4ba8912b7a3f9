pub mod db;
pub mod omdb;
