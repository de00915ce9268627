pub mod genre;
pub mod movies;
