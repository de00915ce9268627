use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod controller;
pub mod dto;
pub mod error;
pub mod handler;
pub mod model;
pub mod provider;
pub mod query;
pub mod service;
pub mod view;

pub fn router() -> axum::Router<AppState> {
    Router::new()
        .route("/movies", get(handler::list_movies))
        .route("/movies/events", post(handler::handle_event))
        .route("/movies/categories", get(handler::list_categories))
        .route("/movies/{id}", get(handler::get_movie))
}
