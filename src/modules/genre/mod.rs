use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> axum::Router<AppState> {
    Router::new().route("/", get(handler::list_genres))
}
