use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::genre::model::Genre;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub value: Genre,
    pub label: String,
    pub tmdb_id: Option<u32>,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            value: g,
            label: g.label().to_string(),
            tmdb_id: g.tmdb_id(),
        }
    }
}
