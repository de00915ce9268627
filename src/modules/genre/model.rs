use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::movies::error::MovieError;

/// Client-side genre filter. `All` is the empty selection and matches every movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    #[default]
    #[serde(rename = "")]
    All,
    #[serde(rename = "action")]
    Action,
    #[serde(rename = "comedy")]
    Comedy,
    #[serde(rename = "drama")]
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::All, Genre::Action, Genre::Comedy, Genre::Drama];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::All => "",
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Genre::All => "All Genres",
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
        }
    }

    /// TMDB genre id, `None` for the empty selection.
    pub fn tmdb_id(&self) -> Option<u32> {
        match self {
            Genre::All => None,
            Genre::Action => Some(28),
            Genre::Comedy => Some(35),
            Genre::Drama => Some(18),
        }
    }

    pub fn matches(&self, genre_ids: &[u32]) -> bool {
        match self.tmdb_id() {
            None => true,
            Some(id) => genre_ids.contains(&id),
        }
    }
}

impl FromStr for Genre {
    type Err = MovieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| MovieError::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
