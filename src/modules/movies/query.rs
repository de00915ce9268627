//! URL query-string store backing the listing filters.
//!
//! The store is the shareable copy of the filter state. Any key may be read
//! from an incoming query, but a publish leaves only `q`, `category` and
//! `genre` behind. It never holds a `page` entry and is only ever written
//! through [`QueryStore::publish`].

use url::form_urlencoded;

use super::controller::FilterState;
use super::error::MovieError;
use super::model::Category;
use crate::modules::genre::model::Genre;

pub const KEYWORD_PARAM: &str = "q";
pub const CATEGORY_PARAM: &str = "category";
pub const GENRE_PARAM: &str = "genre";
pub const PAGE_PARAM: &str = "page";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStore {
    pairs: Vec<(String, String)>,
}

impl QueryStore {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key != PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keyword(&self) -> &str {
        self.get(KEYWORD_PARAM).unwrap_or_default()
    }

    /// Missing or empty falls back to `popular`.
    pub fn category(&self) -> Result<Category, MovieError> {
        match self.get(CATEGORY_PARAM) {
            None | Some("") => Ok(Category::default()),
            Some(value) => value.parse(),
        }
    }

    pub fn genre(&self) -> Result<Genre, MovieError> {
        self.get(GENRE_PARAM).unwrap_or_default().parse()
    }

    /// Replaces the whole query with the filter parameters from `state`.
    ///
    /// `q` is dropped when the keyword is empty; `category` and `genre` are
    /// always written. The page number is never persisted.
    pub fn publish(&mut self, state: &FilterState) {
        let mut pairs = Vec::with_capacity(3);
        if !state.keyword.is_empty() {
            pairs.push((KEYWORD_PARAM.to_string(), state.keyword.clone()));
        }
        pairs.push((CATEGORY_PARAM.to_string(), state.category.as_str().to_string()));
        pairs.push((GENRE_PARAM.to_string(), state.genre.as_str().to_string()));
        self.pairs = pairs;
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}
