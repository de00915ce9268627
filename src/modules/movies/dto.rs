use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::controller::{FilterEvent, FilterState};
use super::model::Category;
use super::provider::SearchRequest;
use super::view::MoviesView;

fn first_page() -> u32 {
    1
}

/// Query of `GET /api/v1/movies`. The raw query string is the filter store;
/// this struct only documents and validates it.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrowseParams {
    /// Search keyword
    pub q: Option<String>,
    /// popular | nowplaying | toprated | upcoming
    pub category: Option<String>,
    /// "" | action | comedy | drama
    pub genre: Option<String>,
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[serde(default = "first_page")]
    pub page: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MovieEventRequest {
    /// Current URL query string of the page.
    #[serde(default)]
    pub query: String,
    /// Current one-based page.
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[serde(default = "first_page")]
    pub page: u32,
    pub event: FilterEvent,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoviesPageResponse {
    /// Query string to write back to the URL.
    pub query: String,
    pub filters: FilterState,
    pub request: SearchRequest,
    pub view: MoviesView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub value: Category,
    pub label: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            value: c,
            label: c.label().to_string(),
        }
    }
}
