use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use super::controller::FetchStatus;
use super::model::MovieSummary;

pub const NO_MOVIES_FOUND: &str = "No movies found!";

/// Pages shown around the active one.
pub const PAGE_RANGE_DISPLAYED: u32 = 3;
/// Pages always shown at each end of the pager.
pub const MARGIN_PAGES_DISPLAYED: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MoviesView {
    Loading,
    Error {
        message: String,
    },
    Listing {
        movies: Vec<MovieCard>,
        notice: Option<String>,
        pagination: Option<Pagination>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieCard {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub href: String,
}

impl From<MovieSummary> for MovieCard {
    fn from(movie: MovieSummary) -> Self {
        let href = format!("/movies/{}", movie.id);
        Self { movie, href }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub items: Vec<PageItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// `index` is the zero-based value a click sends back.
    Page { index: u32, number: u32, active: bool },
    Break,
}

impl Pagination {
    /// Builds the pager for a one-based `page`. `None` when there are no pages.
    pub fn new(total_pages: u32, page: u32) -> Option<Self> {
        if total_pages == 0 {
            return None;
        }

        let active = page.saturating_sub(1);
        let anchor = active.min(total_pages - 1);

        let mut start = anchor.saturating_sub(PAGE_RANGE_DISPLAYED / 2);
        let mut end = start.saturating_add(PAGE_RANGE_DISPLAYED - 1);
        if end >= total_pages {
            end = total_pages - 1;
            start = end.saturating_sub(PAGE_RANGE_DISPLAYED - 1);
        }

        let mut shown: BTreeSet<u32> = (start..=end).collect();
        shown.extend(0..MARGIN_PAGES_DISPLAYED.min(total_pages));
        shown.extend(total_pages.saturating_sub(MARGIN_PAGES_DISPLAYED)..total_pages);

        let mut items = Vec::with_capacity(shown.len() + 2);
        let mut previous: Option<u32> = None;
        for index in shown {
            if previous.is_some_and(|p| index > p + 1) {
                items.push(PageItem::Break);
            }
            items.push(PageItem::Page {
                index,
                number: index + 1,
                active: index == active,
            });
            previous = Some(index);
        }

        Some(Self {
            total_pages,
            current_page: page,
            has_previous: active > 0,
            has_next: active + 1 < total_pages,
            items,
        })
    }
}

/// Picks exactly one of loading, error or listing for the current fetch.
///
/// `movies` are the genre-filtered results of a successful fetch. The pager
/// follows the provider's page count and is shown whenever the fetched page
/// had results, even if the genre filter removed all of them.
pub fn render(status: &FetchStatus, movies: Vec<MovieSummary>, page: u32) -> MoviesView {
    match status {
        FetchStatus::Idle | FetchStatus::Loading => MoviesView::Loading,
        FetchStatus::Error(err) => MoviesView::Error {
            message: err.to_string(),
        },
        FetchStatus::Success(result) => {
            let movies: Vec<MovieCard> = movies.into_iter().map(MovieCard::from).collect();
            let notice = movies.is_empty().then(|| NO_MOVIES_FOUND.to_string());
            let pagination = if result.results.is_empty() {
                None
            } else {
                Pagination::new(result.total_pages, page)
            };

            MoviesView::Listing {
                movies,
                notice,
                pagination,
            }
        }
    }
}
