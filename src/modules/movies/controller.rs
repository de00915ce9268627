//! Filter controller for the movie listing.
//!
//! All state changes go through [`FilterController::apply`], which resets the
//! page when a filter changed and then republishes the query store in the
//! same step. Fetches are tagged with a generation so a response that was
//! superseded by a newer request is dropped instead of rendered.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::error::{MovieError, ProviderError};
use super::model::{Category, MovieSummary, ResultPage};
use super::provider::SearchRequest;
use super::query::{CATEGORY_PARAM, GENRE_PARAM, QueryStore};
use super::view::{self, MoviesView};
use crate::modules::genre::model::Genre;
use crate::modules::genre::service::GenreService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterState {
    pub keyword: String,
    pub category: Category,
    pub genre: Genre,
    pub page: u32,
}

impl FilterState {
    fn from_store(store: &QueryStore) -> Result<Self, MovieError> {
        Ok(Self {
            keyword: store.keyword().to_string(),
            category: store.category()?,
            genre: store.genre()?,
            page: 1,
        })
    }

    fn same_filters(&self, other: &FilterState) -> bool {
        self.keyword == other.keyword && self.category == other.category && self.genre == other.genre
    }

    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            keyword: self.keyword.clone(),
            page: self.page,
            category: self.category,
            genre: self.genre,
        }
    }
}

/// User or navigation event fed to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterEvent {
    /// Pager click with the zero-based index of the chosen page.
    PageClick { selected: u32 },
    /// Filter form change; `name` is `category` or `genre`.
    FilterChange { name: String, value: String },
    /// The URL was changed from outside, e.g. a keyword search.
    UrlChange { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub page_reset: bool,
    pub query: String,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success(ResultPage),
    Error(ProviderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: SearchRequest,
}

#[derive(Debug)]
pub struct FilterController {
    store: QueryStore,
    state: FilterState,
    status: FetchStatus,
    generation: u64,
}

impl FilterController {
    pub fn mount(query: &str) -> Result<Self, MovieError> {
        let mut store = QueryStore::parse(query);
        let state = FilterState::from_store(&store)?;
        store.publish(&state);

        Ok(Self {
            store,
            state,
            status: FetchStatus::Idle,
            generation: 0,
        })
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn query_string(&self) -> String {
        self.store.to_query_string()
    }

    pub fn request(&self) -> SearchRequest {
        self.state.request()
    }

    /// Applies one event. On error the controller is left untouched.
    pub fn apply(&mut self, event: FilterEvent) -> Result<Transition, MovieError> {
        let previous = self.state.clone();

        match event {
            FilterEvent::PageClick { selected } => {
                self.state.page = selected.saturating_add(1);
            }
            FilterEvent::FilterChange { name, value } => {
                match name.as_str() {
                    CATEGORY_PARAM => self.state.category = value.parse()?,
                    GENRE_PARAM => self.state.genre = value.parse()?,
                    other => return Err(MovieError::UnknownFilter(other.to_string())),
                }
                // The form and the keyword search are separate entry points.
                self.state.keyword.clear();
                self.state.page = 1;
            }
            FilterEvent::UrlChange { query } => {
                let store = QueryStore::parse(&query);
                let next = FilterState::from_store(&store)?;
                self.store = store;
                self.state.keyword = next.keyword;
                self.state.category = next.category;
                self.state.genre = next.genre;
            }
        }

        if !self.state.same_filters(&previous) {
            self.state.page = 1;
        }
        self.store.publish(&self.state);

        Ok(Transition {
            page_reset: previous.page != 1 && self.state.page == 1,
            query: self.store.to_query_string(),
            request: self.state.request(),
        })
    }

    /// Starts a fetch for the current state, superseding any pending one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        FetchTicket {
            generation: self.generation,
            request: self.state.request(),
        }
    }

    /// Records the outcome of a fetch. Returns `false` when the ticket is stale
    /// and the outcome was discarded.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ResultPage, ProviderError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale movie page"
            );
            return false;
        }

        self.status = match outcome {
            Ok(page) => FetchStatus::Success(page),
            Err(err) => FetchStatus::Error(err),
        };
        true
    }

    pub fn filtered_movies(&self) -> Vec<MovieSummary> {
        match &self.status {
            FetchStatus::Success(page) => GenreService::filter(self.state.genre, &page.results),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> MoviesView {
        view::render(&self.status, self.filtered_movies(), self.state.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, genre_ids: &[u32]) -> MovieSummary {
        MovieSummary {
            id,
            genre_ids: genre_ids.to_vec(),
            ..Default::default()
        }
    }

    fn page_of(results: Vec<MovieSummary>, total_pages: u32) -> ResultPage {
        ResultPage {
            page: 1,
            results,
            total_pages,
            total_results: 0,
        }
    }

    fn filter_change(name: &str, value: &str) -> FilterEvent {
        FilterEvent::FilterChange {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn mount_applies_defaults_and_publishes_them() {
        let controller = FilterController::mount("").unwrap();
        assert_eq!(
            controller.state(),
            &FilterState {
                keyword: String::new(),
                category: Category::Popular,
                genre: Genre::All,
                page: 1,
            }
        );
        assert_eq!(controller.query_string(), "category=popular&genre=");
        assert_eq!(controller.status(), &FetchStatus::Idle);
    }

    #[test]
    fn mount_reads_filters_from_the_url() {
        let controller = FilterController::mount("?q=matrix&category=toprated&genre=action").unwrap();
        let state = controller.state();
        assert_eq!(state.keyword, "matrix");
        assert_eq!(state.category, Category::TopRated);
        assert_eq!(state.genre, Genre::Action);
    }

    #[test]
    fn mount_rejects_unknown_genre() {
        let err = FilterController::mount("genre=western").unwrap_err();
        assert_eq!(err, MovieError::UnknownGenre("western".to_string()));
    }

    #[test]
    fn page_click_requests_the_one_based_page() {
        let mut controller = FilterController::mount("category=upcoming").unwrap();
        let transition = controller.apply(FilterEvent::PageClick { selected: 2 }).unwrap();

        assert_eq!(transition.request.page, 3);
        assert!(!transition.page_reset);
        assert_eq!(transition.query, "category=upcoming&genre=");
    }

    #[test]
    fn every_filter_change_resets_the_page() {
        for (name, value) in [
            ("category", "nowplaying"),
            ("category", "popular"),
            ("genre", "drama"),
            ("genre", ""),
        ] {
            let mut controller = FilterController::mount("category=popular").unwrap();
            controller.apply(FilterEvent::PageClick { selected: 6 }).unwrap();
            let transition = controller.apply(filter_change(name, value)).unwrap();

            assert_eq!(controller.state().page, 1, "{name}={value}");
            assert!(transition.page_reset);
        }
    }

    #[test]
    fn filter_change_drops_the_keyword_from_the_url() {
        let mut controller = FilterController::mount("q=alien&lang=ko&category=popular").unwrap();
        let transition = controller.apply(filter_change("genre", "action")).unwrap();

        assert_eq!(transition.query, "category=popular&genre=action");
        assert_eq!(controller.state().keyword, "");
        assert_eq!(transition.request.keyword, "");
    }

    #[test]
    fn invalid_filter_change_leaves_state_untouched() {
        let mut controller = FilterController::mount("q=alien").unwrap();
        controller.apply(FilterEvent::PageClick { selected: 1 }).unwrap();
        let before = controller.state().clone();
        let query = controller.query_string();

        assert_eq!(
            controller.apply(filter_change("category", "trending")).unwrap_err(),
            MovieError::UnknownCategory("trending".to_string())
        );
        assert_eq!(
            controller.apply(filter_change("year", "1999")).unwrap_err(),
            MovieError::UnknownFilter("year".to_string())
        );
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.query_string(), query);
    }

    #[test]
    fn url_change_with_new_keyword_resets_the_page() {
        let mut controller = FilterController::mount("").unwrap();
        controller.apply(FilterEvent::PageClick { selected: 3 }).unwrap();
        let transition = controller
            .apply(FilterEvent::UrlChange { query: "q=heat".to_string() })
            .unwrap();

        assert!(transition.page_reset);
        assert_eq!(transition.request.page, 1);
        assert_eq!(transition.request.keyword, "heat");
        assert_eq!(transition.query, "q=heat&category=popular&genre=");
    }

    #[test]
    fn url_change_with_same_filters_keeps_the_page() {
        let mut controller = FilterController::mount("genre=drama").unwrap();
        controller.apply(FilterEvent::PageClick { selected: 3 }).unwrap();
        let transition = controller
            .apply(FilterEvent::UrlChange { query: "category=popular&genre=drama".to_string() })
            .unwrap();

        assert!(!transition.page_reset);
        assert_eq!(transition.request.page, 4);
        assert_eq!(controller.state().page, 4);
    }

    #[test]
    fn identical_state_produces_identical_requests() {
        let a = FilterController::mount("q=up&category=toprated&genre=comedy").unwrap();
        let b = FilterController::mount("genre=comedy&category=toprated&q=up").unwrap();
        assert_eq!(a.request(), b.request());
        assert_eq!(a.request(), a.request());
    }

    #[test]
    fn fetch_moves_through_loading_to_success() {
        let mut controller = FilterController::mount("").unwrap();
        let ticket = controller.begin_fetch();
        assert_eq!(controller.status(), &FetchStatus::Loading);

        let page = page_of(vec![movie(1, &[28])], 3);
        assert!(controller.resolve(&ticket, Ok(page.clone())));
        assert_eq!(controller.status(), &FetchStatus::Success(page));
    }

    #[test]
    fn fetch_failure_is_kept_verbatim() {
        let mut controller = FilterController::mount("").unwrap();
        let ticket = controller.begin_fetch();
        let err = ProviderError::Network("Network Error".to_string());

        assert!(controller.resolve(&ticket, Err(err.clone())));
        assert_eq!(controller.status(), &FetchStatus::Error(err));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = FilterController::mount("").unwrap();
        let first = controller.begin_fetch();
        controller.apply(FilterEvent::PageClick { selected: 1 }).unwrap();
        let second = controller.begin_fetch();
        assert_eq!(second.request.page, 2);

        let newer = page_of(vec![movie(2, &[])], 4);
        assert!(controller.resolve(&second, Ok(newer.clone())));
        assert!(!controller.resolve(&first, Ok(page_of(vec![movie(1, &[])], 4))));
        assert_eq!(controller.status(), &FetchStatus::Success(newer));
    }

    #[test]
    fn filtered_movies_apply_the_genre() {
        let mut controller = FilterController::mount("genre=comedy").unwrap();
        assert!(controller.filtered_movies().is_empty());

        let ticket = controller.begin_fetch();
        controller.resolve(
            &ticket,
            Ok(page_of(vec![movie(1, &[35]), movie(2, &[28]), movie(3, &[18, 35])], 2)),
        );
        let ids: Vec<u64> = controller.filtered_movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn view_lists_the_filtered_movies() {
        let mut controller = FilterController::mount("genre=action").unwrap();
        assert_eq!(controller.view(), MoviesView::Loading);

        let ticket = controller.begin_fetch();
        controller.resolve(
            &ticket,
            Ok(page_of(vec![movie(1, &[28]), movie(2, &[35]), movie(3, &[12, 28])], 6)),
        );

        let MoviesView::Listing { movies, notice, pagination } = controller.view() else {
            panic!("expected a listing");
        };
        let listed: Vec<u64> = movies.iter().map(|card| card.movie.id).collect();
        let filtered: Vec<u64> = controller.filtered_movies().iter().map(|m| m.id).collect();
        assert_eq!(listed, filtered);
        assert_eq!(listed, vec![1, 3]);
        assert_eq!(notice, None);
        assert_eq!(pagination.unwrap().total_pages, 6);
    }
}
