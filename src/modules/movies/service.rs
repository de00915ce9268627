use super::controller::{FilterController, FilterEvent};
use super::dto::{CategoryResponse, MovieEventRequest, MoviesPageResponse};
use super::error::MovieError;
use super::model::{Category, MovieDetail};
use crate::state::AppState;
use tracing::{info, warn};

pub struct MovieService;

impl MovieService {
    /// Mounts a controller on `query`, moves it to `page` and fetches.
    pub async fn browse(state: AppState, query: &str, page: u32) -> Result<MoviesPageResponse, MovieError> {
        let controller = Self::restore(query, page)?;
        Ok(Self::fetch(state, controller).await)
    }

    pub async fn handle_event(state: AppState, req: MovieEventRequest) -> Result<MoviesPageResponse, MovieError> {
        let mut controller = Self::restore(&req.query, req.page)?;

        let transition = controller.apply(req.event)?;
        if transition.page_reset {
            info!("Filters changed, back to page 1 ({})", transition.query);
        }

        Ok(Self::fetch(state, controller).await)
    }

    pub async fn get_movie(state: AppState, id: u64) -> Result<MovieDetail, MovieError> {
        Ok(state.provider.movie_detail(id).await?)
    }

    pub fn categories() -> Vec<CategoryResponse> {
        Category::ALL.into_iter().map(CategoryResponse::from).collect()
    }

    fn restore(query: &str, page: u32) -> Result<FilterController, MovieError> {
        let mut controller = FilterController::mount(query)?;
        if page > 1 {
            controller.apply(FilterEvent::PageClick { selected: page - 1 })?;
        }
        Ok(controller)
    }

    async fn fetch(state: AppState, mut controller: FilterController) -> MoviesPageResponse {
        let ticket = controller.begin_fetch();
        info!(
            keyword = %ticket.request.keyword,
            category = %ticket.request.category,
            genre = %ticket.request.genre,
            page = ticket.request.page,
            "Fetching movies"
        );

        let outcome = state.provider.fetch_page(&ticket.request).await;
        if let Err(e) = &outcome {
            warn!("Movie provider failed: {}", e);
        }
        controller.resolve(&ticket, outcome);

        MoviesPageResponse {
            query: controller.query_string(),
            filters: controller.state().clone(),
            request: ticket.request,
            view: controller.view(),
        }
    }
}
