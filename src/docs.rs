use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movies::handler::list_movies,
        crate::modules::movies::handler::handle_event,
        crate::modules::movies::handler::list_categories,
        crate::modules::movies::handler::get_movie,
        crate::modules::genre::handler::list_genres,
    ),
    components(
        schemas(
            crate::modules::movies::dto::MovieEventRequest,
            crate::modules::movies::dto::MoviesPageResponse,
            crate::modules::movies::dto::CategoryResponse,
            crate::modules::movies::controller::FilterEvent,
            crate::modules::movies::controller::FilterState,
            crate::modules::movies::view::MoviesView,
            crate::modules::movies::view::Pagination,
            crate::modules::movies::view::PageItem,
            crate::modules::movies::model::MovieDetail,
            crate::modules::genre::dto::GenreResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie listing, filters and details")
    )
)]
pub struct ApiDoc;
