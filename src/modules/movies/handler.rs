use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::movies::dto::*;
use crate::modules::movies::model::MovieDetail;
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, RawQuery, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

/// Browse movies using the page's URL query
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(BrowseParams),
    responses(
        (status = 200, description = "Movie listing view", body = ApiResponse<MoviesPageResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    params: Result<Query<BrowseParams>, QueryRejection>,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    if let Err(e) = params.validate() {
        return ApiError::from(e).into_response();
    }

    let query = raw.unwrap_or_default();
    match MovieService::browse(state, &query, params.page).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Apply a page click, filter change or URL change
#[utoipa::path(
    post,
    path = "/api/v1/movies/events",
    request_body = MovieEventRequest,
    responses(
        (status = 200, description = "Updated movie listing view", body = ApiResponse<MoviesPageResponse>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Movies"
)]
pub async fn handle_event(
    State(state): State<AppState>,
    payload: Result<Json<MovieEventRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };
    if let Err(e) = payload.validate() {
        return ApiError::from(e).into_response();
    }

    match MovieService::handle_event(state, payload).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// List the category filter options
#[utoipa::path(
    get,
    path = "/api/v1/movies/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponse>>)
    ),
    tag = "Movies"
)]
pub async fn list_categories() -> impl IntoResponse {
    ApiSuccess(
        ApiResponse::success(MovieService::categories(), "Categories retrieved successfully"),
        StatusCode::OK,
    )
    .into_response()
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = u64, Path, description = "TMDB movie ID")
    ),
    responses(
        (status = 200, description = "Get Movie", body = ApiResponse<MovieDetail>),
        (status = 404, description = "Movie Not Found"),
        (status = 502, description = "Movie provider failure")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    match MovieService::get_movie(state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
