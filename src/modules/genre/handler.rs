use super::dto::GenreResponse;
use super::service::GenreService;
use crate::common::response::{ApiResponse, ApiSuccess};
use axum::{http::StatusCode, response::IntoResponse};

/// List the genre filter options
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreResponse>>)
    ),
    tag = "Movies"
)]
pub async fn list_genres() -> impl IntoResponse {
    ApiSuccess(
        ApiResponse::success(GenreService::find_all(), "Genres retrieved successfully"),
        StatusCode::OK,
    )
    .into_response()
}
