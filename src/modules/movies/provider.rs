use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::ProviderError;
use super::model::{Category, MovieDetail, ResultPage};
use crate::modules::genre::model::Genre;

/// Parameters of one listing fetch. Equal filter states produce equal requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct SearchRequest {
    pub keyword: String,
    pub page: u32,
    pub category: Category,
    pub genre: Genre,
}

/// Remote source of movie listings.
///
/// Implementations own retries, caching and de-duplication; callers only see
/// the final page or the error.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<ResultPage, ProviderError>;

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, ProviderError>;
}
