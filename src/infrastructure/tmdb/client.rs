use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::settings::AppConfig;
use crate::modules::movies::error::ProviderError;
use crate::modules::movies::model::{MovieDetail, ResultPage};
use crate::modules::movies::provider::{MovieProvider, SearchRequest};

#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    status_message: Option<String>,
}

/// TMDB-backed movie provider.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.tmdb_timeout_secs))
            .build()?;

        info!("✅ TMDB client ready ({})", config.tmdb_base_url);
        Ok(Self {
            client,
            api_key: config.tmdb_api_key.clone(),
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            language: config.tmdb_language.clone(),
        })
    }

    /// A keyword switches from the category list to the search endpoint.
    pub fn listing_path(request: &SearchRequest) -> String {
        if request.keyword.is_empty() {
            format!("/movie/{}", request.category.tmdb_list())
        } else {
            "/search/movie".to_string()
        }
    }

    pub fn listing_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
            ("page", request.page.to_string()),
        ];
        if !request.keyword.is_empty() {
            params.push(("query", request.keyword.clone()));
        }
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !status.is_success() {
            let message = response
                .json::<TmdbErrorBody>()
                .await
                .ok()
                .and_then(|body| body.status_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<ResultPage, ProviderError> {
        let path = Self::listing_path(request);
        let params = self.listing_params(request);
        self.get_json(&path, &params).await
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, ProviderError> {
        let params = [
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ];
        self.get_json(&format!("/movie/{}", id), &params).await
    }
}
