use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_language: String,
    pub tmdb_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            tmdb_api_key: env::get(EnvKey::TmdbApiKey)?,
            tmdb_base_url: env::get_or(EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL),
            tmdb_language: env::get_or(EnvKey::TmdbLanguage, "en-US"),
            tmdb_timeout_secs: env::get_parsed(EnvKey::TmdbTimeoutSecs, 10),
        })
    }
}
