//! Service configuration
//!
//! Loaded from environment variables with sensible defaults, so the library
//! works out of the box against a local backend.

use crate::search::DEFAULT_CACHE_CAPACITY;
use crate::upload::{DEFAULT_CHUNK_SIZE, MAX_FILE_SIZE};

/// Default backend base URL (the OCR/search service)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the search pipeline
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the OCR/search service
    pub base_url: String,
    /// Chunk size for the upload protocol, in bytes
    pub chunk_size: usize,
    /// Maximum accepted document size, in bytes
    pub max_file_size: u64,
    /// Result cache capacity, in entries
    pub cache_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_file_size: MAX_FILE_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment
    ///
    /// Reads `HIGHLIGHTER_API_BASE_URL`, `HIGHLIGHTER_CHUNK_SIZE`,
    /// `HIGHLIGHTER_MAX_FILE_SIZE` and `HIGHLIGHTER_CACHE_CAPACITY`.
    /// Unset variables fall back to defaults; unparseable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = std::env::var("HIGHLIGHTER_API_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(chunk_size) = parse_env("HIGHLIGHTER_CHUNK_SIZE") {
            config.chunk_size = chunk_size;
        }
        if let Some(max_file_size) = parse_env("HIGHLIGHTER_MAX_FILE_SIZE") {
            config.max_file_size = max_file_size;
        }
        if let Some(capacity) = parse_env("HIGHLIGHTER_CACHE_CAPACITY") {
            config.cache_capacity = capacity;
        }

        config
    }

    /// Override the base URL (trailing slashes are stripped)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the upload chunk size (minimum 1 byte)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable env var");
            None
        }
    }
}
