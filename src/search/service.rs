//! Search service
//!
//! Top-level sequencing for one search request: fingerprint the document,
//! consult the shared result cache, otherwise run the chunked upload, animate
//! the analysis phase, invoke the remote search, and populate the cache.
//! Cancellation is honored at every suspension point along the way.

use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::config::ServiceConfig;
use crate::error::{PipelineError, Result};
use crate::upload::{compute_fingerprint, SourceDocument, UploadClient};

use super::cache::{cache_key, ResultCache};
use super::progress::{
    PacingStrategy, ProgressCallback, ProgressEstimator, ProgressReporter, RandomPacing,
    UPLOAD_PHASE_CEILING, UPLOAD_REPORT_MIN_DELTA,
};
use super::types::SearchResult;

/// Factory producing one pacing strategy per invocation
type PacingFactory = dyn Fn() -> Box<dyn PacingStrategy> + Send + Sync;

/// Orchestrates upload and search against the OCR/search service
///
/// Cheaply cloneable; clones share the same HTTP client and result cache, so
/// concurrent invocations observe each other's cached results. Each
/// invocation carries its own cancellation token and upload session.
#[derive(Clone)]
pub struct SearchService {
    inner: Arc<SearchServiceInner>,
}

struct SearchServiceInner {
    config: ServiceConfig,
    http: reqwest::Client,
    uploader: UploadClient,
    cache: ResultCache,
    pacing: Box<PacingFactory>,
}

impl SearchService {
    /// Create a service with its own cache sized from the configuration
    pub fn new(config: ServiceConfig) -> Self {
        let cache = ResultCache::with_capacity(config.cache_capacity);
        Self::with_cache(config, cache)
    }

    /// Create a service over an externally owned cache
    ///
    /// Lets several services (or tests) share or replace the store.
    pub fn with_cache(config: ServiceConfig, cache: ResultCache) -> Self {
        let http = reqwest::Client::new();
        let uploader = UploadClient::new(http.clone(), &config.base_url, config.chunk_size);

        Self {
            inner: Arc::new(SearchServiceInner {
                config,
                http,
                uploader,
                cache,
                pacing: Box::new(|| Box::new(RandomPacing)),
            }),
        }
    }

    /// Replace the analysis-phase pacing strategy
    ///
    /// The factory runs once per invocation, so strategies may keep per-run
    /// state. Tests use this to make the animation deterministic.
    pub fn with_pacing<F>(self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn PacingStrategy> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(SearchServiceInner {
                config: self.inner.config.clone(),
                http: self.inner.http.clone(),
                uploader: self.inner.uploader.clone(),
                cache: self.inner.cache.clone(),
                pacing: Box::new(factory),
            }),
        }
    }

    /// The shared result cache
    pub fn cache(&self) -> &ResultCache {
        &self.inner.cache
    }

    /// Forget every cached result
    pub async fn clear_cache(&self) {
        self.inner.cache.clear().await;
    }

    /// Run one upload-and-search request
    ///
    /// Progress values are strictly increasing per invocation: the upload
    /// occupies [0, 80], the analysis animation (80, 99], and 100 is
    /// reported exactly once when the result is available. A cache hit
    /// reports 100 immediately and performs no network activity at all.
    pub async fn perform_search(
        &self,
        document: &SourceDocument,
        query: &str,
        token: &CancellationToken,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<SearchResult> {
        let mut reporter = ProgressReporter::new(progress);

        self.validate(document, query)?;

        let fingerprint = compute_fingerprint(&document.bytes);
        let key = cache_key(&fingerprint, query);

        if let Some(cached) = self.inner.cache.get(&key).await {
            tracing::debug!(
                file_name = %document.file_name,
                query = %query,
                "Result cache hit, skipping upload and search"
            );
            reporter.report(100);
            return Ok(cached);
        }

        self.inner
            .uploader
            .upload(document, token, &mut |sent, total| {
                let fraction = sent as f64 / total as f64;
                let value = (fraction * f64::from(UPLOAD_PHASE_CEILING)).round() as u8;
                reporter.report_throttled(value, UPLOAD_REPORT_MIN_DELTA);
            })
            .await?;

        let mut estimator = ProgressEstimator::new((self.inner.pacing)());
        estimator.run(token, &mut reporter).await?;

        if token.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        let result = self.run_search(&document.file_name, query).await?;

        self.inner.cache.put(key, result.clone()).await;
        reporter.report(100);

        tracing::info!(
            file_name = %document.file_name,
            query = %query,
            total_matches = result.total_matches,
            pages_with_matches = result.pages_with_matches,
            "Search complete"
        );

        Ok(result)
    }

    /// Reject bad input before any network activity
    fn validate(&self, document: &SourceDocument, query: &str) -> Result<()> {
        if document.is_empty() {
            return Err(PipelineError::Validation(
                "no document content to search".to_string(),
            ));
        }
        if query.trim().is_empty() {
            return Err(PipelineError::Validation(
                "search text must not be empty".to_string(),
            ));
        }
        if document.len() > self.inner.config.max_file_size {
            return Err(PipelineError::Validation(format!(
                "file too large: {} bytes (max: {})",
                document.len(),
                self.inner.config.max_file_size
            )));
        }
        Ok(())
    }

    /// POST `/search` for a previously uploaded file
    async fn run_search(&self, file_name: &str, query: &str) -> Result<SearchResult> {
        let form = reqwest::multipart::Form::new()
            .text("fileName", file_name.to_string())
            .text("search_text", query.to_string());

        let response = self
            .inner
            .http
            .post(format!("{}/search", self.inner.config.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| PipelineError::Search(e.to_string()))?;

        let status = response.status();
        let result: SearchResult = response
            .json()
            .await
            .map_err(|e| PipelineError::Search(format!("malformed response: {e}")))?;

        if !status.is_success() || !result.success {
            let message = result
                .error
                .unwrap_or_else(|| format!("search failed ({status})"));
            return Err(PipelineError::Search(message));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SearchService {
        SearchService::new(ServiceConfig::default())
    }

    #[tokio::test]
    async fn test_rejects_empty_document() {
        let document = SourceDocument::new("scan.pdf", Vec::new());
        let token = CancellationToken::new();

        let err = service()
            .perform_search(&document, "alpha", &token, None)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejects_blank_query() {
        let document = SourceDocument::new("scan.pdf", vec![1, 2, 3]);
        let token = CancellationToken::new();

        let err = service()
            .perform_search(&document, "   ", &token, None)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejects_oversized_document() {
        let config = ServiceConfig {
            max_file_size: 16,
            ..ServiceConfig::default()
        };
        let service = SearchService::new(config);
        let document = SourceDocument::new("scan.pdf", vec![0u8; 17]);
        let token = CancellationToken::new();

        let err = service
            .perform_search(&document, "alpha", &token, None)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_upload() {
        let document = SourceDocument::new("scan.pdf", vec![1, 2, 3]);
        let token = CancellationToken::new();
        token.cancel();

        let err = service()
            .perform_search(&document, "alpha", &token, None)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
    }
}
