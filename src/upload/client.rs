//! Upload client
//!
//! Sends a document to the backend as sequential multipart chunks, then asks
//! the server to reassemble it. Also owns content fingerprinting, which the
//! orchestrator uses as the cache identity for the document bytes.

use sha2::{Digest, Sha256};

use crate::cancel::CancellationToken;
use crate::error::{PipelineError, Result};

use super::types::{SourceDocument, UploadSession};

// ============================================================================
// Upload Client
// ============================================================================

/// Client for the chunked upload endpoints
#[derive(Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    base_url: String,
    chunk_size: usize,
}

impl UploadClient {
    /// Create a client against a base URL
    pub fn new(http: reqwest::Client, base_url: &str, chunk_size: usize) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Upload a document chunk by chunk, then finalize
    ///
    /// `on_chunk` is invoked after each acknowledged chunk with
    /// `(chunks_sent, total_chunks)`. The token is checked before every
    /// chunk send and before the finalize request; a set flag aborts with
    /// no further network activity.
    pub async fn upload(
        &self,
        document: &SourceDocument,
        token: &CancellationToken,
        on_chunk: &mut (dyn FnMut(usize, usize) + Send),
    ) -> Result<UploadSession> {
        let mut session = UploadSession::new(&document.file_name, document.len(), self.chunk_size);

        tracing::debug!(
            session_id = %session.id,
            file_name = %session.file_name,
            file_size = session.file_size,
            chunks = session.total_chunks,
            "Starting chunked upload"
        );

        for (index, chunk) in document.bytes.chunks(self.chunk_size).enumerate() {
            if token.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            self.send_chunk(document, index, session.total_chunks, chunk)
                .await?;
            session.mark_chunk_sent();
            on_chunk(session.chunks_sent, session.total_chunks);
        }

        if token.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        self.finalize(&document.file_name).await?;

        tracing::info!(
            session_id = %session.id,
            file_name = %session.file_name,
            chunks = session.total_chunks,
            "Upload complete"
        );

        Ok(session)
    }

    /// POST one chunk to `/upload-chunk`
    async fn send_chunk(
        &self,
        document: &SourceDocument,
        index: usize,
        total: usize,
        chunk: &[u8],
    ) -> Result<()> {
        let part = reqwest::multipart::Part::bytes(chunk.to_vec())
            .file_name(document.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("chunk", part)
            .text("index", index.to_string())
            .text("total", total.to_string())
            .text("fileName", document.file_name.clone());

        let response = self
            .http
            .post(format!("{}/upload-chunk", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| PipelineError::Upload(format!("failed to upload chunk {index}: {e}")))?;

        if !response.status().is_success() {
            return Err(PipelineError::Upload(format!(
                "failed to upload chunk {index} ({})",
                response.status()
            )));
        }

        Ok(())
    }

    /// POST `/upload-complete`, asking the server to reassemble the file
    async fn finalize(&self, file_name: &str) -> Result<()> {
        let form = reqwest::multipart::Form::new().text("fileName", file_name.to_string());

        let response = self
            .http
            .post(format!("{}/upload-complete", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| PipelineError::Upload(format!("failed to finalize upload: {e}")))?;

        if !response.status().is_success() {
            return Err(PipelineError::Upload(format!(
                "failed to finalize upload ({})",
                response.status()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Fingerprinting
// ============================================================================

/// SHA-256 fingerprint of document content, as lowercase hex
pub fn compute_fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Verify a fingerprint matches data
pub fn verify_fingerprint(data: &[u8], expected: &str) -> bool {
    compute_fingerprint(data) == expected
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_fingerprint() {
        let data = b"Hello, World!";
        let fingerprint = compute_fingerprint(data);
        assert_eq!(fingerprint.len(), 64); // SHA-256 = 32 bytes = 64 hex chars
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let data = b"scanned page content";
        assert_eq!(compute_fingerprint(data), compute_fingerprint(data));
    }

    #[test]
    fn test_fingerprint_differs_per_content() {
        let a = compute_fingerprint(b"page one");
        let b = compute_fingerprint(b"page two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_fingerprint() {
        let data = b"content";
        let fingerprint = compute_fingerprint(data);
        assert!(verify_fingerprint(data, &fingerprint));
        assert!(!verify_fingerprint(b"other", &fingerprint));
    }
}
