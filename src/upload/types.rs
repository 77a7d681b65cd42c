//! Upload types for the chunked upload protocol

use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Default chunk size: 2MB
pub const DEFAULT_CHUNK_SIZE: usize = 2 * 1024 * 1024;

/// Maximum file size: 20MB
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

// ============================================================================
// Source Document
// ============================================================================

/// A document selected by the user for upload and search
///
/// Owned read-only by one invocation for its duration; the bytes are the
/// authoritative cache identity, not the file name.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Display name, also the server-side assembly target
    pub file_name: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    /// Create a document from a name and its content
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Size in bytes
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the document has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// Ephemeral record of one chunked upload in flight
///
/// Scoped to a single invocation: created when the upload starts and dropped
/// when the invocation resolves, rejects, or is cancelled.
#[derive(Debug, Clone)]
pub struct UploadSession {
    /// Unique session ID
    pub id: Uuid,

    /// File name being assembled on the server
    pub file_name: String,

    /// Total file size in bytes
    pub file_size: u64,

    /// Chunk size used for this upload
    pub chunk_size: usize,

    /// Total chunks to send
    pub total_chunks: usize,

    /// Number of chunks acknowledged so far
    pub chunks_sent: usize,
}

impl UploadSession {
    /// Create a session for a document and chunk size
    pub fn new(file_name: &str, file_size: u64, chunk_size: usize) -> Self {
        let total_chunks = (file_size as usize).div_ceil(chunk_size);

        Self {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            file_size,
            chunk_size,
            total_chunks,
            chunks_sent: 0,
        }
    }

    /// Record one acknowledged chunk
    pub fn mark_chunk_sent(&mut self) {
        if self.chunks_sent < self.total_chunks {
            self.chunks_sent += 1;
        }
    }

    /// Whether every chunk has been acknowledged
    pub fn is_complete(&self) -> bool {
        self.chunks_sent == self.total_chunks
    }

    /// Fraction of chunks sent, as a percentage
    pub fn progress(&self) -> f64 {
        if self.total_chunks == 0 {
            return 100.0;
        }
        (self.chunks_sent as f64 / self.total_chunks as f64) * 100.0
    }
}
