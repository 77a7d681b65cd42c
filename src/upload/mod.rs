//! Chunked Upload Module
//!
//! Client side of the chunked upload protocol:
//! - SHA-256 content fingerprinting (cache identity)
//! - Fixed-size chunks sent sequentially with index/total bookkeeping
//! - A finalize request instructing the server to reassemble the file
//!
//! Protocol Flow:
//! 1. Client splits the document into 2 MiB chunks
//! 2. Each chunk is POSTed with its 0-based index, the total chunk count,
//!    and the target file name
//! 3. After all chunks succeed, a single finalize request names the file
//!
//! Any chunk failure aborts the whole upload. Retry is the caller's
//! responsibility; partial server-side state is not cleaned up here.

pub mod client;
pub mod types;

pub use client::{compute_fingerprint, verify_fingerprint, UploadClient};
pub use types::{SourceDocument, UploadSession, DEFAULT_CHUNK_SIZE, MAX_FILE_SIZE};
