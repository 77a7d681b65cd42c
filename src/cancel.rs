//! Cooperative cancellation
//!
//! One token is created per viewer session and handed down every call chain.
//! The collaborator sets it once at teardown; it is never cleared. Every
//! suspension point in the pipeline checks it before doing further work, so
//! an abandoned invocation stops without issuing more network requests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a session owner and its in-flight
/// invocations
///
/// Cloning is cheap; all clones observe the same flag. Independent sessions
/// get independent tokens, so back-to-back searches never cross-contaminate.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a fresh, un-cancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Idempotent; there is no way to un-cancel.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check the flag
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_visible_to_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();

        token.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_tokens_are_independent() {
        let a = CancellationToken::new();
        let b = CancellationToken::new();

        a.cancel();

        assert!(a.is_cancelled());
        assert!(!b.is_cancelled());
    }
}
