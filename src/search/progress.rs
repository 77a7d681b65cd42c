//! Progress reporting and the analysis-phase estimator
//!
//! The caller sees one progress scale per invocation: the chunked upload maps
//! linearly onto [0, 80], the analysis phase is animated through (80, 99],
//! and 100 is emitted exactly once, when the real result is in hand.
//!
//! The remote analysis exposes no incremental progress at all, so the
//! estimator fabricates a plausible signal: bounded random steps with
//! randomized pauses toward a target safely below 100. Pacing is an
//! injectable strategy so tests can substitute a deterministic sequence.

use std::time::Duration;

use rand::Rng;

use crate::cancel::CancellationToken;
use crate::error::{PipelineError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Upper bound of the upload phase on the caller-visible scale
pub const UPLOAD_PHASE_CEILING: u8 = 80;

/// Where the analysis-phase animation starts
pub const ANALYSIS_PHASE_FLOOR: u8 = 81;

/// Lowest admissible estimator target
pub const ANALYSIS_TARGET_MIN: u8 = 92;

/// Highest admissible estimator target; 100 is reserved for real completion
pub const ANALYSIS_TARGET_MAX: u8 = 99;

/// Largest single estimator step
const ANALYSIS_STEP_MAX: u8 = 3;

/// Bounds of the randomized pause between estimator steps, in milliseconds
const ANALYSIS_DELAY_MS: std::ops::Range<u64> = 200..500;

/// Minimum advance before a chunk-phase report is forwarded
pub(crate) const UPLOAD_REPORT_MIN_DELTA: u8 = 2;

// ============================================================================
// Progress Reporter
// ============================================================================

/// Caller-supplied progress observer, fed values in 0..=100
pub type ProgressCallback<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// Monotonic gate in front of the caller's progress callback
///
/// Forwards a value only when it advances past everything already reported,
/// so the caller-visible sequence is strictly increasing for the life of one
/// invocation regardless of which phase produced the value.
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    last: Option<u8>,
}

impl<'a> ProgressReporter<'a> {
    /// Wrap an optional callback
    pub fn new(callback: Option<ProgressCallback<'a>>) -> Self {
        Self {
            callback,
            last: None,
        }
    }

    /// Forward `value` if it advances the sequence
    pub fn report(&mut self, value: u8) {
        self.emit(value, 1);
    }

    /// Forward `value` only on an advance of at least `min_delta`
    pub fn report_throttled(&mut self, value: u8, min_delta: u8) {
        self.emit(value, min_delta.max(1));
    }

    /// The most recently forwarded value
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    fn emit(&mut self, value: u8, min_delta: u8) {
        let Some(callback) = self.callback else {
            return;
        };
        let advanced = match self.last {
            None => true,
            Some(last) => u16::from(value) >= u16::from(last) + u16::from(min_delta),
        };
        if advanced {
            self.last = Some(value);
            callback(value);
        }
    }
}

// ============================================================================
// Pacing Strategy
// ============================================================================

/// Source of estimator targets, step sizes and pauses
pub trait PacingStrategy: Send {
    /// Final value the animation should settle at
    fn target(&mut self) -> u8;

    /// Size of the next advance
    fn step(&mut self) -> u8;

    /// Pause before the next advance
    fn delay(&mut self) -> Duration;
}

/// Default pacing: jittered steps toward a random target
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPacing;

impl PacingStrategy for RandomPacing {
    fn target(&mut self) -> u8 {
        rand::thread_rng().gen_range(ANALYSIS_TARGET_MIN..=ANALYSIS_TARGET_MAX)
    }

    fn step(&mut self) -> u8 {
        rand::thread_rng().gen_range(1..=ANALYSIS_STEP_MAX)
    }

    fn delay(&mut self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(ANALYSIS_DELAY_MS))
    }
}

/// Deterministic pacing for tests and previews
#[derive(Debug, Clone, Copy)]
pub struct FixedPacing {
    pub target: u8,
    pub step: u8,
    pub delay: Duration,
}

impl Default for FixedPacing {
    fn default() -> Self {
        Self {
            target: ANALYSIS_TARGET_MIN,
            step: ANALYSIS_STEP_MAX,
            delay: Duration::ZERO,
        }
    }
}

impl PacingStrategy for FixedPacing {
    fn target(&mut self) -> u8 {
        self.target
    }

    fn step(&mut self) -> u8 {
        self.step
    }

    fn delay(&mut self) -> Duration {
        self.delay
    }
}

// ============================================================================
// Progress Estimator
// ============================================================================

/// Animates the analysis phase while the search request is in flight
pub struct ProgressEstimator {
    pacing: Box<dyn PacingStrategy>,
}

impl ProgressEstimator {
    /// Create an estimator over a pacing strategy
    pub fn new(pacing: Box<dyn PacingStrategy>) -> Self {
        Self { pacing }
    }

    /// Step the reported value from 81 up to the pacing target
    ///
    /// The token is checked before every pause; once it is set, the
    /// estimator returns `Cancelled` without touching the reporter again.
    /// The target never reaches 100, which is reserved for the moment the
    /// real result arrives.
    pub async fn run(
        &mut self,
        token: &CancellationToken,
        reporter: &mut ProgressReporter<'_>,
    ) -> Result<()> {
        let target = self
            .pacing
            .target()
            .clamp(ANALYSIS_PHASE_FLOOR, ANALYSIS_TARGET_MAX);
        let mut progress = ANALYSIS_PHASE_FLOOR;

        while progress < target {
            if token.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            let step = self.pacing.step().max(1);
            progress = progress.saturating_add(step).min(target);
            reporter.report(progress);

            if progress < target {
                tokio::time::sleep(self.pacing.delay()).await;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
