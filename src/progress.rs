//! Progress-callback trait for per-stage conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to be told
//! when each pipeline stage starts and when the run is finished. The library
//! itself never prints; the CLI turns these events into its console report.
//!
//! # Example
//!
//! ```rust
//! use wegleitung2md::{ConversionConfig, ConversionProgressCallback, Stage};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     stages: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_stage_start(&self, stage: Stage) {
//!         self.stages.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{stage}");
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { stages: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::output::ConversionStats;
use std::fmt;
use std::sync::Arc;

/// The pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Cleaning,
    Structuring,
    PostProcessing,
    Assembling,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reading => "reading",
            Stage::Cleaning => "cleaning",
            Stage::Structuring => "structuring",
            Stage::PostProcessing => "post-processing",
            Stage::Assembling => "assembling",
            Stage::Writing => "writing",
        };
        f.write_str(name)
    }
}

/// Called by the conversion pipeline as it moves through its stages.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. The trait is `Send + Sync` so a configured
/// [`crate::config::ConversionConfig`] can be shared across threads.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called just before a stage runs. Stages that the active profile
    /// disables (post-processing in the initial profile) are not reported.
    fn on_stage_start(&self, stage: Stage) {
        let _ = stage;
    }

    /// Called once after the whole document has been converted.
    fn on_conversion_complete(&self, stats: &ConversionStats) {
        let _ = stats;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCallback {
        stages: Mutex<Vec<Stage>>,
        completed_lines: Mutex<Option<usize>>,
    }

    impl ConversionProgressCallback for RecordingCallback {
        fn on_stage_start(&self, stage: Stage) {
            self.stages.lock().unwrap().push(stage);
        }

        fn on_conversion_complete(&self, stats: &ConversionStats) {
            *self.completed_lines.lock().unwrap() = Some(stats.output_lines);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_stage_start(Stage::Cleaning);
        cb.on_conversion_complete(&ConversionStats::default());
    }

    #[test]
    fn recording_callback_receives_events() {
        let cb = RecordingCallback::default();
        cb.on_stage_start(Stage::Reading);
        cb.on_stage_start(Stage::Cleaning);
        cb.on_conversion_complete(&ConversionStats {
            output_lines: 7,
            ..ConversionStats::default()
        });

        assert_eq!(
            *cb.stages.lock().unwrap(),
            vec![Stage::Reading, Stage::Cleaning]
        );
        assert_eq!(*cb.completed_lines.lock().unwrap(), Some(7));
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ConversionProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_stage_start(Stage::Writing);
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::PostProcessing.to_string(), "post-processing");
    }
}
