//! Progress notification port
//!
//! Defines the interface for reporting progress during a boardroom run.

use boardroom_domain::{Phase, ProviderId};

/// Callback for progress updates during a boardroom run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a round starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called as each provider finishes, in arrival order
    fn on_task_complete(&self, phase: &Phase, provider: &ProviderId, success: bool);

    /// Called when every provider in the round has finished
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _provider: &ProviderId, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
