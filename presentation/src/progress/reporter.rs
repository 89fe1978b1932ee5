//! Progress reporting for boardroom rounds

use boardroom_application::ports::progress::ProgressNotifier;
use boardroom_domain::{Phase, ProviderId};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Reports progress during a boardroom run with progress bars
///
/// Bars draw to stderr so JSON on stdout stays clean.
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.phase_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn task_status(provider: &ProviderId, success: bool) -> String {
        if success {
            format!("{} {}", "v".green(), provider.display_name())
        } else {
            format!("{} {}", "x".red(), provider.display_name())
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name().to_string());
        pb.set_message("Starting...");

        *self.bar() = Some(pb);
    }

    fn on_task_complete(&self, _phase: &Phase, provider: &ProviderId, success: bool) {
        if let Some(pb) = self.bar().as_ref() {
            pb.set_message(Self::task_status(provider, success));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Some(pb) = self.bar().take() {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Used when stderr is not a terminal, where redrawn bars would turn into
/// noise in logs.
pub struct SimpleProgress {
    out: Mutex<Box<dyn Write + Send>>,
}

impl SimpleProgress {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    fn line(&self, text: &str) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // progress output is best-effort
        let _ = writeln!(out, "{}", text);
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        self.line(&format!(
            "{} {} ({} providers)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        ));
    }

    fn on_task_complete(&self, _phase: &Phase, provider: &ProviderId, success: bool) {
        let status = ProgressReporter::task_status(provider, success);
        if success {
            self.line(&format!("  {}", status));
        } else {
            self.line(&format!("  {} (failed)", status));
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        self.line("");
    }
}
