use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use protstr::engine::progress::{Pass, Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;
const TOTAL_PASSES: u64 = 4;

/// Renders conversion progress on stderr: one step per engine pass.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(TOTAL_PASSES), target)
            .with_style(Self::style())
            .with_message("Initializing...");
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PassStart { pass, residues } => {
                if pb.position() == 0 {
                    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                }
                pb.set_message(format!("{} ({} residues)", pass, residues));
            }
            Progress::PassFinish { pass } => {
                pb.inc(1);
                if pass == Pass::Combine || pb.position() >= TOTAL_PASSES {
                    pb.disable_steady_tick();
                    pb.finish_with_message("✓ Done");
                }
            }
            Progress::Message(msg) => {
                if !pb.is_finished() {
                    pb.println(format!("  {}", msg));
                } else {
                    pb.set_message(msg);
                }
            }
        })
    }

    /// Stops the bar where it is, for runs that end in an error.
    pub fn abandon(&self) {
        self.pb.disable_steady_tick();
        self.pb.abandon_with_message("✗ Failed");
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
