//! Renders prune progress as the human-readable lines on stdout.

use std::io::Write;

use taskprune_core::{PruneProgress, PruneReporter, TaskDefinitionArn};
use tracing::warn;

use crate::color;

pub struct ConsoleReporter<W: Write> {
    out: W,
    colored: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
            colored: true,
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    #[cfg(test)]
    fn plain(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    fn paint(&self, text: String, paint: fn(&str) -> String) -> String {
        if self.colored { paint(&text) } else { text }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(event = "cli.report_write_failed", error = %e);
        }
    }

    fn list(&mut self, arns: &[TaskDefinitionArn]) {
        for arn in arns {
            self.line(&format!("  {}", arn));
        }
    }
}

impl<W: Write> PruneReporter for ConsoleReporter<W> {
    fn report(&mut self, progress: PruneProgress<'_>) {
        match progress {
            PruneProgress::Considering { candidates } => {
                let count = self.paint(candidates.to_string(), color::count);
                self.line(&format!("Considering {} task definitions for removal", count));
                self.line("");
            }
            PruneProgress::InUse { active } => {
                self.line(
                    "The following task definitions will NOT be removed, because they are in use:",
                );
                self.list(active);
            }
            PruneProgress::AfterActiveFilter { remaining }
            | PruneProgress::AfterRetention { remaining } => {
                let count = self.paint(remaining.to_string(), color::count);
                self.line(&format!(
                    "Which means we are only considering {} task definitions",
                    count
                ));
                self.line("");
            }
            PruneProgress::RetentionPolicy { keep } => {
                self.line(&format!(
                    "Furthermore, we don't remove task definitions among the newest {} per family",
                    keep
                ));
            }
            PruneProgress::RemovalList { arns } => {
                self.line("The full list of definitions to remove is:");
                self.list(arns);
            }
            PruneProgress::DryRun { count } => {
                let text = format!(
                    "You didn't specify --mark-inactive, so we're doing a dry run \
                     ({} would be deregistered)",
                    count
                );
                let text = self.paint(text, color::caution);
                self.line(&text);
            }
            PruneProgress::MarkingInactive { count } => {
                let text = format!(
                    "You specified --mark-inactive, so we're about to start actually \
                     inactivating these {} definitions",
                    count
                );
                let text = self.paint(text, color::caution);
                self.line(&text);
            }
            PruneProgress::Deregistered { arn } => {
                let mark = self.paint("deregistered".to_string(), color::success);
                self.line(&format!("  {} {}", mark, arn));
            }
        }
    }
}
