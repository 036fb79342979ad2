use agentic_core::install::{DirOutcome, InstallOutcome, Reporter};
use agentic_core::paths;
use agentic_core::types::InstallAction;

/// Prints one line per installed file and scaffolded directory.
/// Silent in JSON mode, where the caller prints a single document instead.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn entry_finished(&mut self, outcome: &InstallOutcome) {
        if self.quiet {
            return;
        }
        let line = outcome_line(outcome);
        if outcome.action == InstallAction::Failed {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn directory(&mut self, outcome: &DirOutcome) {
        if !self.quiet {
            println!("{}", dir_line(outcome));
        }
    }
}

pub fn outcome_line(outcome: &InstallOutcome) -> String {
    let path = paths::display_path(&outcome.relative_path);
    match (&outcome.action, &outcome.error) {
        (InstallAction::Failed, Some(err)) => {
            format!("  failed:  {path} ({}: {})", err.kind, err.message)
        }
        (InstallAction::Skipped, _) => format!("  skipped: {path} (exists)"),
        (action, _) => format!("  {}: {path}", action.as_str()),
    }
}

pub fn dir_line(outcome: &DirOutcome) -> String {
    let path = paths::display_path(&outcome.path);
    if outcome.created {
        format!("  created: {path}/ ({})", outcome.description)
    } else {
        format!("  exists:  {path}/ ({})", outcome.description)
    }
}
