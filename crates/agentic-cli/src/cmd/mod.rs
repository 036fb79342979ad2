pub mod init;
pub mod install;
pub mod status;

use crate::output::{print_json, print_rule, print_table};
use crate::reporter::ConsoleReporter;
use agentic_core::{
    config::{Config, SourceKind},
    install::{self as installer, DirOutcome, InstallOutcome, InstallSummary},
    manifest::Manifest,
    paths,
    types::{Category, OverwritePolicy},
};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Shared flags for `init` and `install`
// ---------------------------------------------------------------------------

const COMMANDS_ONLY: &[Category] = &[Category::Commands, Category::Agents];
const TEMPLATES_ONLY: &[Category] = &[Category::Templates];

#[derive(Args, Debug, Clone, Default)]
pub struct InstallArgs {
    /// Skip existing files (default: overwrite with latest)
    #[arg(long, conflicts_with = "force")]
    pub skip_existing: bool,

    /// Overwrite existing files with the latest versions
    #[arg(long)]
    pub force: bool,

    /// Install only commands and agents
    #[arg(long, conflicts_with = "templates_only")]
    pub commands_only: bool,

    /// Install only templates
    #[arg(long)]
    pub templates_only: bool,

    /// Download files from the remote repository instead of the bundled copies
    #[arg(long)]
    pub remote: bool,

    /// Base URL used with the remote source
    #[arg(long, env = "AGENTIC_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Timeout for each remote download
    #[arg(long, env = "AGENTIC_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exit non-zero if any file fails to install
    #[arg(long)]
    pub strict: bool,
}

impl InstallArgs {
    /// Layer the flags over the project's config file.
    fn apply(&self, mut config: Config) -> Config {
        if self.remote {
            config.source = SourceKind::Remote;
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        if self.skip_existing {
            config.skip_existing = true;
        } else if self.force {
            config.skip_existing = false;
        }
        config
    }

    fn categories(&self) -> Option<&'static [Category]> {
        if self.commands_only {
            Some(COMMANDS_ONLY)
        } else if self.templates_only {
            Some(TEMPLATES_ONLY)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Install run shared by `init` and `install`
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct InstallReport {
    pub target: String,
    pub source: String,
    pub policy: OverwritePolicy,
    pub summary: InstallSummary,
    pub outcomes: Vec<InstallOutcome>,
    pub directories: Vec<DirOutcome>,
}

/// Install the manifest into `<project_root>/.claude` and scaffold the
/// workspace directories. Per-file output goes through the console reporter.
pub fn run_install(
    project_root: &Path,
    args: &InstallArgs,
    json: bool,
) -> anyhow::Result<InstallReport> {
    let config = args.apply(Config::load(project_root).context("failed to load config")?);
    for warning in config.validate() {
        eprintln!("warning: {}", warning.message);
    }
    let policy = OverwritePolicy::from_skip_existing(config.skip_existing);
    let source = config.open_source().context("failed to open content source")?;

    let mut manifest = Manifest::bundled().context("failed to load bundled manifest")?;
    if let Some(categories) = args.categories() {
        manifest = manifest
            .restricted_to(categories)
            .context("no manifest entries for the selected components")?;
    }

    let target = paths::claude_dir(project_root);
    let mut reporter = ConsoleReporter::new(json);

    if !json {
        print_rule("Installing Components");
        println!("  source: {}", source.describe());
        println!("  policy: {policy}");
    }
    let outcomes = installer::install(
        &manifest,
        &target,
        policy,
        source.as_ref(),
        &mut reporter,
    )
    .with_context(|| format!("failed to install into {}", target.display()))?;

    if !json {
        println!();
        print_rule("Project Structure Setup");
    }
    let directories =
        installer::ensure_workspace_dirs(&target, &manifest.categories(), &mut reporter)
            .context("failed to create project directories")?;

    Ok(InstallReport {
        target: target.display().to_string(),
        source: source.describe(),
        policy,
        summary: InstallSummary::from_outcomes(&outcomes),
        outcomes,
        directories,
    })
}

/// Print the run summary (table or JSON) and decide the exit status.
pub fn finish(report: &InstallReport, args: &InstallArgs, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(report)?;
    } else {
        println!();
        let rows = Category::all()
            .iter()
            .filter(|c| report.summary.by_category.contains_key(*c))
            .map(|c| {
                let counts = report.summary.category(*c);
                vec![
                    c.label().to_string(),
                    counts.installed().to_string(),
                    counts.skipped.to_string(),
                    counts.failed.to_string(),
                ]
            })
            .collect();
        print_table(&["Component", "Installed", "Skipped", "Failed"], rows);
    }

    let totals = report.summary.totals;
    if report.summary.source_unusable() {
        anyhow::bail!(
            "content source {} is unusable: all {} fetch(es) failed",
            report.source,
            report.summary.fetch_failures
        );
    }
    if args.strict && report.summary.has_failures() {
        anyhow::bail!("{} file(s) failed to install", totals.failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = InstallArgs {
            remote: true,
            base_url: Some("http://mirror.local/res".to_string()),
            timeout: Some(5),
            skip_existing: true,
            ..InstallArgs::default()
        };
        let cfg = args.apply(Config::default());
        assert_eq!(cfg.source, SourceKind::Remote);
        assert_eq!(cfg.base_url, "http://mirror.local/res");
        assert_eq!(cfg.timeout_secs, 5);
        assert!(cfg.skip_existing);
    }

    #[test]
    fn force_beats_config_skip_existing() {
        let args = InstallArgs {
            force: true,
            ..InstallArgs::default()
        };
        let cfg = args.apply(Config {
            skip_existing: true,
            ..Config::default()
        });
        assert!(!cfg.skip_existing);
    }

    #[test]
    fn category_filters() {
        let commands = InstallArgs {
            commands_only: true,
            ..InstallArgs::default()
        };
        assert_eq!(commands.categories(), Some(COMMANDS_ONLY));
        assert_eq!(InstallArgs::default().categories(), None);
    }
}
