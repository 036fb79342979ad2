//! The idempotent install procedure.
//!
//! [`install`] walks a manifest in order and makes every destination under the
//! target root hold the content source's bytes, subject to the overwrite
//! policy. Per-entry failures are recorded as `Failed` outcomes and never stop
//! the run; only failing to create the target root is fatal.

use crate::error::{AgenticError, Result};
use crate::io;
use crate::manifest::{Manifest, ManifestEntry};
use crate::paths;
use crate::source::ContentSource;
use crate::types::{Category, FailureKind, InstallAction, OverwritePolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Which step of installing an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Fetch,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallFailure {
    pub stage: FailureStage,
    pub kind: FailureKind,
    pub message: String,
}

/// What happened to one manifest entry during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallOutcome {
    pub category: Category,
    pub relative_path: String,
    pub action: InstallAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<InstallFailure>,
}

impl InstallOutcome {
    fn done(entry: &ManifestEntry, action: InstallAction) -> Self {
        Self {
            category: entry.category,
            relative_path: entry.relative_path.clone(),
            action,
            error: None,
        }
    }

    fn failed(
        entry: &ManifestEntry,
        stage: FailureStage,
        kind: FailureKind,
        message: String,
    ) -> Self {
        Self {
            category: entry.category,
            relative_path: entry.relative_path.clone(),
            action: InstallAction::Failed,
            error: Some(InstallFailure {
                stage,
                kind,
                message,
            }),
        }
    }

    fn fetch_failed(&self) -> bool {
        matches!(&self.error, Some(e) if e.stage == FailureStage::Fetch)
    }
}

/// A scaffolded directory under the target root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirOutcome {
    pub path: String,
    pub description: String,
    pub created: bool,
}

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Receives progress from the installer. Presentation lives behind this
/// trait so the install logic never prints.
pub trait Reporter {
    fn entry_started(&mut self, _entry: &ManifestEntry) {}

    fn entry_finished(&mut self, outcome: &InstallOutcome);

    fn directory(&mut self, _outcome: &DirOutcome) {}
}

/// Discards all progress.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn entry_finished(&mut self, _outcome: &InstallOutcome) {}
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ActionCounts {
    fn record(&mut self, action: InstallAction) {
        match action {
            InstallAction::Created => self.created += 1,
            InstallAction::Updated => self.updated += 1,
            InstallAction::Skipped => self.skipped += 1,
            InstallAction::Failed => self.failed += 1,
        }
    }

    /// Entries that now hold the source content.
    pub fn installed(&self) -> usize {
        self.created + self.updated
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.skipped + self.failed
    }
}

/// Aggregate counts for a run, overall and per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallSummary {
    pub totals: ActionCounts,
    pub by_category: BTreeMap<Category, ActionCounts>,
    /// Failed entries whose content could not be fetched. Write failures are
    /// not counted here.
    pub fetch_failures: usize,
}

impl InstallSummary {
    pub fn from_outcomes(outcomes: &[InstallOutcome]) -> Self {
        let mut summary = Self::default();
        for o in outcomes {
            summary.totals.record(o.action);
            summary.by_category.entry(o.category).or_default().record(o.action);
            if o.fetch_failed() {
                summary.fetch_failures += 1;
            }
        }
        summary
    }

    pub fn category(&self, category: Category) -> ActionCounts {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    pub fn has_failures(&self) -> bool {
        self.totals.failed > 0
    }

    /// Every entry went to the source for content and every fetch failed.
    /// Skipped entries and write failures mean the source was not the problem.
    pub fn source_unusable(&self) -> bool {
        self.fetch_failures > 0 && self.fetch_failures == self.totals.total()
    }
}

// ---------------------------------------------------------------------------
// install
// ---------------------------------------------------------------------------

/// Install every manifest entry under `target_root`.
///
/// Returns exactly one outcome per entry, in manifest order. Errors only when
/// the manifest is empty or the target root cannot be created; in that case
/// no entry is touched.
pub fn install(
    manifest: &Manifest,
    target_root: &Path,
    policy: OverwritePolicy,
    source: &dyn ContentSource,
    reporter: &mut dyn Reporter,
) -> Result<Vec<InstallOutcome>> {
    if manifest.is_empty() {
        return Err(AgenticError::EmptyManifest);
    }
    io::ensure_dir(target_root).map_err(|e| AgenticError::TargetRoot {
        path: target_root.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        root = %target_root.display(),
        entries = manifest.len(),
        policy = %policy,
        source = %source.describe(),
        "install started"
    );

    let mut outcomes = Vec::with_capacity(manifest.len());
    for entry in manifest.entries() {
        reporter.entry_started(entry);
        let outcome = install_entry(entry, target_root, policy, source);
        if let Some(err) = &outcome.error {
            tracing::warn!(
                path = %entry.relative_path,
                kind = %err.kind,
                "install failed: {}",
                err.message
            );
        } else {
            tracing::debug!(path = %entry.relative_path, action = %outcome.action, "installed");
        }
        reporter.entry_finished(&outcome);
        outcomes.push(outcome);
    }

    let summary = InstallSummary::from_outcomes(&outcomes);
    tracing::info!(
        created = summary.totals.created,
        updated = summary.totals.updated,
        skipped = summary.totals.skipped,
        failed = summary.totals.failed,
        "install finished"
    );
    Ok(outcomes)
}

fn install_entry(
    entry: &ManifestEntry,
    target_root: &Path,
    policy: OverwritePolicy,
    source: &dyn ContentSource,
) -> InstallOutcome {
    let dest = target_root.join(&entry.relative_path);
    let existed = dest.exists();

    if existed && policy == OverwritePolicy::SkipExisting {
        return InstallOutcome::done(entry, InstallAction::Skipped);
    }

    let content = match source.fetch(&entry.source_id) {
        Ok(bytes) => bytes,
        Err(e) => {
            return InstallOutcome::failed(entry, FailureStage::Fetch, e.kind(), e.to_string())
        }
    };

    // atomic_write creates missing parent directories.
    if let Err(e) = io::atomic_write(&dest, &content) {
        return InstallOutcome::failed(
            entry,
            FailureStage::Write,
            FailureKind::from_io(&e),
            e.to_string(),
        );
    }

    let action = if existed {
        InstallAction::Updated
    } else {
        InstallAction::Created
    };
    InstallOutcome::done(entry, action)
}

// ---------------------------------------------------------------------------
// Workspace scaffolding
// ---------------------------------------------------------------------------

/// Ensure the category directories and the auxiliary workspace directories
/// exist under `target_root`. Existing directories are left untouched.
pub fn ensure_workspace_dirs(
    target_root: &Path,
    categories: &[Category],
    reporter: &mut dyn Reporter,
) -> Result<Vec<DirOutcome>> {
    let mut wanted: Vec<(&str, &str)> = categories
        .iter()
        .map(|c| (c.dir_name(), c.description()))
        .collect();
    wanted.extend_from_slice(paths::WORKSPACE_DIRS);

    let mut outcomes = Vec::with_capacity(wanted.len());
    for (dir, description) in wanted {
        let full: PathBuf = target_root.join(dir);
        let created = io::create_dir_if_missing(&full)?;
        if created {
            tracing::debug!(dir = %full.display(), "created directory");
        }
        let outcome = DirOutcome {
            path: dir.to_string(),
            description: description.to_string(),
            created,
        };
        reporter.directory(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
