use crate::paths;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Commands,
    Agents,
    Templates,
    Skills,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Commands,
            Category::Agents,
            Category::Templates,
            Category::Skills,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Commands => "commands",
            Category::Agents => "agents",
            Category::Templates => "templates",
            Category::Skills => "skills",
        }
    }

    /// Directory under the target root that holds this category's files.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Commands => paths::COMMANDS_DIR,
            Category::Agents => paths::AGENTS_DIR,
            Category::Templates => paths::TEMPLATES_DIR,
            Category::Skills => paths::SKILLS_DIR,
        }
    }

    /// Human label used in tables.
    pub fn label(self) -> &'static str {
        match self {
            Category::Commands => "Commands",
            Category::Agents => "Agents",
            Category::Templates => "Templates",
            Category::Skills => "Skills",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Commands => "Workflow automation commands",
            Category::Agents => "Specialized AI agent templates",
            Category::Templates => "Ticket, plan and review templates",
            Category::Skills => "Advanced skill modules",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OverwritePolicy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Replace existing destination files with the source content.
    #[default]
    OverwriteExisting,
    /// Leave existing destination files untouched.
    SkipExisting,
}

impl OverwritePolicy {
    pub fn from_skip_existing(skip_existing: bool) -> Self {
        if skip_existing {
            OverwritePolicy::SkipExisting
        } else {
            OverwritePolicy::OverwriteExisting
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverwritePolicy::OverwriteExisting => "overwrite-existing",
            OverwritePolicy::SkipExisting => "skip-existing",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InstallAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallAction {
    Created,
    Updated,
    Skipped,
    Failed,
}

impl InstallAction {
    pub fn as_str(self) -> &'static str {
        match self {
            InstallAction::Created => "created",
            InstallAction::Updated => "updated",
            InstallAction::Skipped => "skipped",
            InstallAction::Failed => "failed",
        }
    }
}

impl fmt::Display for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    NetworkOrIo,
    Permission,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::NetworkOrIo => "network_or_io",
            FailureKind::Permission => "permission",
        }
    }

    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => FailureKind::Permission,
            _ => FailureKind::NetworkOrIo,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
