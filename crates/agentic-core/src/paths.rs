use std::path::{Component, Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const CONFIG_FILE: &str = ".claude/agentic.yaml";

pub const COMMANDS_DIR: &str = "commands";
pub const AGENTS_DIR: &str = "agents";
pub const TEMPLATES_DIR: &str = "templates";
pub const SKILLS_DIR: &str = "skills";

pub const TASKS_DIR: &str = "tasks";
pub const BEST_PRACTICES_DIR: &str = "best-practices";

/// Auxiliary workspace directories under the target root, with the
/// description shown when they are scaffolded.
pub const WORKSPACE_DIRS: &[(&str, &str)] = &[
    (TASKS_DIR, "Task workspace (organized by task folder)"),
    (BEST_PRACTICES_DIR, "Project coding best practices"),
];

pub const MANIFEST_FILE: &str = "manifest.yaml";
pub const SKILL_FILE: &str = "SKILL.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Returns `root/.claude`, the target root for installs.
pub fn claude_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Display form of a path under `.claude/`, always with forward slashes.
pub fn display_path(relative: &str) -> String {
    format!("{CLAUDE_DIR}/{relative}")
}

// ---------------------------------------------------------------------------
// Entry path validation
// ---------------------------------------------------------------------------

/// True when `relative` is a non-empty, forward-slash relative path that
/// cannot escape the directory it is joined onto. The path must already be
/// in normal form: no empty, `.` or `..` segments, so two distinct strings
/// never name the same destination.
pub fn is_safe_relative_path(relative: &str) -> bool {
    if relative.contains('\\') || relative.contains('\0') {
        return false;
    }
    let normal_segments = relative
        .split('/')
        .all(|seg| !seg.is_empty() && seg != "." && seg != "..");
    normal_segments
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
