use super::{finish, run_install, status, InstallArgs};
use crate::output::print_banner;
use anyhow::Context;
use std::path::Path;

/// `agentic init [PROJECT_NAME] [--dir D]`: create the project directory if
/// needed, then install every component into `<project>/.claude`.
pub fn run(
    dir: &Path,
    project_name: Option<&str>,
    args: &InstallArgs,
    json: bool,
) -> anyhow::Result<()> {
    let project_root = match project_name {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    };

    if project_name.is_some() && !project_root.exists() {
        std::fs::create_dir_all(&project_root).with_context(|| {
            format!("failed to create project directory {}", project_root.display())
        })?;
        if !json {
            println!("Created project directory: {}", project_root.display());
        }
    }

    if !json {
        print_banner();
    }

    let report = run_install(&project_root, args, json)?;
    finish(&report, args, json)?;

    if !json {
        let label = project_name.unwrap_or("current directory");
        status::print_success(&project_root, label)?;
    }
    Ok(())
}
