use super::{finish, run_install, status, InstallArgs};
use crate::output::print_banner;
use std::path::Path;

/// `agentic install`: install or refresh components in an existing project.
///
/// Overwrites existing files with the latest versions unless
/// `--skip-existing` is given, so local edits to managed files are replaced.
pub fn run(root: &Path, args: &InstallArgs, json: bool) -> anyhow::Result<()> {
    if !json {
        print_banner();
    }

    let report = run_install(root, args, json)?;
    finish(&report, args, json)?;

    if !json {
        status::print_success(root, &root.display().to_string())?;
    }
    Ok(())
}
