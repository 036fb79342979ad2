use crate::output::{print_json, print_panel, print_table};
use agentic_core::{
    paths,
    status::{self, ComponentStatus},
    types::Category,
};
use anyhow::Context;
use std::path::Path;

const READY_STEPS: &str = "Ready to use!

Quick Start:
  claude                 Launch Claude Code
  /help                  Show available commands
  /agents                List specialized agents

Complete Workflow:
  /all                   Complete workflow (ticket->plan->implement->review)

4-Step Workflow:
  /1_ticket              Create comprehensive task ticket
  /2_plan                Generate implementation plan with research
  /3_implement           Execute the implementation plan
  /4_review              Quality assurance and code review";

const WORKFLOW_STEPS: &str = "Quick Start:
  /all \"Add OAuth authentication\"

4-Step Workflow:
  /1_ticket \"Add OAuth authentication\"
  /2_plan .claude/tasks/oauth-authentication
  /3_implement .claude/tasks/oauth-authentication
  /4_review .claude/tasks/oauth-authentication

Available Skills:
  code-standards    Extract best practices from PR comments

Getting Started:
  claude            Launch Claude Code
  /help             Show available commands
  /agents           List specialized agents";

/// `agentic status`: component table plus next steps.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let target = paths::claude_dir(root);
    let statuses = status::inspect(&target).context("failed to inspect .claude/")?;

    if json {
        let value = serde_json::json!({
            "root": root.display().to_string(),
            "ready": status::is_ready(&statuses),
            "components": statuses,
        });
        return print_json(&value);
    }

    println!("Claude Code Agentic Engineering Status");
    println!();
    let rows = statuses
        .iter()
        .map(|s| {
            vec![
                s.category.label().to_string(),
                s.state.to_string(),
                s.count.to_string(),
                s.description.clone(),
            ]
        })
        .collect();
    print_table(&["Component", "Status", "Count", "Description"], rows);
    println!();

    if target.is_dir() && status::is_ready(&statuses) {
        print_panel("Next Steps", READY_STEPS);
    } else {
        print_panel(
            "Setup Required",
            "No components installed yet.\n\nRun `agentic init` to get started!",
        );
    }
    Ok(())
}

/// Success panel printed after `init` and `install`.
pub fn print_success(root: &Path, label: &str) -> anyhow::Result<()> {
    let statuses = status::inspect(&paths::claude_dir(root))
        .context("failed to inspect installed components")?;

    println!();
    print_panel(
        "Claude Code Agentic Engineering",
        &format!("Installation Complete!\n\nInstalled in {label}:"),
    );
    let rows = Category::all()
        .iter()
        .map(|&c| {
            vec![
                c.label().to_string(),
                count_for(&statuses, c).to_string(),
                format!("{}/{}/", paths::CLAUDE_DIR, c.dir_name()),
            ]
        })
        .collect();
    print_table(&["Component", "Count", "Location"], rows);
    println!();
    let dirs: Vec<String> = paths::WORKSPACE_DIRS
        .iter()
        .map(|(d, _)| format!("{}/{d}/", paths::CLAUDE_DIR))
        .collect();
    println!("Project directories: {}", dirs.join(", "));
    println!();
    print_panel("Next Steps", WORKFLOW_STEPS);
    println!();
    println!("Your agentic engineering workflow is ready!");
    Ok(())
}

fn count_for(statuses: &[ComponentStatus], category: Category) -> usize {
    statuses
        .iter()
        .find(|s| s.category == category)
        .map(|s| s.count)
        .unwrap_or(0)
}
