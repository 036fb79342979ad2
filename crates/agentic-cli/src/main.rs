mod cmd;
mod output;
mod reporter;
mod root;

use clap::{Parser, Subcommand};
use cmd::InstallArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agentic",
    about = "Claude Code agentic engineering: initialize and manage agentic workflows",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .claude/ or .git/)
    #[arg(long, global = true, env = "AGENTIC_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a project with commands, agents, templates and skills.
    ///
    /// By default, overwrites existing files with the latest versions.
    Init {
        /// Create and initialize this subdirectory of --dir
        project_name: Option<String>,

        /// Target directory
        #[arg(long, short = 'd', default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        install: InstallArgs,
    },

    /// Install or update components in the current project
    Install {
        #[command(flatten)]
        install: InstallArgs,
    },

    /// Show installation status and available commands
    Status,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init {
            project_name,
            dir,
            install,
        } => cmd::init::run(&dir, project_name.as_deref(), &install, cli.json),
        Commands::Install { install } => {
            let root = root::resolve_root(cli.root.as_deref());
            cmd::install::run(&root, &install, cli.json)
        }
        Commands::Status => {
            let root = root::resolve_root(cli.root.as_deref());
            cmd::status::run(&root, cli.json)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
