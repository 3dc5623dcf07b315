use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yelp_risk_core::constants::ROOT_ENV_VAR;
use yelp_risk_core::{ProjectDir, ProjectPaths, provision};

#[derive(Parser)]
#[command(name = "yelp-risk")]
#[command(about = "yelp-risk project directory layout")]
struct Cli {
    /// Project root override (defaults to the directory holding .yelp-risk-root)
    #[arg(long, global = true, env = ROOT_ENV_VAR)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the project root
    Root,
    /// Print one project directory
    Dir {
        /// data-raw, data-processed, results or figures
        name: ProjectDir,
    },
    /// Print every project directory
    Show {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Create any project directories that are missing
    Provision,
}

/// Serialised form of `show --json`.
#[derive(Serialize)]
struct Layout<'a> {
    root: &'a Path,
    data_raw: PathBuf,
    data_processed: PathBuf,
    results: PathBuf,
    figures: PathBuf,
}

impl<'a> Layout<'a> {
    fn new(paths: &'a ProjectPaths) -> Self {
        Self {
            root: paths.root(),
            data_raw: paths.data_raw_dir(),
            data_processed: paths.data_processed_dir(),
            results: paths.results_dir(),
            figures: paths.figures_dir(),
        }
    }
}

/// Entry point for the yelp-risk CLI.
///
/// The project root is resolved once here and passed into the library.
///
/// # Environment Variables
/// - `YELP_RISK_ROOT`: project root override (same as `--root`), also read from `.env`
/// - `RUST_LOG`: log filter (default: "yelp_risk=info"); logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yelp_risk=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'yelp-risk --help' for commands");
        return Ok(());
    };

    let paths = ProjectPaths::resolve(cli.root)?;

    match command {
        Commands::Root => println!("{}", paths.root().display()),
        Commands::Dir { name } => println!("{}", paths.dir(name).display()),
        Commands::Show { json: true } => {
            println!("{}", serde_json::to_string_pretty(&Layout::new(&paths))?);
        }
        Commands::Show { json: false } => {
            println!("root: {}", paths.root().display());
            for (dir, path) in paths.all() {
                println!("{}: {}", dir, path.display());
            }
        }
        Commands::Provision => {
            tracing::info!(
                "++ Provisioning project directories under {}",
                paths.root().display()
            );
            let report = provision(&paths)?;
            let created: Vec<_> = report.created().collect();
            if created.is_empty() {
                println!("All project directories already exist.");
            }
            for entry in created {
                println!("created {}: {}", entry.dir, entry.path.display());
            }
        }
    }

    Ok(())
}
