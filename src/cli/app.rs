//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::commands;
use rebrand::config::RebrandConfig;
use rebrand::output::OutputMode;
use rebrand::paths;

/// rebrand - Rewrite literal strings across a fixed list of files
#[derive(Parser, Debug)]
#[command(
    name = "rebrand",
    version,
    about = "Rewrite literal strings across a fixed list of files",
    long_about = "Apply ordered literal replacement rules to a list of target files.\n\n\
                  Rules and targets come from rebrand.toml, or the built-in rebranding\n\
                  set when no config file exists. Each file reports its own status;\n\
                  a failure on one file never stops the others."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ./rebrand.toml
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base directory override
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the rules to every target (default)
    Run {
        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Write a rebrand.toml seeded with the built-in rules and targets
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// List the effective base directory, rules and targets
    Rules,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Command::Init { force }) => {
            let path = cli
                .config
                .as_deref()
                .map_or_else(|| paths::config_file(&cwd), |p| paths::absolutize(p, &cwd));
            let base_dir = cli.base_dir.as_deref().map(|dir| paths::absolutize(dir, &cwd));
            commands::init(&path, base_dir.as_deref(), force, output_mode)
        },
        Some(Command::Rules) => {
            let config = load_config(cli.config.as_deref(), cli.base_dir.as_deref(), &cwd)?;
            commands::rules(&config, output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("rebrand v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Some(Command::Run { dry_run }) => {
            let config = load_config(cli.config.as_deref(), cli.base_dir.as_deref(), &cwd)?;
            commands::run(&config, dry_run, output_mode);
            Ok(())
        },
        None => {
            let config = load_config(cli.config.as_deref(), cli.base_dir.as_deref(), &cwd)?;
            commands::run(&config, false, output_mode);
            Ok(())
        },
    }
}

/// Load config and apply the `--base-dir` override
fn load_config(
    config_path: Option<&Path>,
    base_dir: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<RebrandConfig> {
    let config = RebrandConfig::discover(config_path, cwd)?;
    Ok(match base_dir {
        Some(dir) => config.with_base_dir(paths::absolutize(dir, cwd)),
        None => config,
    })
}
