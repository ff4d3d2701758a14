//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{self, Context};

/// PEP Build - Render the PEP documentation site and generate PEP 0
#[derive(Parser, Debug)]
#[command(name = "pep-build")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace). Defaults to RUST_LOG,
    /// then info.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Root directory of the PEP repository.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Path to the configuration file (default: <root>/.pep-build.yaml).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate PEP 0 and render the site with the documentation generator
    Build(commands::build::BuildArgs),

    /// Generate PEP 0 (and optionally the JSON catalog) without building
    Index(commands::index::IndexArgs),

    /// Check every PEP header, category and author email without writing
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level.as_deref());

        let context = Context {
            color: self.color,
            root: self.root,
            config_path: self.config,
        };

        match self.command {
            Commands::Build(args) => commands::build::execute(args, &context),
            Commands::Index(args) => commands::index::execute(args, &context),
            Commands::Validate(args) => commands::validate::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: Option<&str>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(level);
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")),
    };
    // Ignore a second initialisation; the first logger stays in place.
    let _ = builder.format_timestamp(None).format_target(false).try_init();
}
