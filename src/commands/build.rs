//! # Build Command Implementation
//!
//! This module implements the `build` subcommand, which regenerates PEP 0 and
//! then runs the documentation generator over the PEP sources.
//!
//! ## Functionality
//!
//! - **Builder selection**: `html` by default, `dirhtml` with `--dir-html`,
//!   `linkcheck` with `--check-links`, or any generator builder by name.
//! - **Strictness**: `--fail-on-warning` and `--nitpicky` are passed through
//!   to the generator.
//! - **Site extras**: the JSON catalog is written after a successful build,
//!   and `--index-file` copies PEP 0's page to `index.html`.
//! - **Dry run**: `--dry-run` prints the generator command and exits.

use anyhow::Result;
use clap::Args;

use pep_build::builder::{self, BuildOptions, Invocation};
use pep_build::output::Marker;

use super::{today, Context};

/// Regenerate PEP 0 and render the site
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Generator builder to use (overridden by --dir-html and --check-links).
    #[arg(short, long, value_name = "NAME")]
    pub builder: Option<String>,

    /// Render one directory per PEP (`pep-NNNN/index.html`).
    #[arg(short, long)]
    pub dir_html: bool,

    /// Check external links instead of rendering.
    #[arg(short, long)]
    pub check_links: bool,

    /// Turn generator warnings into errors.
    #[arg(short, long)]
    pub fail_on_warning: bool,

    /// Warn about every missing cross-reference target.
    #[arg(short, long)]
    pub nitpicky: bool,

    /// Copy PEP 0's page to index.html after the build.
    #[arg(short, long)]
    pub index_file: bool,

    /// Documentation generator executable.
    #[arg(long, value_name = "PROGRAM", env = "PEP_BUILD_GENERATOR")]
    pub generator: Option<String>,

    /// Print the generator command without building anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&BuildArgs> for BuildOptions {
    fn from(args: &BuildArgs) -> Self {
        BuildOptions {
            builder: args.builder.clone(),
            dir_html: args.dir_html,
            check_links: args.check_links,
            fail_on_warning: args.fail_on_warning,
            nitpicky: args.nitpicky,
            index_file: args.index_file,
        }
    }
}

/// Execute the `build` command.
pub fn execute(args: BuildArgs, context: &Context) -> Result<()> {
    let out = context.output();
    let mut config = context.load_config()?;
    if let Some(generator) = &args.generator {
        config.generator = generator.clone();
    }
    let options = BuildOptions::from(&args);

    if args.dry_run {
        let invocation = Invocation::new(&context.root, &config, &options);
        println!("{}", invocation.command_line());
        return Ok(());
    }

    println!(
        "{}",
        out.line(
            Marker::Info,
            format!("Building with '{}' builder", options.select_builder().name())
        )
    );
    builder::build(&context.root, &config, &options, today())?;
    println!(
        "{}",
        out.line(
            Marker::Ok,
            format!("Build finished in {}", config.build_path(&context.root).display())
        )
    );
    Ok(())
}
