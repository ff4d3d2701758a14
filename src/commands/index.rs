//! # Index Command Implementation
//!
//! This module implements the `index` subcommand, which generates PEP 0
//! without running the documentation generator. It is useful for reviewing
//! the index while editing PEP headers.
//!
//! By default PEP 0 is written to `pep-0000.rst` in the source directory.
//! `--output FILE` writes it elsewhere and `--output -` prints it.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pep_build::builder::write_catalog;
use pep_build::corpus::collect_peps;
use pep_build::defaults::PEP_ZERO_FILENAME;
use pep_build::error::Error;
use pep_build::output::Marker;
use pep_build::writer::PepZeroWriter;

use super::{today, Context};

/// Generate PEP 0 without building the site
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Where to write PEP 0; `-` prints to stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the JSON catalog to this file.
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Execute the `index` command.
pub fn execute(args: IndexArgs, context: &Context) -> Result<()> {
    let out = context.output();
    let config = context.load_config()?;
    let source_dir = config.source_path(&context.root);

    let peps = collect_peps(&source_dir, &config.author_overrides)?;
    if peps.is_empty() {
        return Err(Error::EmptyCorpus {
            dir: Some(source_dir),
        }.into());
    }
    let text = PepZeroWriter::new(config.reserved.clone()).write_pep0(&peps, today())?;

    let to_stdout = args.output.as_deref().is_some_and(|p| p.as_os_str() == "-");
    if to_stdout {
        print!("{}", text);
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| source_dir.join(PEP_ZERO_FILENAME));
        fs::write(&path, &text)?;
        println!(
            "{}",
            out.line(
                Marker::Ok,
                format!("Wrote {} ({} PEPs)", path.display(), peps.len())
            )
        );
    }

    if let Some(json_path) = &args.json {
        write_catalog(json_path, &peps, &config.base_url)?;
        if !to_stdout {
            println!(
                "{}",
                out.line(Marker::Ok, format!("Wrote catalog {}", json_path.display()))
            );
        }
    }

    Ok(())
}
