//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks the PEP
//! corpus the same way PEP 0 generation does, without writing anything.
//!
//! ## Functionality
//!
//! - **Header validation**: every `pep-NNNN` source is parsed; all header
//!   errors are reported, not just the first.
//! - **Classification**: every PEP must fall into an index category.
//! - **Author emails**: each author must be cited with one email address.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use pep_build::classify::classify;
use pep_build::corpus::find_sources;
use pep_build::output::Marker;
use pep_build::pep::Pep;
use pep_build::writer::verify_email_addresses;

use super::Context;

/// Check PEP headers, categories and author emails
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only print problems and the final result.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, context: &Context) -> Result<()> {
    let out = context.output();
    let config = context.load_config()?;
    let source_dir = config.source_path(&context.root);

    if !args.quiet {
        println!(
            "{}",
            out.line(
                Marker::Scan,
                format!("Validating PEPs in {}", source_dir.display())
            )
        );
    }

    let sources = find_sources(&source_dir)?;
    let mut peps: Vec<Pep> = Vec::with_capacity(sources.len());
    let mut has_errors = false;

    for path in &sources {
        match Pep::from_file(path, &config.author_overrides) {
            Ok(pep) => peps.push(pep),
            Err(e) => {
                println!("{}", out.line(Marker::Err, e));
                has_errors = true;
            }
        }
    }
    peps.sort();

    for pair in peps.windows(2).filter(|pair| pair[0].number == pair[1].number) {
        println!(
            "{}",
            out.line(
                Marker::Err,
                format!(
                    "PEP {} is defined by both {} and {}",
                    pair[0].number,
                    pair[0].filename.display(),
                    pair[1].filename.display()
                )
            )
        );
        has_errors = true;
    }

    if sources.is_empty() {
        println!(
            "{}",
            out.line(Marker::Err, format!("No PEP documents found in {}", source_dir.display()))
        );
        has_errors = true;
    } else if !args.quiet {
        println!(
            "{}",
            out.line(
                Marker::Ok,
                format!("Parsed {} of {} PEP sources", peps.len(), sources.len())
            )
        );
    }

    match classify(&peps) {
        Ok(categories) => {
            if !args.quiet {
                println!("\n{}", out.line(Marker::Info, "Index by category:"));
                for (category, members) in categories.iter() {
                    println!("   {:>4}  {}", members.len(), category.title());
                }
            }
        }
        Err(e) => {
            println!("{}", out.line(Marker::Err, e));
            has_errors = true;
        }
    }

    let refs: Vec<&Pep> = peps.iter().collect();
    match verify_email_addresses(&refs) {
        Ok(authors) => {
            if !args.quiet {
                println!(
                    "\n{}",
                    out.line(
                        Marker::Ok,
                        format!("{} authors with consistent email addresses", authors.len())
                    )
                );
            }
        }
        Err(e) => {
            println!("{}", out.line(Marker::Err, e));
            has_errors = true;
        }
    }

    if has_errors {
        println!("\n{}", out.line(Marker::Err, "PEP sources have errors that must be fixed"));
        anyhow::bail!("Validation failed");
    }

    println!("\n{}", out.line(Marker::Ok, "All PEPs are valid"));
    Ok(())
}
