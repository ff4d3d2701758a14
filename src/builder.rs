//! # Documentation Generator Driver
//!
//! Renders the PEP sources by running the external documentation generator
//! (`sphinx-build`). This module only assembles the generator's command line,
//! runs it, and handles the files around the build:
//!
//! - PEP 0 is regenerated into the source directory before the build.
//! - The JSON catalog is written into the output after a successful build.
//! - Optionally, PEP 0's page is copied to `index.html`.
//!
//! Rendering, link checking and everything else happens inside the generator.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::api::render_catalog;
use crate::config::Config;
use crate::corpus::collect_peps;
use crate::defaults;
use crate::error::{Error, Result};
use crate::pep::Pep;
use crate::writer::PepZeroWriter;

/// Generator output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Builder {
    /// One `pep-NNNN.html` file per document
    Html,
    /// One `pep-NNNN/index.html` directory per document
    DirHtml,
    /// Check external links instead of rendering
    LinkCheck,
    /// Any other generator builder, passed through by name
    Other(String),
}

impl Builder {
    pub fn name(&self) -> &str {
        match self {
            Builder::Html => "html",
            Builder::DirHtml => "dirhtml",
            Builder::LinkCheck => "linkcheck",
            Builder::Other(name) => name,
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "html" => Builder::Html,
            "dirhtml" => Builder::DirHtml,
            "linkcheck" => Builder::LinkCheck,
            other => Builder::Other(other.to_string()),
        }
    }

    /// Whether this builder produces a browsable site.
    pub fn renders_site(&self) -> bool {
        !matches!(self, Builder::LinkCheck)
    }
}

/// Options mirroring the build command line.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Explicit builder name
    pub builder: Option<String>,
    pub dir_html: bool,
    pub check_links: bool,
    pub fail_on_warning: bool,
    pub nitpicky: bool,
    /// Copy PEP 0's page to `index.html` after the build
    pub index_file: bool,
}

impl BuildOptions {
    /// Link checking wins over directory HTML, which wins over an explicit
    /// builder name.
    pub fn select_builder(&self) -> Builder {
        if self.check_links {
            Builder::LinkCheck
        } else if self.dir_html {
            Builder::DirHtml
        } else if let Some(name) = &self.builder {
            Builder::from_name(name)
        } else {
            Builder::Html
        }
    }
}

/// A fully resolved generator invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub builder: Builder,
    pub source_dir: PathBuf,
    pub config_dir: PathBuf,
    pub build_dir: PathBuf,
    pub doctree_dir: PathBuf,
    /// `name=value` configuration overrides
    pub overrides: Vec<String>,
    pub fail_on_warning: bool,
}

impl Invocation {
    /// Resolve `options` against a project rooted at `root`.
    pub fn new(root: &Path, config: &Config, options: &BuildOptions) -> Self {
        let source_dir = config.source_path(root);
        let build_dir = config.build_path(root);
        let doctree_dir = build_dir.join(defaults::DOCTREE_DIR);

        // Source pages are linked from version control, not copied.
        let mut overrides = vec!["html_copy_source=0".to_string()];
        if options.nitpicky {
            overrides.push("nitpicky=1".to_string());
        }

        Self {
            program: config.generator.clone(),
            builder: options.select_builder(),
            config_dir: source_dir.clone(),
            source_dir,
            build_dir,
            doctree_dir,
            overrides,
            fail_on_warning: options.fail_on_warning,
        }
    }

    /// Generator arguments, without the program name.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-b".to_string(),
            self.builder.name().to_string(),
            "-d".to_string(),
            self.doctree_dir.display().to_string(),
            "-c".to_string(),
            self.config_dir.display().to_string(),
        ];
        for entry in &self.overrides {
            args.push("-D".to_string());
            args.push(entry.clone());
        }
        if self.fail_on_warning {
            args.push("-W".to_string());
        }
        args.push(self.source_dir.display().to_string());
        args.push(self.build_dir.display().to_string());
        args
    }

    /// The command line as a single printable string.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args());
        parts.join(" ")
    }

    /// Run the generator, failing on a non-zero exit.
    pub fn run(&self) -> Result<()> {
        info!("Running {}", self.command_line());
        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .map_err(|e| Error::GeneratorSpawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;
        if !status.success() {
            return Err(Error::GeneratorFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Regenerate `pep-0000.rst` in `source_dir`. Returns the parsed corpus.
pub fn write_pep_zero(source_dir: &Path, config: &Config, today: NaiveDate) -> Result<Vec<Pep>> {
    let peps = collect_peps(source_dir, &config.author_overrides)?;
    if peps.is_empty() {
        return Err(Error::EmptyCorpus {
            dir: Some(source_dir.to_path_buf()),
        });
    }
    let text = PepZeroWriter::new(config.reserved.clone()).write_pep0(&peps, today)?;
    let path = source_dir.join(defaults::PEP_ZERO_FILENAME);
    fs::write(&path, text)?;
    info!("Wrote {} ({} PEPs)", path.display(), peps.len());
    Ok(peps)
}

/// Write the JSON catalog to `path`, creating parent directories.
pub fn write_catalog(path: &Path, peps: &[Pep], base_url: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_catalog(peps, base_url)?)?;
    info!("Wrote catalog {}", path.display());
    Ok(())
}

/// Copy PEP 0's rendered page to `index.html` in `build_dir`.
///
/// Returns the page that was copied, or `None` when neither the `html` nor
/// the `dirhtml` layout of PEP 0 exists.
pub fn create_index_file(build_dir: &Path) -> Result<Option<PathBuf>> {
    let index = build_dir.join("index.html");
    let candidates = [
        build_dir.join("pep-0000.html"),
        build_dir.join("pep-0000").join("index.html"),
    ];
    match candidates.into_iter().find(|path| path.is_file()) {
        Some(page) => {
            fs::copy(&page, &index)?;
            debug!("Copied {} to {}", page.display(), index.display());
            Ok(Some(page))
        }
        None => {
            warn!(
                "No rendered PEP 0 page in {}, index.html not created",
                build_dir.display()
            );
            Ok(None)
        }
    }
}

/// Run a complete build: PEP 0, the generator, then the catalog and index
/// page when the builder renders a site.
pub fn build(root: &Path, config: &Config, options: &BuildOptions, today: NaiveDate) -> Result<()> {
    let invocation = Invocation::new(root, config, options);
    let peps = write_pep_zero(&invocation.source_dir, config, today)?;

    invocation.run()?;

    if invocation.builder.renders_site() {
        write_catalog(
            &invocation.build_dir.join(defaults::CATALOG_PATH),
            &peps,
            &config.base_url,
        )?;
    }
    if options.index_file {
        create_index_file(&invocation.build_dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PEP_1: &str = "PEP: 1\nTitle: PEP Purpose and Guidelines\nAuthor: Barry Warsaw <barry@python.org>\nStatus: Active\nType: Process\n\nBody\n";

    #[test]
    fn test_select_builder_precedence() {
        let mut options = BuildOptions::default();
        assert_eq!(options.select_builder(), Builder::Html);

        options.builder = Some("epub".to_string());
        assert_eq!(options.select_builder(), Builder::Other("epub".to_string()));

        options.dir_html = true;
        assert_eq!(options.select_builder(), Builder::DirHtml);

        options.check_links = true;
        assert_eq!(options.select_builder(), Builder::LinkCheck);
    }

    #[test]
    fn test_invocation_args() {
        let root = Path::new("/peps");
        let options = BuildOptions {
            nitpicky: true,
            fail_on_warning: true,
            ..BuildOptions::default()
        };
        let invocation = Invocation::new(root, &Config::default(), &options);
        let args = invocation.args();
        assert_eq!(args[0..2], ["-b", "html"]);
        assert!(args.contains(&"nitpicky=1".to_string()));
        assert!(args.contains(&"html_copy_source=0".to_string()));
        assert!(args.contains(&"-W".to_string()));
        assert_eq!(
            invocation.doctree_dir,
            Path::new("/peps").join(".").join("build").join(".doctrees")
        );
        assert!(invocation.command_line().starts_with("sphinx-build -b html"));
    }

    #[test]
    fn test_invocation_without_optional_flags() {
        let invocation = Invocation::new(Path::new("/peps"), &Config::default(), &BuildOptions::default());
        let args = invocation.args();
        assert!(!args.contains(&"-W".to_string()));
        assert!(!args.contains(&"nitpicky=1".to_string()));
    }

    #[test]
    fn test_write_pep_zero() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pep-0001.rst"), PEP_1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();

        let peps = write_pep_zero(temp.path(), &Config::default(), today).unwrap();
        assert_eq!(peps.len(), 1);
        let text = fs::read_to_string(temp.path().join("pep-0000.rst")).unwrap();
        assert!(text.contains("Last-Modified: 2024-05-06"));
        assert!(text.contains("Warsaw, Barry"));
    }

    #[test]
    fn test_write_pep_zero_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let err = write_pep_zero(temp.path(), &Config::default(), today).unwrap_err();
        assert!(matches!(err, Error::EmptyCorpus { .. }));
    }

    #[test]
    fn test_create_index_file_html_layout() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pep-0000.html"), "<html>pep 0</html>").unwrap();
        let copied = create_index_file(temp.path()).unwrap();
        assert!(copied.is_some());
        let index = fs::read_to_string(temp.path().join("index.html")).unwrap();
        assert_eq!(index, "<html>pep 0</html>");
    }

    #[test]
    fn test_create_index_file_dirhtml_layout() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pep-0000")).unwrap();
        fs::write(temp.path().join("pep-0000").join("index.html"), "dir").unwrap();
        create_index_file(temp.path()).unwrap();
        assert!(temp.path().join("index.html").is_file());
    }

    #[test]
    fn test_create_index_file_missing_page() {
        let temp = TempDir::new().unwrap();
        assert!(create_index_file(temp.path()).unwrap().is_none());
        assert!(!temp.path().join("index.html").exists());
    }

    #[test]
    fn test_run_missing_generator() {
        let mut config = Config::default();
        config.generator = "pep-build-no-such-generator".to_string();
        let invocation = Invocation::new(Path::new("."), &config, &BuildOptions::default());
        let err = invocation.run().unwrap_err();
        assert!(matches!(err, Error::GeneratorSpawn { .. }));
    }

    #[test]
    fn test_write_catalog_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("build").join("api").join("peps.json");
        let peps = vec![Pep::from_text("pep-0001.rst", PEP_1, &[]).unwrap()];
        write_catalog(&path, &peps, "https://peps.python.org").unwrap();
        assert!(path.is_file());
    }
}
