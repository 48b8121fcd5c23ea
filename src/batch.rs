//! Processing many record files at once.
//!
//! Sources are handled one at a time in lexical path order; a failing source
//! is reported and the batch moves on.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, SecretError};
use crate::{render, Mode};

/// Outcome for a single source file.
#[derive(Debug)]
pub struct Report {
    pub source: PathBuf,
    pub outcome: Result<String>,
}

impl Report {
    /// `"<source>: <result>"` or `"<source>: error: <message>"`.
    pub fn line(&self) -> String {
        match &self.outcome {
            Ok(out) => format!("{}: {}", self.source.display(), out),
            Err(e) => format!("{}: error: {}", self.source.display(), e),
        }
    }
}

/// Source name that stands for standard input.
pub const STDIN: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

/// Expand directories into their `*.json` files and sort everything.
/// `-` is kept as a source of its own.
pub fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input).map_err(|source| SecretError::Io {
                path: input.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| SecretError::Io {
                        path: input.clone(),
                        source,
                    })?
                    .path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    sources.push(path);
                }
            }
        } else {
            sources.push(input.clone());
        }
    }
    sources.sort();
    sources.dedup();
    debug!(count = sources.len(), "collected sources");
    Ok(sources)
}

fn read_source(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

/// Read and solve one file, or stdin for `-`.
pub fn solve_file(path: &Path, mode: Mode) -> Result<String> {
    let text = read_source(path).map_err(|source| SecretError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    render(&text, mode)
}

/// Solve every source independently.
pub fn run(sources: &[PathBuf], mode: Mode) -> Vec<Report> {
    sources
        .iter()
        .map(|source| {
            let outcome = solve_file(source, mode);
            match &outcome {
                Ok(_) => info!(source = %source.display(), "solved"),
                Err(e) if e.is_defect() => {
                    warn!(source = %source.display(), error = %e, "internal arithmetic failure")
                }
                Err(e) => debug!(source = %source.display(), error = %e, "source failed"),
            }
            Report {
                source: source.clone(),
                outcome,
            }
        })
        .collect()
}
