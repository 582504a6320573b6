//! Locating documents on disk and running the outline pass over them.

use crate::dom::Document;
use crate::error::Result;
use crate::formats::Format;
use crate::outline::{Markers, Outline, OutlineEntry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expands files and directories into a sorted list of documents with a matching extension.
///
/// Files named explicitly are kept regardless of their extension.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        } else {
            warn!(path = %path.display(), "skipping missing path");
        }
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn collect_dir(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_dir(&path, extensions, out)?;
        } else if has_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// A document after its outline has been rendered.
pub struct Rendered {
    /// The rewritten tree.
    pub document: Document,
    /// Headings in document order.
    pub entries: Vec<OutlineEntry>,
    /// The tree written back out as source text.
    pub output: String,
}

/// Parses `source`, renders its outline once and serialises the result.
///
/// # Errors
///
/// Returns an error if parsing fails or a marker carries invalid options.
pub fn render_source(source: &str, format: &dyn Format, markers: &Markers) -> Result<Rendered> {
    let mut document = format.parse(source)?;
    let mut outline = Outline::new(markers.clone());
    outline.render(&mut document)?;
    let entries = outline.entries(&document);
    outline.teardown();
    let output = format.serialize(&document);
    Ok(Rendered {
        document,
        entries,
        output,
    })
}

/// Reads a document from disk and renders its outline.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or rendered.
pub fn render_file(path: &Path, format: &dyn Format, markers: &Markers) -> Result<Rendered> {
    let source = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), format = format.name(), "rendering document");
    render_source(&source, format, markers)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
