//! Errors raised while resolving levels, reading options or parsing documents.
//!
//! Out-of-range levels are deliberately absent here: they are clamped, never rejected.

use std::io;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Everything that can stop a document from being outlined.
pub enum Error {
    /// A level string such as `"+"` or `"abc"` carried no usable number.
    #[error("malformed level override {value:?}: expected an integer, \"+N\" or \"-N\"")]
    MalformedLevel {
        /// The offending option value, verbatim.
        value: String,
    },

    /// A section asked to be rendered as something that is not a usable element name.
    #[error("invalid section tag {tag:?}: expected a letter followed by letters, digits or '-', and not a void element")]
    InvalidTag {
        /// The rejected tag, verbatim.
        tag: String,
    },

    /// The JSON options attached to a marker attribute could not be read.
    #[error("invalid options in {marker} attribute: {source}")]
    Options {
        /// Marker attribute the options were read from.
        marker: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// headline.toml could not be read as configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Parser diagnostic.
        message: String,
    },

    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter gave up on the document.
    #[error("tree-sitter could not parse the document as {format}")]
    Parse {
        /// Name of the format the document was parsed as.
        format: &'static str,
    },

    /// Reading or writing a document failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
