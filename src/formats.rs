//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over markup languages that can hold
//! sections and headings. Each format owns a tree-sitter grammar, turns source into a
//! [`Document`] and writes a document back out.

use crate::dom::Document;
use crate::error::Result;

pub mod html;

/// A markup language the outline pass can read and write.
pub trait Format {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> &'static str;
    /// File suffix documents of this format usually carry.
    fn file_extension(&self) -> &'static str;
    /// tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Parses source text into a document tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing is abandoned.
    fn parse(&self, source: &str) -> Result<Document>;
    /// Writes a document tree back out as source text.
    fn serialize(&self, doc: &Document) -> String;
}
