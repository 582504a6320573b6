//! headline: automatic heading levels for nested sections.
//!
//! Sections publish a depth to their subtree and headings render at that depth, so the outline
//! assistive technology sees follows the nesting of the markup rather than the literal `h1`..`h6`
//! tags that happen to be written in it.
//!
//! ```
//! use headline::formats::{html::HtmlFormat, Format};
//! use headline::input::render_source;
//! use headline::outline::Markers;
//!
//! let html = r#"<div data-section><p data-heading>Intro</p><div data-section><p data-heading>Details</p></div></div>"#;
//! let rendered = render_source(html, &HtmlFormat, &Markers::default()).unwrap();
//! let levels: Vec<u8> = rendered.entries.iter().map(|entry| entry.level.get()).collect();
//! assert_eq!(levels, [1, 2]);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod level;
pub mod outline;
pub mod retag;
pub mod scope;

pub use error::{Error, Result};
