//! The outline pass walks a document, attaching sections and headings where markup asks for them.
//!
//! Elements opt in with marker attributes whose value is a JSON options object, e.g.
//! `data-section='{"level": "+2", "tag": "article"}'` or `data-heading='{"keepTag": true}'`.
//! An empty marker means default options. Rendering again updates the existing handles in place,
//! and handles whose elements disappeared from the tree are detached at the end of the pass.

use crate::context::ContextStack;
use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};
use crate::heading::{Heading, HeadingOptions};
use crate::level::Level;
use crate::scope::SectionScope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Attribute names that mark sections and headings.
pub struct Markers {
    /// Marks a section container.
    pub section: String,
    /// Marks a heading.
    pub heading: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            section: "data-section".to_string(),
            heading: "data-heading".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One heading as it appears in the finished outline.
pub struct OutlineEntry {
    /// Resolved heading level.
    pub level: Level,
    /// Tag the heading element ended up with.
    pub tag: String,
    /// The element's `id`, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whitespace-normalised text of the heading.
    pub text: String,
}

struct Pass {
    scopes: HashMap<NodeId, SectionScope>,
    headings: HashMap<NodeId, Heading>,
}

#[derive(Debug, Default)]
/// Live sections and headings of a document, keyed by the element they sit on.
pub struct Outline {
    markers: Markers,
    contexts: ContextStack,
    scopes: HashMap<NodeId, SectionScope>,
    headings: HashMap<NodeId, Heading>,
}

fn parse_options<T: DeserializeOwned + Default>(marker: &str, raw: &str) -> Result<T> {
    if raw.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(raw).map_err(|source| Error::Options {
        marker: marker.to_string(),
        source,
    })
}

impl Outline {
    #[must_use]
    /// Creates an outline that recognises the given markers.
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    /// Walks the document top-down once, attaching or updating every marked element.
    ///
    /// # Errors
    ///
    /// Returns an error if a marker carries invalid options. The pass stops at that element and
    /// handles already visited keep their new state.
    pub fn render(&mut self, doc: &mut Document) -> Result<()> {
        let mut previous = Pass {
            scopes: std::mem::take(&mut self.scopes),
            headings: std::mem::take(&mut self.headings),
        };

        let root = doc.root();
        let result = self.visit(doc, root, &mut previous);
        if result.is_err() {
            self.contexts.clear();
            // Unvisited handles stay live so the next pass can pick them up.
            self.scopes.extend(previous.scopes);
            self.headings.extend(previous.headings);
            return result;
        }

        for (_, scope) in previous.scopes {
            scope.detach(&mut self.contexts);
        }
        for (_, heading) in previous.headings {
            heading.detach();
        }
        debug!(
            sections = self.scopes.len(),
            headings = self.headings.len(),
            "rendered outline"
        );
        Ok(())
    }

    fn visit(&mut self, doc: &mut Document, node: NodeId, previous: &mut Pass) -> Result<()> {
        let mut node = node;
        let mut opened = None;

        let section_raw = doc.attribute(node, &self.markers.section).map(str::to_string);
        let heading_raw = doc.attribute(node, &self.markers.heading).map(str::to_string);

        if let Some(raw) = section_raw {
            if heading_raw.is_some() {
                warn!(
                    section = %self.markers.section,
                    heading = %self.markers.heading,
                    "element carries both markers; treating it as a section"
                );
            }
            let options = parse_options(&self.markers.section, &raw)?;
            let scope = match previous.scopes.remove(&node) {
                Some(mut scope) => {
                    scope.update(doc, &mut self.contexts, options);
                    scope
                }
                None => SectionScope::attach(doc, &mut self.contexts, node, options),
            };
            node = scope.node();
            opened = Some(node);
            self.scopes.insert(node, scope);
        } else if let Some(raw) = heading_raw {
            let options: HeadingOptions = parse_options(&self.markers.heading, &raw)?;
            let heading = match previous.headings.remove(&node) {
                Some(mut heading) => {
                    heading.update(doc, &self.contexts, options);
                    heading
                }
                None => Heading::attach(doc, &self.contexts, node, options),
            };
            node = heading.node();
            self.headings.insert(node, heading);
        }

        for child in doc.children(node).to_vec() {
            self.visit(doc, child, previous)?;
        }

        if let Some(key) = opened {
            if let Some(scope) = self.scopes.get(&key) {
                scope.close(&mut self.contexts);
            }
        }
        Ok(())
    }

    /// Detaches every section and heading.
    pub fn teardown(mut self) {
        for (_, scope) in self.scopes.drain() {
            scope.detach(&mut self.contexts);
        }
        for (_, heading) in self.headings.drain() {
            heading.detach();
        }
    }

    #[must_use]
    /// The section living on `node`, if any.
    pub fn scope(&self, node: NodeId) -> Option<&SectionScope> {
        self.scopes.get(&node)
    }

    #[must_use]
    /// The heading living on `node`, if any.
    pub fn heading(&self, node: NodeId) -> Option<&Heading> {
        self.headings.get(&node)
    }

    #[must_use]
    /// Context currently in effect; empty between passes.
    pub fn contexts(&self) -> &ContextStack {
        &self.contexts
    }

    #[must_use]
    /// Headings in document order.
    pub fn entries(&self, doc: &Document) -> Vec<OutlineEntry> {
        doc.descendants()
            .into_iter()
            .filter_map(|node| {
                let heading = self.headings.get(&node)?;
                Some(OutlineEntry {
                    level: heading.level(),
                    tag: doc.tag_name(node).unwrap_or_default().to_string(),
                    id: doc.attribute(node, "id").map(str::to_string),
                    text: doc
                        .text_content(node)
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" "),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
