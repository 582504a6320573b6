//! Headings read the ambient depth and render at the matching level.

use crate::context::ContextStack;
use crate::dom::{Document, NodeId};
use crate::level::{resolve, Level, LevelOverride};
use crate::retag::retag;
use serde::Deserialize;
use tracing::debug;

/// Accessibility attribute carrying the resolved level.
pub const ARIA_LEVEL_ATTRIBUTE: &str = "aria-level";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
/// Per-heading settings.
pub struct HeadingOptions {
    /// Replaces the ambient level.
    pub level: Option<LevelOverride>,
    /// Keep the element's own tag instead of switching to `h1`..`h6`.
    pub keep_tag: bool,
}

#[derive(Debug)]
/// A heading attached to an element.
pub struct Heading {
    node: NodeId,
    options: HeadingOptions,
    level: Level,
}

impl Heading {
    /// Attaches a heading to `node`, resolving its level from the enclosing section.
    pub fn attach(
        doc: &mut Document,
        contexts: &ContextStack,
        node: NodeId,
        options: HeadingOptions,
    ) -> Self {
        let mut heading = Self {
            node,
            options,
            level: Level::MIN,
        };
        heading.apply(doc, contexts);
        heading
    }

    /// Swaps in new options and re-reads the ambient depth, which an ancestor may have changed.
    pub fn update(&mut self, doc: &mut Document, contexts: &ContextStack, options: HeadingOptions) {
        self.options = options;
        self.apply(doc, contexts);
    }

    /// Releases the heading. Headings never publish, so there is nothing to undo.
    pub fn detach(self) {
        debug!(level = %self.level, "detached heading");
    }

    #[must_use]
    /// The element the heading currently lives on.
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    /// Options the heading was last resolved with.
    pub fn options(&self) -> &HeadingOptions {
        &self.options
    }

    #[must_use]
    /// Resolved heading level.
    pub fn level(&self) -> Level {
        self.level
    }

    fn apply(&mut self, doc: &mut Document, contexts: &ContextStack) {
        let base = contexts.ambient_depth().unwrap_or(Level::MIN).depth();
        self.level = Level::clamp(resolve(base, base, self.options.level));

        if !self.options.keep_tag {
            self.node = retag(doc, self.node, self.level.canonical_tag());
        }
        doc.set_attribute(self.node, ARIA_LEVEL_ATTRIBUTE, &self.level.to_string());
        debug!(level = %self.level, keep_tag = self.options.keep_tag, "resolved heading");
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
