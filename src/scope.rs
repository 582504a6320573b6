//! Section scopes: the containers that decide how deep their headings sit.
//!
//! A section reads the context of its enclosing section, resolves its own level from it, records
//! the result on the element and publishes it to its descendants. Outside any section the parent
//! depth counts as zero, so the first section lands on level 1.

use crate::context::{ContextStack, ScopeContext};
use crate::dom::{Document, NodeId};
use crate::level::{resolve, Level, LevelOverride};
use crate::retag::{retag, validate_tag};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Attribute recording the resolved level of a section.
pub const LEVEL_ATTRIBUTE: &str = "data-level";
/// Attribute recording the depth the section was resolved against.
pub const PARENT_LEVEL_ATTRIBUTE: &str = "data-parent-level";
/// Attribute recording whether the section had no enclosing section.
pub const TOP_LEVEL_ATTRIBUTE: &str = "data-top-level";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Per-section settings.
pub struct SectionOptions {
    /// Replaces the default "parent + 1" level.
    pub level: Option<LevelOverride>,
    /// Tag the section element should be rendered as.
    #[serde(deserialize_with = "deserialize_tag")]
    pub tag: Option<String>,
}

fn deserialize_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    if let Some(tag) = &tag {
        validate_tag(tag).map_err(D::Error::custom)?;
    }
    Ok(tag)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of the last resolution, mirrored in the diagnostic attributes.
pub struct Resolution {
    /// Level published to descendants.
    pub level: Level,
    /// Depth of the enclosing section, 0 when there is none.
    pub parent_depth: i64,
    /// No section enclosed this one.
    pub top_level: bool,
}

#[derive(Debug)]
/// A section attached to an element.
pub struct SectionScope {
    node: NodeId,
    owner: NodeId,
    options: SectionOptions,
    resolution: Resolution,
}

impl SectionScope {
    /// Attaches a section to `node` and publishes its level for the subtree that follows.
    pub fn attach(
        doc: &mut Document,
        contexts: &mut ContextStack,
        node: NodeId,
        options: SectionOptions,
    ) -> Self {
        let mut scope = Self {
            node,
            owner: node,
            options,
            resolution: Resolution {
                level: Level::MIN,
                parent_depth: 0,
                top_level: true,
            },
        };
        scope.apply(doc, contexts);
        scope
    }

    /// Swaps in new options and resolves again against the context in effect right now.
    pub fn update(&mut self, doc: &mut Document, contexts: &mut ContextStack, options: SectionOptions) {
        self.options = options;
        self.apply(doc, contexts);
    }

    /// Ends the subtree of this section: the enclosing context becomes current again.
    pub fn close(&self, contexts: &mut ContextStack) {
        contexts.restore(self.owner);
    }

    /// Releases the section, restoring whatever context was current before it published.
    pub fn detach(self, contexts: &mut ContextStack) {
        contexts.restore(self.owner);
        debug!(level = %self.resolution.level, "detached section");
    }

    #[must_use]
    /// The element the section currently lives on.
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    /// Options the section was last resolved with.
    pub fn options(&self) -> &SectionOptions {
        &self.options
    }

    #[must_use]
    /// Result of the most recent resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    /// Level published to descendants.
    pub fn level(&self) -> Level {
        self.resolution.level
    }

    fn apply(&mut self, doc: &mut Document, contexts: &mut ContextStack) {
        // Our own frame may still be on top if we are updated mid-walk.
        contexts.restore(self.owner);

        let enclosing = contexts.current();
        let top_level = enclosing.is_none_or(|context| !context.enclosed);
        let parent_depth = if top_level {
            0
        } else {
            enclosing.map_or(0, |context| context.depth.depth())
        };
        let level = Level::clamp(resolve(parent_depth + 1, parent_depth, self.options.level));
        self.resolution = Resolution {
            level,
            parent_depth,
            top_level,
        };

        if let Some(tag) = self.options.tag.as_deref() {
            self.node = retag(doc, self.node, tag);
        }
        doc.set_attribute(self.node, LEVEL_ATTRIBUTE, &level.to_string());
        doc.set_attribute(self.node, PARENT_LEVEL_ATTRIBUTE, &parent_depth.to_string());
        doc.set_attribute(self.node, TOP_LEVEL_ATTRIBUTE, &top_level.to_string());

        contexts.publish(
            self.owner,
            ScopeContext {
                depth: level,
                enclosed: true,
            },
        );
        debug!(%level, parent_depth, top_level, "resolved section");
    }
}

#[cfg(test)]
#[path = "tests/scope.rs"]
mod tests;
