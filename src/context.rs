//! The ambient scope context seen by each part of the tree.
//!
//! Contexts form a stack threaded through the walk. A section pushes a frame when it attaches or
//! updates and pops it when its subtree is finished or it detaches, so a frame is only ever
//! visible to the descendants of the section that published it.

use crate::dom::NodeId;
use crate::level::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a section publishes for its descendants.
pub struct ScopeContext {
    /// Resolved (clamped) level of the publishing section.
    pub depth: Level,
    /// Set once any section encloses this point; descendants are never top-level.
    pub enclosed: bool,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    owner: NodeId,
    context: ScopeContext,
}

#[derive(Clone, Debug, Default)]
/// Stack of published contexts, innermost last.
pub struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    #[must_use]
    /// Creates an empty stack: the walk starts outside every section.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// The context in effect at the current point of the walk.
    pub fn current(&self) -> Option<ScopeContext> {
        self.frames.last().map(|frame| frame.context)
    }

    #[must_use]
    /// Depth published by the nearest enclosing section.
    pub fn ambient_depth(&self) -> Option<Level> {
        self.current().map(|context| context.depth)
    }

    #[must_use]
    /// Number of sections currently enclosing the walk.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    /// Whether the walk is outside every section.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Publishes `context` for the descendants of `owner`.
    ///
    /// A frame already on top for the same owner is overwritten rather than stacked.
    pub fn publish(&mut self, owner: NodeId, context: ScopeContext) {
        match self.frames.last_mut() {
            Some(frame) if frame.owner == owner => frame.context = context,
            _ => self.frames.push(Frame { owner, context }),
        }
    }

    /// Drops the frame `owner` published along with anything pushed above it.
    ///
    /// Returns whether a frame was removed. Owners without a frame leave the stack untouched.
    pub fn restore(&mut self, owner: NodeId) -> bool {
        match self.frames.iter().rposition(|frame| frame.owner == owner) {
            Some(index) => {
                self.frames.truncate(index);
                true
            }
            None => false,
        }
    }

    /// Forgets every frame, e.g. after a walk was aborted halfway.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
#[path = "tests/context.rs"]
mod tests;
