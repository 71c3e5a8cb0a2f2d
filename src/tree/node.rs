//! Arena node representation
//!
//! Node = (left, right, parent) links into the owning tree's arena.
//! Child links are the ownership edges; `parent` is a plain back-index.

use std::fmt;

/// Index of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child link of a parent points at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Reached through the parent's left link
    Left,

    /// Reached through the parent's right link
    Right,
}

/// Tree node (links only, no payload)
///
/// `None` is the absent value for every link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    /// Left child
    pub left: Option<NodeId>,

    /// Right child
    pub right: Option<NodeId>,

    /// Back-link to the node whose child link points here
    pub parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn with_parent(parent: Option<NodeId>) -> Self {
        Self {
            left: None,
            right: None,
            parent,
        }
    }

    /// Child link on the given side
    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Check if root (no parent)
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
