//! Arena-backed binary tree with parent back-links
//!
//! Child links own, parent links only point back. Both are indices into
//! one `Vec<Node>`, so there is no reference cycle and the absent value
//! is simply `None`.
//!
//! Invariant (kept by `TreeBuilder`): for every non-root node `u`,
//! `parent(u).child(side_of(u)) == u`.

mod node;
mod traversal;

pub use node::{Node, NodeId, Side};
pub use traversal::{Action, Arrival, Step, Walk};

use std::fmt;

use thiserror::Error;

/// Errors raised while assembling a tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// `root()` called on a builder that already has one
    #[error("tree already has a root")]
    RootExists,

    /// Parent id does not belong to this builder
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    /// Child link is already set
    #[error("{side:?} child of node {parent} is already set")]
    SlotOccupied {
        /// Node whose link was targeted
        parent: NodeId,
        /// Link that was already taken
        side: Side,
    },
}

/// Binary tree shape (no keys, no payload)
///
/// Read-only once built; use [`TreeBuilder`], [`BinaryTree::from_shape`]
/// or the generators in [`crate::shape`] to make one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl BinaryTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree with exactly the given shape (`None` = empty tree)
    pub fn from_shape(shape: Option<&Shape>) -> Self {
        let mut builder = TreeBuilder::new();
        let Some(shape) = shape else {
            return builder.finish();
        };

        let mut pending = Vec::new();
        if let Ok(root) = builder.root() {
            pending.push((shape, root));
        }

        while let Some((shape, id)) = pending.pop() {
            for (side, child) in [(Side::Left, shape.left()), (Side::Right, shape.right())] {
                if let Some(child) = child {
                    // Fresh node, fresh slots: attach cannot fail here.
                    if let Ok(child_id) = builder.attach(id, side) {
                        pending.push((child, child_id));
                    }
                }
            }
        }

        builder.finish()
    }

    /// Root link (`None` if empty)
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node by id
    ///
    /// Ids are only meaningful for the tree that produced them; a foreign
    /// id is a caller bug and panics on out-of-range access.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Node by id, `None` for ids outside this tree
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Left child of `id`
    #[inline]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    /// Right child of `id`
    #[inline]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    /// Parent of `id` (`None` for the root)
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Which of its parent's links points at `id` (`None` for the root)
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.node(self.parent(id)?);
        if parent.left == Some(id) {
            Some(Side::Left)
        } else if parent.right == Some(id) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// True iff the root link is absent
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_size(root))
    }

    /// Number of nodes in the subtree rooted at `id`
    ///
    /// Counts first visits of a pointerless walk, so deep trees cannot
    /// overflow the call stack.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        Walk::new(self, id)
            .filter(|step| step.arrival == Arrival::FromParent)
            .count()
    }

    /// Nodes on the longest root-to-leaf path (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut depth = 0usize;
        let mut height = 0usize;
        for step in self.walk() {
            if step.arrival == Arrival::FromParent {
                depth += 1;
                height = height.max(depth);
            }
            if step.finishes_node() {
                depth -= 1;
            }
        }
        height
    }

    /// Pointerless walk over the whole tree
    pub fn walk(&self) -> Walk<'_> {
        match self.root {
            Some(root) => Walk::new(self, root),
            None => Walk::empty(self),
        }
    }
}

/// Fully parenthesized shape: each node is `(` left right `)`.
impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.walk() {
            if step.arrival == Arrival::FromParent {
                f.write_str("(")?;
            }
            if step.finishes_node() {
                f.write_str(")")?;
            }
        }
        Ok(())
    }
}

/// Incremental tree construction
///
/// Every attach sets the child link and the parent back-link together.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    /// Start an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Create the root node
    pub fn root(&mut self) -> Result<NodeId, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let id = self.push(Node::with_parent(None));
        self.root = Some(id);
        Ok(id)
    }

    /// Create a node and hang it off `parent` on `side`
    pub fn attach(&mut self, parent: NodeId, side: Side) -> Result<NodeId, TreeError> {
        let slot = self
            .nodes
            .get(parent.0)
            .ok_or(TreeError::UnknownNode(parent))?
            .child(side);
        if slot.is_some() {
            return Err(TreeError::SlotOccupied { parent, side });
        }

        let id = self.push(Node::with_parent(Some(parent)));
        *self.nodes[parent.0].child_mut(side) = Some(id);
        Ok(id)
    }

    /// Nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been created yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze into a read-only tree
    pub fn finish(self) -> BinaryTree {
        BinaryTree {
            nodes: self.nodes,
            root: self.root,
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

/// Owned description of a tree shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    left: Option<Box<Shape>>,
    right: Option<Box<Shape>>,
}

impl Shape {
    /// Single node
    pub fn leaf() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// Node with only a left child
    pub fn with_left(left: Shape) -> Self {
        Self {
            left: Some(Box::new(left)),
            right: None,
        }
    }

    /// Node with only a right child
    pub fn with_right(right: Shape) -> Self {
        Self {
            left: None,
            right: Some(Box::new(right)),
        }
    }

    /// Node with both children
    pub fn with_both(left: Shape, right: Shape) -> Self {
        Self {
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Node with optional children
    pub fn node(left: Option<Shape>, right: Option<Shape>) -> Self {
        Self {
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Left subtree
    pub fn left(&self) -> Option<&Shape> {
        self.left.as_deref()
    }

    /// Right subtree
    pub fn right(&self) -> Option<&Shape> {
        self.right.as_deref()
    }
}
