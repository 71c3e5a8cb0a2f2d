//! Stack-free DFS over parent back-links
//!
//! Key idea: never store a path. The only state is (current, previous);
//! where we came from is recovered by comparing `previous` against the
//! current node's parent/left/right links.
//!
//! Each node is entered at most three times (once per incident edge), so
//! a walk over n nodes takes at most 3n steps and O(1) extra space.

use super::{BinaryTree, NodeId};

/// Where the walk came from when it reached the current node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrival {
    /// First visit: came down from the parent
    FromParent,

    /// Came back up after finishing the left subtree
    FromLeft,

    /// Came back up after finishing the right subtree
    FromRight,
}

/// Where the walk goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move to the left child
    DescendLeft,

    /// Move to the right child
    DescendRight,

    /// Children exhausted, move to the parent
    Ascend,
}

impl Action {
    /// Decision table: (arrival, has left child, has right child) → action
    pub fn decide(arrival: Arrival, has_left: bool, has_right: bool) -> Self {
        match (arrival, has_left, has_right) {
            (Arrival::FromParent, true, _) => Action::DescendLeft,
            (Arrival::FromParent, false, true) => Action::DescendRight,
            (Arrival::FromParent, false, false) => Action::Ascend,
            (Arrival::FromLeft, _, true) => Action::DescendRight,
            (Arrival::FromLeft, _, false) => Action::Ascend,
            (Arrival::FromRight, _, _) => Action::Ascend,
        }
    }
}

/// One classified step of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Node the walk is standing on
    pub node: NodeId,

    /// How it got there
    pub arrival: Arrival,

    /// Where it goes next
    pub action: Action,
}

impl Step {
    /// True on the step that leaves `node` for good
    #[inline]
    pub fn finishes_node(&self) -> bool {
        self.action == Action::Ascend
    }
}

/// Pointerless walk over one subtree
///
/// Ends after the step that ascends out of the starting node, so walking
/// from an inner node never touches anything outside its subtree.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    tree: &'a BinaryTree,
    start: NodeId,
    current: Option<NodeId>,
    previous: Option<NodeId>,
}

impl<'a> Walk<'a> {
    /// Walk the subtree rooted at `start`
    pub fn new(tree: &'a BinaryTree, start: NodeId) -> Self {
        Self {
            tree,
            start,
            current: Some(start),
            // Looks like we just came down from the parent; for the root
            // this is the absent value, which matches its parent link.
            previous: tree.node(start).parent,
        }
    }

    /// Empty walk (used for empty trees)
    pub fn empty(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            start: NodeId(0),
            current: None,
            previous: None,
        }
    }

    fn classify(&self, id: NodeId) -> Arrival {
        let node = self.tree.node(id);
        if self.previous == node.parent {
            Arrival::FromParent
        } else if self.previous.is_some() && self.previous == node.left {
            Arrival::FromLeft
        } else {
            debug_assert_eq!(self.previous, node.right, "walk lost track at {id}");
            Arrival::FromRight
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let id = self.current?;
        let node = self.tree.node(id);

        let arrival = self.classify(id);
        let action = Action::decide(arrival, node.left.is_some(), node.right.is_some());

        let next = match action {
            Action::DescendLeft => node.left,
            Action::DescendRight => node.right,
            Action::Ascend if id == self.start => None,
            Action::Ascend => node.parent,
        };

        self.previous = Some(id);
        self.current = next;

        Some(Step {
            node: id,
            arrival,
            action,
        })
    }
}
