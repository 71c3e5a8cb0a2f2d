//! Drawing engine: turns walk steps into canvas writes
//!
//! Layout: left children hang two rows below their parent in the same
//! column (joined by `|`), right children sit on the parent's row past
//! everything drawn so far (joined by a run of `-`).
//!
//! Per step:
//!   FromParent  → write `*` (first and only visit that marks)
//!   DescendLeft → `|` underneath, row += 2
//!   DescendRight (no left child) → one `-`, col += 2
//!   DescendRight (after left subtree) → `-` out to max_col, col = max_col + 2
//!   Ascend      → return rule (undo the descent that led here)

use tracing::trace;

use super::{Cursor, RenderError};
use crate::canvas::Canvas;
use crate::tree::{Action, Arrival, BinaryTree, NodeId, Side, Step};

/// One mark per node
pub const MARKER: char = '*';
/// Vertical connector (parent above, left child below)
pub const VERTICAL: char = '|';
/// Horizontal connector (parent left, right child right)
pub const HORIZONTAL: char = '-';

/// Per-render drawing state
#[derive(Debug)]
pub(super) struct Engine<'t> {
    tree: &'t BinaryTree,
    canvas: Canvas,
    cursor: Cursor,
    /// Furthest column any right child has been placed at
    max_col: usize,
}

impl<'t> Engine<'t> {
    pub(super) fn new(tree: &'t BinaryTree) -> Self {
        Self {
            tree,
            canvas: Canvas::new(),
            cursor: Cursor::default(),
            max_col: 0,
        }
    }

    /// Walk the whole tree and hand back the finished canvas
    pub(super) fn run(mut self) -> Result<Canvas, RenderError> {
        for step in self.tree.walk() {
            self.apply(step)?;
        }
        Ok(self.canvas)
    }

    fn apply(&mut self, step: Step) -> Result<(), RenderError> {
        trace!(
            node = %step.node,
            arrival = ?step.arrival,
            action = ?step.action,
            row = self.cursor.row,
            col = self.cursor.col,
            "step"
        );

        let Cursor { row, col } = self.cursor;
        let first_visit = step.arrival == Arrival::FromParent;
        if first_visit {
            self.canvas.write_at(row, col, MARKER);
        }

        match step.action {
            Action::DescendLeft => {
                self.canvas.write_at(row + 1, col, VERTICAL);
                self.cursor.row += 2;
            }
            Action::DescendRight if first_visit => {
                self.canvas.append_at(row, HORIZONTAL);
                self.cursor.col += 2;
                self.bump_extent();
            }
            Action::DescendRight => {
                // Left subtree may reach further right; clear it.
                while self.cursor.col <= self.max_col {
                    self.canvas.append_at(row, HORIZONTAL);
                    self.cursor.col += 1;
                }
                self.cursor.col += 1;
                self.bump_extent();
            }
            Action::Ascend => self.return_to_parent(step.node)?,
        }

        Ok(())
    }

    fn bump_extent(&mut self) {
        self.max_col = self.max_col.max(self.cursor.col);
    }

    /// Move the cursor back to the parent's marker
    fn return_to_parent(&mut self, node: NodeId) -> Result<(), RenderError> {
        match self.tree.side_of(node) {
            None => Ok(()),
            Some(Side::Left) => {
                self.cursor.row = self
                    .cursor
                    .row
                    .checked_sub(2)
                    .ok_or(RenderError::RowUnderflow { node })?;
                Ok(())
            }
            Some(Side::Right) => self.scan_back_to_marker(),
        }
    }

    /// Step left along the current row until just past the nearest `*`,
    /// then onto it.
    fn scan_back_to_marker(&mut self) -> Result<(), RenderError> {
        let Cursor { row, mut col } = self.cursor;
        loop {
            let prev = col
                .checked_sub(1)
                .and_then(|c| self.canvas.char_at(row, c))
                .ok_or(RenderError::MissingMarker { row, col })?;
            if prev == MARKER {
                break;
            }
            col -= 1;
        }
        self.cursor.col = col - 1;
        Ok(())
    }
}
