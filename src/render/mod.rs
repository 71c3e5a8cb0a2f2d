//! ASCII rendering of tree shapes
//!
//! One render = one fresh canvas + one pointerless walk. Nothing is
//! streamed: the canvas is finished before a single byte is written, and
//! no state survives between calls, so rendering the same tree twice
//! gives identical output (and separate threads may render one tree
//! concurrently).
//!
//! ```
//! use treesketch::render::render_to_string;
//! use treesketch::tree::{BinaryTree, Shape};
//!
//! let tree = BinaryTree::from_shape(Some(&Shape::with_both(Shape::leaf(), Shape::leaf())));
//! assert_eq!(render_to_string(&tree).unwrap(), "*-*\n|\n*\n");
//! ```

mod engine;

pub use engine::{HORIZONTAL, MARKER, VERTICAL};

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::canvas::Canvas;
use crate::tree::{BinaryTree, NodeId};

/// Drawing position during one render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Canvas line
    pub row: usize,
    /// Column within the line
    pub col: usize,
}

/// Errors that can occur while rendering
///
/// The layout errors only fire for trees whose parent and child links
/// disagree; trees built through this crate never produce them.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Backward scan ran off the row without finding the parent's marker
    #[error("no marker left of column {col} on row {row}: tree links are inconsistent")]
    MissingMarker {
        /// Row being scanned
        row: usize,
        /// Column the scan stopped at
        col: usize,
    },

    /// Returning from a left child would move above the first row
    #[error("cursor moved above row 0 while leaving node {node}")]
    RowUnderflow {
        /// Node being left
        node: NodeId,
    },

    /// Writing to the output sink failed
    #[error("failed to write diagram: {0}")]
    Io(#[from] io::Error),
}

/// Draw `tree` onto a fresh canvas
///
/// An empty tree yields an empty canvas (zero lines).
pub fn draw(tree: &BinaryTree) -> Result<Canvas, RenderError> {
    if tree.is_empty() {
        debug!("empty tree, nothing to draw");
        return Ok(Canvas::new());
    }

    debug!(nodes = tree.size(), "drawing tree");
    let canvas = engine::Engine::new(tree).run()?;
    debug!(lines = canvas.line_count(), "diagram ready");
    Ok(canvas)
}

/// Draw `tree` and write every line, newline-terminated, to `sink`
pub fn render<W: Write + ?Sized>(tree: &BinaryTree, sink: &mut W) -> Result<(), RenderError> {
    let canvas = draw(tree)?;
    canvas.emit(sink)?;
    Ok(())
}

/// Draw `tree` into a `String` (same bytes as [`render`])
pub fn render_to_string(tree: &BinaryTree) -> Result<String, RenderError> {
    Ok(draw(tree)?.to_string())
}
