//! # Stack-free ASCII sketches of binary tree shapes
//!
//! Builds a binary tree shape and draws it as text:
//!
//! ```text
//! *---*-*
//! |   |
//! *-* *
//! |
//! *
//! ```
//!
//! Left children hang below their parent (`|`), right children sit to the
//! right on the same row (`-`).
//!
//! ## Core Algorithm
//!
//! 1. **Pointerless walk**: only (current, previous) are kept; the
//!    direction of each step is inferred from which link `previous` is
//! 2. **Decision table**: (arrival, has left, has right) → next move
//! 3. **Cursor bookkeeping**: row/col plus the furthest column used, with
//!    a return rule that restores the parent's position on the way up
//! 4. **Growable canvas**: lines padded on demand, never shifted
//!
//! ## Usage Example
//!
//! ```
//! use treesketch::{sketch, SketchConfig};
//!
//! let config = SketchConfig::new(5).with_seed(42);
//! let mut out = Vec::new();
//! let tree = sketch(&config, &mut out)?;
//! assert_eq!(tree.size(), 5);
//! # Ok::<(), treesketch::SketchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod tree;    // Arena tree, parent back-links, pointerless walk
pub mod canvas;  // Growable text canvas
pub mod render;  // Drawing engine + render driver
pub mod shape;   // Random and fixed shape generators

// Re-exports for convenience
pub use canvas::Canvas;
pub use render::{draw, render, render_to_string, RenderError};
pub use tree::{BinaryTree, NodeId, Shape, Side, TreeBuilder, TreeError};

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

/// Parameters for one generate-and-draw run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchConfig {
    /// Number of nodes in the generated tree
    pub node_count: usize,

    /// RNG seed (`None` = fresh entropy every run)
    pub seed: Option<u64>,

    /// Print `Number of nodes: <n>` before the diagram
    pub header: bool,
}

impl SketchConfig {
    /// Random shape with `node_count` nodes, header on, unseeded
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            seed: None,
            header: true,
        }
    }

    /// Use a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Skip the `Number of nodes` line
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }
}

/// Errors that can occur during a sketch run
#[derive(Error, Debug)]
pub enum SketchError {
    /// Tree assembly failed
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Drawing failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the header failed
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Generate a tree per `config`, then write header and diagram to `out`
///
/// Returns the generated tree so callers can inspect or re-render it.
pub fn sketch<W: Write + ?Sized>(config: &SketchConfig, out: &mut W) -> Result<BinaryTree, SketchError> {
    let tree = match config.seed {
        Some(seed) => shape::random_tree_seeded(config.node_count, seed),
        None => shape::random_tree_unseeded(config.node_count),
    };
    info!(nodes = config.node_count, seed = ?config.seed, "sketching random tree");

    if config.header {
        writeln!(out, "Number of nodes: {}", config.node_count)?;
    }
    render(&tree, out)?;
    Ok(tree)
}
