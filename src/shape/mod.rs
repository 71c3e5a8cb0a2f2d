//! Tree shape generators
//!
//! `random_tree` follows the random-BST splitting rule: for a count n,
//! pick ml uniformly from [0, n), give ml nodes to the left subtree and
//! n - ml - 1 to the right. This is NOT uniform over all shapes of size n
//! (it favours balanced-ish shapes the way random insertion order does).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::tree::{BinaryTree, NodeId, Side, TreeBuilder};

/// Random shape with exactly `n` nodes (`n = 0` gives the empty tree)
///
/// Split points are drawn in pre-order (node, left subtree, right
/// subtree), matching the recursive definition draw for draw, but the
/// construction itself uses an explicit worklist.
pub fn random_tree<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BinaryTree {
    let mut builder = TreeBuilder::with_capacity(n);
    if n == 0 {
        return builder.finish();
    }

    // (slot to fill, node count for that subtree)
    let mut pending: Vec<(Option<(NodeId, Side)>, usize)> = vec![(None, n)];

    while let Some((slot, count)) = pending.pop() {
        let created = match slot {
            None => builder.root(),
            Some((parent, side)) => builder.attach(parent, side),
        };
        // Every slot is queued once, on a node that was just created.
        let Ok(id) = created else { continue };

        let ml = rng.gen_range(0..count);
        let mr = count - ml - 1;

        // Right pushed first so the left subtree is built (and drawn for) first.
        if mr > 0 {
            pending.push((Some((id, Side::Right)), mr));
        }
        if ml > 0 {
            pending.push((Some((id, Side::Left)), ml));
        }
    }

    let tree = builder.finish();
    debug!(nodes = n, height = tree.height(), "generated random tree");
    tree
}

/// Reproducible random shape
pub fn random_tree_seeded(n: usize, seed: u64) -> BinaryTree {
    let mut rng = StdRng::seed_from_u64(seed);
    random_tree(n, &mut rng)
}

/// Random shape from OS entropy
pub fn random_tree_unseeded(n: usize) -> BinaryTree {
    random_tree(n, &mut rand::thread_rng())
}

/// `k` nodes, each the left child of the previous one
pub fn left_chain(k: usize) -> BinaryTree {
    chain(k, Side::Left)
}

/// `k` nodes, each the right child of the previous one
pub fn right_chain(k: usize) -> BinaryTree {
    chain(k, Side::Right)
}

fn chain(k: usize, side: Side) -> BinaryTree {
    let mut builder = TreeBuilder::with_capacity(k);
    let mut tail = None;
    for _ in 0..k {
        let next = match tail {
            None => builder.root(),
            Some(parent) => builder.attach(parent, side),
        };
        match next {
            Ok(id) => tail = Some(id),
            Err(_) => break,
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tree_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..50 {
            let tree = random_tree(n, &mut rng);
            assert_eq!(tree.size(), n);
            assert_eq!(tree.is_empty(), n == 0);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = random_tree_seeded(40, 99);
        let b = random_tree_seeded(40, 99);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_chains() {
        let left = left_chain(3);
        assert_eq!(left.size(), 3);
        assert_eq!(left.height(), 3);
        assert_eq!(left.to_string(), "((()))");

        let right = right_chain(4);
        assert_eq!(right.height(), 4);
        assert!(left_chain(0).is_empty());
    }
}
