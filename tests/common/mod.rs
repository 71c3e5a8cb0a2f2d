#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use treesketch::Shape;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("TREESKETCH_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set TREESKETCH_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Every shape with exactly `n` nodes (Catalan(n) of them)
pub fn all_shapes(n: usize) -> Vec<Option<Shape>> {
    if n == 0 {
        return vec![None];
    }
    let mut shapes = Vec::new();
    for ml in 0..n {
        let lefts = all_shapes(ml);
        let rights = all_shapes(n - ml - 1);
        for left in &lefts {
            for right in &rights {
                shapes.push(Some(Shape::node(left.clone(), right.clone())));
            }
        }
    }
    shapes
}

/// Recursive reference layout, written independently of the walk:
/// left child two rows down, right child two columns past everything
/// placed so far.
pub fn reference_lines(shape: Option<&Shape>) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = Vec::new();
    let mut max_col = 0;
    if let Some(shape) = shape {
        place(shape, 0, 0, &mut grid, &mut max_col);
    }
    grid.into_iter().map(|line| line.into_iter().collect()).collect()
}

fn put(grid: &mut Vec<Vec<char>>, row: usize, col: usize, ch: char) {
    if grid.len() <= row {
        grid.resize_with(row + 1, Vec::new);
    }
    let line = &mut grid[row];
    if line.len() <= col {
        line.resize(col + 1, ' ');
    }
    line[col] = ch;
}

fn place(shape: &Shape, row: usize, col: usize, grid: &mut Vec<Vec<char>>, max_col: &mut usize) {
    put(grid, row, col, '*');
    if let Some(left) = shape.left() {
        put(grid, row + 1, col, '|');
        place(left, row + 2, col, grid, max_col);
    }
    if let Some(right) = shape.right() {
        let child_col = if shape.left().is_some() {
            for c in col + 1..=*max_col + 1 {
                put(grid, row, c, '-');
            }
            *max_col + 2
        } else {
            put(grid, row, col + 1, '-');
            col + 2
        };
        *max_col = (*max_col).max(child_col);
        place(right, row, child_col, grid, max_col);
    }
}
