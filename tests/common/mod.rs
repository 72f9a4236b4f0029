#![allow(dead_code)]

use std::collections::VecDeque;
use treewalk::model::{Tree, TreeBuilder, VertexIndex};

// ============= Tree fixtures =============

/// root -> [A, B], A -> [A1, A2], B -> []
pub fn sample_tree() -> Tree<&'static str> {
    let mut builder = TreeBuilder::new("root");
    let a = builder.add_child(builder.root_index(), "A").unwrap();
    builder.add_child(builder.root_index(), "B").unwrap();
    builder.add_child(a, "A1").unwrap();
    builder.add_child(a, "A2").unwrap();
    builder.build()
}

/// Lone root.
pub fn single_node() -> Tree<&'static str> {
    TreeBuilder::new("root").build()
}

/// Builds a tree whose payloads are the vertex indices; vertex `i + 1`
/// is attached to `parents[i]`, which must be at most `i`.
pub fn from_parents(parents: &[VertexIndex]) -> Tree<usize> {
    let mut builder = TreeBuilder::with_capacity(0, parents.len() + 1);
    for (i, &parent) in parents.iter().enumerate() {
        builder.add_child(parent, i + 1).unwrap();
    }
    builder.build()
}

/// Path of `len` vertices: 0 -> 1 -> 2 -> ...
pub fn chain(len: usize) -> Tree<usize> {
    let parents: Vec<_> = (0..len.saturating_sub(1)).collect();
    from_parents(&parents)
}

/// Root with `width` leaf children.
pub fn star(width: usize) -> Tree<usize> {
    from_parents(&vec![0; width])
}

/// Complete tree with the given branching factor and height.
pub fn complete(branching: usize, height: usize) -> Tree<usize> {
    let mut builder = TreeBuilder::new(0);
    let mut frontier = vec![builder.root_index()];
    let mut next = 1;
    for _ in 0..height {
        let mut level = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                level.push(builder.add_child(parent, next).unwrap());
                next += 1;
            }
        }
        frontier = level;
    }
    builder.build()
}

/// Uneven tree mixing deep and shallow branches:
///
/// ```text
/// 0 -> [1, 2, 3]
/// 1 -> [4]
/// 4 -> [5, 6]
/// 6 -> [7]
/// 3 -> [8, 9]
/// ```
pub fn ragged() -> Tree<usize> {
    from_parents(&[0, 0, 0, 1, 4, 4, 6, 3, 3])
}

// ============= Reference orders (index based, no engine) =============

pub fn reference_pre_order<E: Clone>(tree: &Tree<E>) -> Vec<E> {
    let mut out = Vec::new();
    let mut stack = vec![0];
    while let Some(index) = stack.pop() {
        let vertex = tree.vertex(index);
        out.push(vertex.data().clone());
        stack.extend(vertex.children().iter().rev());
    }
    out
}

pub fn reference_post_order<E: Clone>(tree: &Tree<E>) -> Vec<E> {
    let mut out = Vec::new();
    let mut stack = vec![0];
    while let Some(index) = stack.pop() {
        let vertex = tree.vertex(index);
        out.push(vertex.data().clone());
        stack.extend(vertex.children().iter());
    }
    out.reverse();
    out
}

pub fn reference_level_order<E: Clone>(tree: &Tree<E>) -> Vec<E> {
    let mut out = Vec::new();
    let mut queue = VecDeque::from([0]);
    while let Some(index) = queue.pop_front() {
        let vertex = tree.vertex(index);
        out.push(vertex.data().clone());
        queue.extend(vertex.children().iter());
    }
    out
}
