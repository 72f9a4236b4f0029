//! Vertex module for arena tree representation.

use crate::model::tree::VertexIndex;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) of an arena [Tree](crate::model::Tree).
///
/// A vertex is either:
/// - **Root**: has no parent, any number of children
/// - **Internal**: has a parent and at least one child
/// - **Leaf**: has a parent (or is a lone root) and no children
///
/// # Invariants
/// - `index` is the position of this vertex in the arena
/// - `parent` is `None` only for the root
/// - `children` are arena indices, kept in insertion order (= traversal order)
#[derive(PartialEq, Debug, Clone)]
pub struct Vertex<E> {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Index of the parent vertex, `None` for the root
    parent: Option<VertexIndex>,
    /// Indices of the child vertices, in order
    children: Vec<VertexIndex>,
    /// Payload of this vertex
    data: E,
}

impl<E> Vertex<E> {
    /// Creates a new root vertex without children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `data` - Payload of this vertex
    pub fn new_root(index: VertexIndex, data: E) -> Self {
        Vertex {
            index,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Creates a new non-root vertex without children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `parent` - Index of the parent vertex
    /// * `data` - Payload of this vertex
    pub fn new_child(index: VertexIndex, parent: VertexIndex, data: E) -> Self {
        Vertex {
            index,
            parent: Some(parent),
            children: Vec::new(),
            data,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` if this is the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns the indices of the children, in order.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns a reference to the payload.
    pub fn data(&self) -> &E {
        &self.data
    }

    /// Returns `true` if this vertex is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this vertex has a parent and children.
    pub fn is_internal(&self) -> bool {
        !self.is_root() && !self.is_leaf()
    }

    /// Appends a child index; only used while building.
    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}
