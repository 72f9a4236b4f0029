//! Provides an arena tree representation.
//!
//! Provides core data structures for representing N-ary trees:
//! * [`Tree<E>`] - Immutable tree using the arena pattern
//! * [NodeRef] - Cheap handle to a vertex, implementing [TreeNode]
//! * [Children] - Iterator over the children of a vertex
//! * [VertexIndex] as type used to index vertices in tree

use crate::model::node::TreeNode;
use crate::model::vertex::Vertex;
use crate::traversal::cursor::Cursor;
use crate::traversal::{LevelOrder, PostOrder, PreOrder, Traversal, TraversalOrder};
use std::fmt;
use std::slice;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// Index of the root in every arena.
pub const ROOT_INDEX: VertexIndex = 0;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// An N-ary tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Aim is to avoid referencing troubles as well as to provide
/// efficient memory layout and cache locality for traversal operations.
///
/// # Structure
/// - All vertices are stored in the arena, the root at [ROOT_INDEX].
/// - Every non-root vertex has a smaller index than its children.
/// - Children are kept in insertion order, which is traversal order.
///
/// # Construction
/// Trees are assembled top-down with a
/// [TreeBuilder](crate::model::TreeBuilder) and are immutable afterwards,
/// so the child order seen by a traversal never changes under it.
#[derive(Debug, Clone)]
pub struct Tree<E> {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex<E>>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<E> Tree<E> {
    /// Wraps an arena assembled by the builder.
    pub(crate) fn from_vertices(vertices: Vec<Vertex<E>>) -> Self {
        Tree { vertices }
    }

    /// Returns a handle to the root vertex.
    pub fn root(&self) -> NodeRef<'_, E> {
        NodeRef {
            tree: self,
            index: ROOT_INDEX,
        }
    }

    /// Returns a handle to the vertex at `index`, or `None` if out of bounds.
    pub fn node(&self, index: VertexIndex) -> Option<NodeRef<'_, E>> {
        (index < self.vertices.len()).then_some(NodeRef { tree: self, index })
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex<E> {
        &self[index]
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices (neither root nor leaf).
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the height of this tree, that is, the largest depth of any
    /// vertex (0 for a lone root).
    pub fn height(&self) -> usize {
        // Parents precede their children in the arena
        let mut depths = vec![0usize; self.vertices.len()];
        let mut height = 0;
        for vertex in &self.vertices {
            if let Some(parent) = vertex.parent() {
                let depth = depths[parent] + 1;
                depths[vertex.index()] = depth;
                height = height.max(depth);
            }
        }

        height
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Tree is non-empty and the vertex at [ROOT_INDEX] has no parent
    /// - All vertex indices match their position in the arena
    /// - Only the root lacks a parent
    /// - All child indices are valid and point back to correct parent
    /// - All parent indices are valid, smaller than the vertex index,
    ///   and list this vertex as a child
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        match self.vertices.get(ROOT_INDEX) {
            Some(root) if root.is_root() => {}
            _ => return false,
        }

        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }

            for &child in vertex.children() {
                match self.vertices.get(child) {
                    Some(c) if c.parent() == Some(index) => {}
                    _ => return false,
                }
            }

            match vertex.parent() {
                None if index != ROOT_INDEX => return false,
                None => {}
                Some(parent) => {
                    if parent >= index {
                        return false;
                    }
                    if !self.vertices[parent].children().contains(&index) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl<E> std::ops::Index<VertexIndex> for Tree<E> {
    type Output = Vertex<E>;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<E> Tree<E> {
    /// Returns an iterator over the payloads in pre-order (parents before children).
    ///
    /// # Example
    /// ```
    /// use treewalk::model::TreeBuilder;
    ///
    /// let mut builder = TreeBuilder::new("root");
    /// let a = builder.add_child(builder.root_index(), "A").unwrap();
    /// builder.add_child(a, "A1").unwrap();
    /// builder.add_child(builder.root_index(), "B").unwrap();
    /// let tree = builder.build();
    ///
    /// let order: Vec<_> = tree.pre_order_iter().copied().collect();
    /// assert_eq!(order, ["root", "A", "A1", "B"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrder<NodeRef<'_, E>> {
        PreOrder::from_cursor(Cursor::new(self.root()))
    }

    /// Returns an iterator over the payloads in post-order (children before parents).
    ///
    /// Useful for aggregating data from leaves upward.
    pub fn post_order_iter(&self) -> PostOrder<NodeRef<'_, E>> {
        PostOrder::from_cursor(Cursor::new(self.root()))
    }

    /// Returns an iterator over the payloads in level-order (breadth-first,
    /// grouped by depth).
    pub fn level_order_iter(&self) -> LevelOrder<NodeRef<'_, E>> {
        LevelOrder::from_cursor(Cursor::new(self.root()))
    }

    /// Returns an iterator over the payloads in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<NodeRef<'_, E>> {
        match order {
            TraversalOrder::PreOrder => Traversal::PreOrder(self.pre_order_iter()),
            TraversalOrder::PostOrder => Traversal::PostOrder(self.post_order_iter()),
            TraversalOrder::LevelOrder => Traversal::LevelOrder(self.level_order_iter()),
        }
    }
}

// =#========================================================================#=
// NODE REF
// =#========================================================================#=
/// Handle to one vertex of a [Tree], implementing [TreeNode].
pub struct NodeRef<'a, E> {
    tree: &'a Tree<E>,
    index: VertexIndex,
}

impl<'a, E> NodeRef<'a, E> {
    /// Returns the arena index of the referenced vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the referenced vertex.
    pub fn vertex(&self) -> &'a Vertex<E> {
        &self.tree.vertices[self.index]
    }

    fn at(&self, index: VertexIndex) -> Self {
        NodeRef {
            tree: self.tree,
            index,
        }
    }
}

// Manual impls: a handle is copyable regardless of `E`.
impl<E> Clone for NodeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NodeRef<'_, E> {}

impl<E> PartialEq for NodeRef<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl<E> Eq for NodeRef<'_, E> {}

impl<E> fmt::Debug for NodeRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("index", &self.index).finish()
    }
}

impl<'a, E> TreeNode for NodeRef<'a, E> {
    type Data = &'a E;
    type Children = Children<'a, E>;

    fn data(&self) -> &'a E {
        self.vertex().data()
    }

    fn parent(&self) -> Option<Self> {
        self.vertex().parent().map(|p| self.at(p))
    }

    fn children(&self) -> Children<'a, E> {
        Children {
            tree: self.tree,
            inner: self.vertex().children().iter(),
        }
    }

    fn number_of_children(&self) -> usize {
        self.vertex().num_children()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        self.vertex().children().get(index).map(|&c| self.at(c))
    }

    fn is_leaf(&self) -> bool {
        self.vertex().is_leaf()
    }

    fn is_root(&self) -> bool {
        self.vertex().is_root()
    }
}

/// Iterator over the children of a vertex, see [TreeNode::children].
pub struct Children<'a, E> {
    tree: &'a Tree<E>,
    inner: slice::Iter<'a, VertexIndex>,
}

impl<'a, E> Iterator for Children<'a, E> {
    type Item = NodeRef<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let &index = self.inner.next()?;
        Some(NodeRef {
            tree: self.tree,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Children<'_, E> {}
