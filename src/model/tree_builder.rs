//! One-shot builder for arena trees.
//!
//! A [TreeBuilder] starts from a root payload and grows the tree top-down:
//! every [`add_child`](TreeBuilder::add_child) appends a child to an already
//! existing vertex, so parents always precede their children in the arena.
//! [`build`](TreeBuilder::build) consumes the builder and hands out an
//! immutable [Tree].
//!
//! ```text
//! new(root) ──→ add_child()* ──→ build() ──→ Tree (read-only)
//! ```

use crate::error::TreeError;
use crate::model::tree::{ROOT_INDEX, Tree, VertexIndex};
use crate::model::vertex::Vertex;
use tracing::trace;

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Assembles a [Tree] vertex by vertex.
///
/// # Example
/// ```
/// use treewalk::model::TreeBuilder;
///
/// let mut builder = TreeBuilder::new("root");
/// let a = builder.add_child(builder.root_index(), "A")?;
/// builder.add_child(a, "A1")?;
/// builder.add_child(a, "A2")?;
/// builder.add_child(builder.root_index(), "B")?;
///
/// let tree = builder.build();
/// assert_eq!(tree.num_vertices(), 5);
/// assert_eq!(tree.height(), 2);
/// # Ok::<(), treewalk::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder<E> {
    vertices: Vec<Vertex<E>>,
}

impl<E> TreeBuilder<E> {
    /// Creates a builder holding only a root with the given payload.
    pub fn new(root_data: E) -> Self {
        TreeBuilder {
            vertices: vec![Vertex::new_root(ROOT_INDEX, root_data)],
        }
    }

    /// Creates a builder with room for `capacity` vertices.
    pub fn with_capacity(root_data: E, capacity: usize) -> Self {
        let mut vertices = Vec::with_capacity(capacity.max(1));
        vertices.push(Vertex::new_root(ROOT_INDEX, root_data));
        TreeBuilder { vertices }
    }

    /// Returns the index of the root vertex.
    pub fn root_index(&self) -> VertexIndex {
        ROOT_INDEX
    }

    /// Returns the number of vertices added so far (root included).
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Appends a new last child to `parent`, returning the index of the child.
    ///
    /// # Errors
    /// [TreeError::UnknownParent] if `parent` does not refer to a vertex
    /// added earlier.
    pub fn add_child(&mut self, parent: VertexIndex, data: E) -> Result<VertexIndex, TreeError> {
        let index = self.vertices.len();
        let parent_vertex = self
            .vertices
            .get_mut(parent)
            .ok_or(TreeError::UnknownParent(parent))?;
        parent_vertex.push_child(index);
        self.vertices.push(Vertex::new_child(index, parent, data));

        trace!(parent, index, "added child vertex");
        Ok(index)
    }

    /// Finishes construction and returns the tree.
    pub fn build(self) -> Tree<E> {
        Tree::from_vertices(self.vertices)
    }
}
