//! Tree model consumed by the traversal engine.
//!
//! # Node abstraction
//! The engine in [crate::traversal] depends only on the [TreeNode] trait:
//! parent lookup, ordered children, child count, indexed child access,
//! payload access and leaf test. Any tree exposing these can be traversed.
//!
//! # Arena tree
//! [Tree] is the provided implementation. It uses the arena pattern to store
//! [Vertex] values referenced by [VertexIndex]; [NodeRef] is the copyable
//! handle that implements [TreeNode]. Trees are assembled with a
//! [TreeBuilder] and are immutable afterwards.
//!
//! | Type | Role |
//! |------|------|
//! | [TreeNode] | Capability set required by traversals |
//! | [Tree] | Arena storage, read-only once built |
//! | [NodeRef] | Handle into a [Tree], implements [TreeNode] |
//! | [TreeBuilder] | Top-down construction of a [Tree] |

pub mod node;
pub mod tree;
pub mod tree_builder;
pub mod vertex;

pub use node::TreeNode;
pub use tree::{Children, NodeRef, ROOT_INDEX, Tree, VertexIndex};
pub use tree_builder::TreeBuilder;
pub use vertex::Vertex;
