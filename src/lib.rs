//! Treewalk is a library to traverse N-ary trees without recursion.
//!
//! This crate offers pre-order, post-order and level-order traversal of any
//! tree that exposes a small read-only node interface, together with an
//! arena tree implementation of that interface.
//! Core functionality provided:
//! - Node abstraction: [TreeNode](model::TreeNode) with parent lookup, ordered
//!   children, child count, indexed child access, payload access and leaf test.
//! - Traversals:
//!   - [PreOrder]: parents before children.
//!   - [PostOrder]: children before parents.
//!   - [LevelOrder]: breadth-first, grouped by depth.
//!   - [Traversal]: any of the above, selected at runtime by [TraversalOrder].
//! - Tree model: [Tree](model::Tree) built with a
//!   [TreeBuilder](model::TreeBuilder), immutable afterwards.
//!   See [crate::model] for more details.
//!
//! Traversals keep their position in a cursor holding one child index per
//! depth, never in the call stack, so deep trees (e.g. long chains) are safe.
//! Each traversal is lazy, finite and single-pass.
//!
//! Limitations:
//! - Trees must not change while a traversal over them is alive
//!   ([Tree](model::Tree) is immutable, so this only concerns custom
//!   [TreeNode](model::TreeNode) implementations).
//! - Traversals are read-only; `remove()` always fails.
//! - Level-order re-descends from the root for every level, which is
//!   quadratic in depth on path-like trees.
//!
//! # Usage patterns
//! 1. Iterate a [Tree](model::Tree) directly with
//!    [`pre_order_iter`](model::Tree::pre_order_iter) and friends.
//! 2. Traverse any [TreeNode](model::TreeNode) root via the quick API below
//!    or the sequencer constructors, which reject non-root nodes.
//!
//! ## Example
//! ```
//! use treewalk::model::TreeBuilder;
//! use treewalk::{TraversalOrder, traverse};
//!
//! let mut builder = TreeBuilder::new("root");
//! let a = builder.add_child(builder.root_index(), "A")?;
//! builder.add_child(builder.root_index(), "B")?;
//! builder.add_child(a, "A1")?;
//! builder.add_child(a, "A2")?;
//! let tree = builder.build();
//!
//! let pre: Vec<_> = tree.pre_order_iter().copied().collect();
//! assert_eq!(pre, ["root", "A", "A1", "A2", "B"]);
//!
//! let post: Vec<_> = treewalk::post_order(tree.root())?.copied().collect();
//! assert_eq!(post, ["A1", "A2", "A", "B", "root"]);
//!
//! let level: Vec<_> = traverse(tree.root(), TraversalOrder::LevelOrder)?
//!     .copied()
//!     .collect();
//! assert_eq!(level, ["root", "A", "B", "A1", "A2"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod model;
pub mod traversal;

pub use error::{TraversalError, TreeError};
pub use traversal::{LevelOrder, PostOrder, PreOrder, Traversal, TraversalOrder};

use crate::model::TreeNode;

// ============================================================================
// Quick Traversal API
// ============================================================================
/// Traverses the tree rooted at `root` in pre-order.
///
/// See [`PreOrder::new`] for full documentation.
pub fn pre_order<N: TreeNode>(root: N) -> Result<PreOrder<N>, TraversalError> {
    PreOrder::new(root)
}

/// Traverses the tree rooted at `root` in post-order.
///
/// See [`PostOrder::new`] for full documentation.
pub fn post_order<N: TreeNode>(root: N) -> Result<PostOrder<N>, TraversalError> {
    PostOrder::new(root)
}

/// Traverses the tree rooted at `root` in level-order.
///
/// See [`LevelOrder::new`] for full documentation.
pub fn level_order<N: TreeNode>(root: N) -> Result<LevelOrder<N>, TraversalError> {
    LevelOrder::new(root)
}

/// Traverses the tree rooted at `root` in the given order.
///
/// See [`Traversal::new`] for full documentation.
pub fn traverse<N: TreeNode>(root: N, order: TraversalOrder) -> Result<Traversal<N>, TraversalError> {
    Traversal::new(root, order)
}
