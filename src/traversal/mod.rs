//! Non-recursive traversal engine for N-ary trees.
//!
//! Three sequencers walk any [TreeNode] tree without recursion:
//!
//! | Type | Order | Example for `root -> [A, B], A -> [A1, A2]` |
//! |------|-------|---------------------------------------------|
//! | [PreOrder] | parent before children | `root, A, A1, A2, B` |
//! | [PostOrder] | children before parent | `A1, A2, A, B, root` |
//! | [LevelOrder] | breadth-first by depth | `root, A, B, A1, A2` |
//!
//! All three share one mechanism, a crate-private cursor that keeps a
//! per-depth child index table and a cached sibling iterator instead of a
//! call stack, so arbitrarily deep trees cannot overflow the stack.
//!
//! # Sequencer contract
//! - `new(root)` rejects a node that has a parent ([TraversalError::InvalidRoot]).
//! - `has_next()` reports whether payloads are left and never moves the traversal.
//! - `produce_next()` returns the next payload, or [TraversalError::Exhausted]
//!   (repeatably) after the last one.
//! - `remove()` always fails with [TraversalError::Unsupported].
//! - Each sequencer is also a [FusedIterator] over the payloads.
//!
//! Sequencers are single-pass: to traverse again, create a new one from the
//! root. [Traversal] selects the order at runtime from a [TraversalOrder].

pub(crate) mod cursor;
pub mod level_order;
pub mod post_order;
pub mod pre_order;

pub use level_order::LevelOrder;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

use crate::error::TraversalError;
use crate::model::TreeNode;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

// =#========================================================================#=
// TRAVERSAL ORDER
// =#========================================================================#=
/// Order in which a [Traversal] visits the nodes of a tree.
///
/// Parses from its name, case-insensitively:
/// ```
/// use treewalk::traversal::TraversalOrder;
///
/// assert_eq!("post-order".parse(), Ok(TraversalOrder::PostOrder));
/// assert_eq!("BFS".parse(), Ok(TraversalOrder::LevelOrder));
/// assert_eq!(TraversalOrder::PreOrder.to_string(), "pre-order");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    LevelOrder,
}

impl TraversalOrder {
    /// All orders, in declaration order.
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    /// Returns the canonical name of this order.
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre-order" | "preorder" | "pre" => Ok(TraversalOrder::PreOrder),
            "post-order" | "postorder" | "post" => Ok(TraversalOrder::PostOrder),
            "level-order" | "levelorder" | "level" | "breadth-first" | "bfs" => {
                Ok(TraversalOrder::LevelOrder)
            }
            _ => Err(TraversalError::UnknownOrder(s.to_string())),
        }
    }
}

// =#========================================================================#=
// TRAVERSAL (dispatch)
// =#========================================================================#=
/// A traversal whose order is chosen at runtime.
///
/// Wraps one of the three sequencers and forwards the sequencer contract.
///
/// # Example
/// ```
/// use treewalk::model::TreeBuilder;
/// use treewalk::traversal::{Traversal, TraversalOrder};
///
/// let mut builder = TreeBuilder::new(0);
/// builder.add_child(0, 1)?;
/// builder.add_child(0, 2)?;
/// let tree = builder.build();
///
/// let order: TraversalOrder = "post".parse()?;
/// let payloads: Vec<i32> = Traversal::new(tree.root(), order)?.copied().collect();
/// assert_eq!(payloads, [1, 2, 0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub enum Traversal<N: TreeNode> {
    PreOrder(PreOrder<N>),
    PostOrder(PostOrder<N>),
    LevelOrder(LevelOrder<N>),
}

impl<N: TreeNode> Traversal<N> {
    /// Creates a traversal in the given order of the tree rooted at `root`.
    ///
    /// # Errors
    /// [TraversalError::InvalidRoot] if `root` has a parent.
    pub fn new(root: N, order: TraversalOrder) -> Result<Self, TraversalError> {
        Ok(match order {
            TraversalOrder::PreOrder => Traversal::PreOrder(PreOrder::new(root)?),
            TraversalOrder::PostOrder => Traversal::PostOrder(PostOrder::new(root)?),
            TraversalOrder::LevelOrder => Traversal::LevelOrder(LevelOrder::new(root)?),
        })
    }

    /// Returns the order of this traversal.
    pub fn order(&self) -> TraversalOrder {
        match self {
            Traversal::PreOrder(_) => TraversalOrder::PreOrder,
            Traversal::PostOrder(_) => TraversalOrder::PostOrder,
            Traversal::LevelOrder(_) => TraversalOrder::LevelOrder,
        }
    }

    /// Returns `true` while there are payloads left.
    pub fn has_next(&self) -> bool {
        match self {
            Traversal::PreOrder(t) => t.has_next(),
            Traversal::PostOrder(t) => t.has_next(),
            Traversal::LevelOrder(t) => t.has_next(),
        }
    }

    /// Returns the next payload.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] once all payloads were produced.
    pub fn produce_next(&mut self) -> Result<N::Data, TraversalError> {
        match self {
            Traversal::PreOrder(t) => t.produce_next(),
            Traversal::PostOrder(t) => t.produce_next(),
            Traversal::LevelOrder(t) => t.produce_next(),
        }
    }

    /// Always fails; traversals cannot remove elements.
    ///
    /// # Errors
    /// [TraversalError::Unsupported], without moving the traversal.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        match self {
            Traversal::PreOrder(t) => t.remove(),
            Traversal::PostOrder(t) => t.remove(),
            Traversal::LevelOrder(t) => t.remove(),
        }
    }
}

impl<N: TreeNode> Iterator for Traversal<N> {
    type Item = N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next().ok()
    }
}

impl<N: TreeNode> FusedIterator for Traversal<N> {}
