//! Position state shared by the navigation primitives of one traversal.
//!
//! A [Cursor] replaces the call stack of a recursive walk with two pieces of
//! bookkeeping:
//! - a growable table holding, per depth, the index of the last visited child
//!   under the current ancestor chain (`None` = no child visited yet), and
//! - a cached iterator over the siblings following the current node.
//!
//! Together with the parent back-reference of [TreeNode], this is enough to
//! move up, down and sideways in O(1) amortized time without recursion and
//! without storing the path from the root.

use crate::error::TraversalError;
use crate::model::TreeNode;
use std::iter::{Peekable, Skip};
use tracing::trace;

/// Cached siblings following the current node, in order.
type Siblings<N> = Peekable<Skip<<N as TreeNode>::Children>>;

// =#========================================================================#=
// CURSOR
// =#========================================================================#=
/// Mutable traversal position inside a tree.
///
/// # Invariants
/// - `depth` is 0 at the root and equals the number of ancestors of `current`.
/// - For `0 < d <= depth`, `child_indices[d]` is the position of the
///   depth-`d` ancestor of `current` (or `current` itself) among its siblings.
/// - `child_indices[depth + 1]`, if present and set, is the last child of
///   `current` that was entered; entries deeper than that are unset.
/// - `child_indices[0]` is the root-visited flag: `Some(0)` once the root
///   payload was handed out.
/// - `siblings` yields exactly the siblings after `current`; `None` at the root.
pub(crate) struct Cursor<N: TreeNode> {
    current: N,
    depth: usize,
    child_indices: Vec<Option<usize>>,
    siblings: Option<Siblings<N>>,
}

impl<N: TreeNode> Cursor<N> {
    /// Creates a cursor positioned at `root`.
    ///
    /// Callers are responsible for checking that `root` has no parent.
    pub(crate) fn new(root: N) -> Self {
        Cursor {
            current: root,
            depth: 0,
            child_indices: vec![None],
            siblings: None,
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------
    /// Returns the payload of the current node.
    ///
    /// The first call while standing on the root marks the root as visited.
    pub(crate) fn current_payload(&mut self) -> N::Data {
        if self.depth == 0 && self.child_indices[0].is_none() {
            self.child_indices[0] = Some(0);
        }
        self.current.data()
    }

    /// Returns whether the root payload has been handed out.
    pub(crate) fn root_visited(&self) -> bool {
        self.child_indices[0].is_some()
    }

    /// Returns the depth of the current node (root = 0).
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn is_root(&self) -> bool {
        self.depth == 0
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.current.is_leaf()
    }

    /// Returns `true` if the current node has no child left to enter, i.e.
    /// it is a leaf or its last child was already entered.
    pub(crate) fn children_fully_visited(&self) -> bool {
        let num_children = self.current.number_of_children();
        if num_children == 0 {
            return true;
        }
        match self.last_visited_child() {
            Some(last) => last + 1 >= num_children,
            None => false,
        }
    }

    /// Returns `true` if a node follows the current one among its siblings.
    pub(crate) fn has_next_sibling(&mut self) -> bool {
        self.siblings
            .as_mut()
            .is_some_and(|siblings| siblings.peek().is_some())
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------
    /// Moves to the first child of the current node and returns its payload.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] if the current node is a leaf.
    pub(crate) fn descend_to_first_child(&mut self) -> Result<N::Data, TraversalError> {
        self.descend_to(0)
    }

    /// Moves to the child after the last entered one (the first child if none
    /// was entered yet) and returns its payload.
    ///
    /// After an [`ascend`](Self::ascend) this resumes with the next child of
    /// the node one level up, the same as moving to the next sibling of the
    /// node that was left.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] if all children were already entered.
    pub(crate) fn descend_to_next_child(&mut self) -> Result<N::Data, TraversalError> {
        let next = self.last_visited_child().map_or(0, |last| last + 1);
        self.descend_to(next)
    }

    /// Moves to the next sibling and returns its payload.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] if there is no next sibling.
    pub(crate) fn advance_to_next_sibling(&mut self) -> Result<N::Data, TraversalError> {
        let next = self
            .siblings
            .as_mut()
            .and_then(Iterator::next)
            .ok_or(TraversalError::Exhausted)?;

        let depth = self.depth;
        let position = self.child_indices[depth].map_or(0, |index| index + 1);
        self.child_indices[depth] = Some(position);
        self.reset_below(depth);
        self.current = next;

        trace!(depth, position, "advanced to next sibling");
        Ok(self.current.data())
    }

    /// Moves to the parent and returns its payload.
    ///
    /// The index of the node that was left stays recorded, so that
    /// [`descend_to_next_child`](Self::descend_to_next_child) and the sibling
    /// queries resume after it.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] if the cursor stands on the root.
    pub(crate) fn ascend(&mut self) -> Result<N::Data, TraversalError> {
        if self.is_root() {
            return Err(TraversalError::Exhausted);
        }
        let parent = self.current.parent().ok_or(TraversalError::Exhausted)?;

        self.depth -= 1;
        self.reset_below(self.depth + 1);
        self.siblings = if self.depth == 0 {
            None
        } else {
            let position = self.child_indices[self.depth].unwrap_or(0);
            parent
                .parent()
                .map(|grandparent| grandparent.children().skip(position + 1).peekable())
        };
        self.current = parent;

        trace!(depth = self.depth, "ascended to parent");
        Ok(self.current.data())
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------
    /// Returns the last entered child of the current node, if any.
    fn last_visited_child(&self) -> Option<usize> {
        self.child_indices.get(self.depth + 1).copied().flatten()
    }

    /// Enters child `position` of the current node.
    fn descend_to(&mut self, position: usize) -> Result<N::Data, TraversalError> {
        let child = self
            .current
            .child_at(position)
            .ok_or(TraversalError::Exhausted)?;

        let depth = self.depth + 1;
        if self.child_indices.len() <= depth {
            self.child_indices.resize(depth + 1, None);
        }
        self.child_indices[depth] = Some(position);
        self.reset_below(depth);
        self.siblings = Some(self.current.children().skip(position + 1).peekable());
        self.current = child;
        self.depth = depth;

        trace!(depth, position, "descended to child");
        Ok(self.current.data())
    }

    /// Clears the recorded indices of all depths greater than `depth`.
    fn reset_below(&mut self, depth: usize) {
        if let Some(deeper) = self.child_indices.get_mut(depth + 1..) {
            deeper.fill(None);
        }
    }
}
