//! Post-order traversal (children before parents).

use crate::error::TraversalError;
use crate::model::TreeNode;
use crate::traversal::cursor::Cursor;
use std::iter::FusedIterator;
use tracing::debug;

/// Sequencer producing payloads in post-order.
///
/// Between steps the cursor stands on the node emitted last. A step either
/// dives to the deepest-leftmost node of the next unvisited subtree (the
/// next sibling's, or the root's on the first step) or, when no sibling is
/// left, climbs to the parent, whose children are then all emitted.
///
/// The root is always emitted last, so the traversal is finished exactly
/// when the cursor reports the root as visited.
pub struct PostOrder<N: TreeNode> {
    cursor: Cursor<N>,
}

impl<N: TreeNode> PostOrder<N> {
    /// Creates a post-order traversal of the tree rooted at `root`.
    ///
    /// # Errors
    /// [TraversalError::InvalidRoot] if `root` has a parent.
    pub fn new(root: N) -> Result<Self, TraversalError> {
        if !root.is_root() {
            debug!("rejected post-order traversal from non-root node");
            return Err(TraversalError::InvalidRoot);
        }
        Ok(Self::from_cursor(Cursor::new(root)))
    }

    pub(crate) fn from_cursor(cursor: Cursor<N>) -> Self {
        PostOrder { cursor }
    }

    /// Returns `true` while there are payloads left.
    pub fn has_next(&self) -> bool {
        !self.cursor.root_visited()
    }

    /// Returns the next payload in post-order.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] once all payloads were produced.
    pub fn produce_next(&mut self) -> Result<N::Data, TraversalError> {
        if self.cursor.root_visited() {
            return Err(TraversalError::Exhausted);
        }

        if !self.cursor.children_fully_visited() {
            self.cursor.descend_to_next_child()?;
            self.dive()?;
        } else if self.cursor.has_next_sibling() {
            self.cursor.advance_to_next_sibling()?;
            self.dive()?;
        } else if !self.cursor.is_root() {
            self.cursor.ascend()?;
        }
        // A lone root stays put and is emitted right away.

        if self.cursor.is_root() {
            debug!("post-order traversal finished");
        }
        Ok(self.cursor.current_payload())
    }

    /// Always fails; traversals cannot remove elements.
    ///
    /// # Errors
    /// [TraversalError::Unsupported], without moving the traversal.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        Err(TraversalError::Unsupported)
    }

    /// Descends along first children down to a leaf.
    fn dive(&mut self) -> Result<(), TraversalError> {
        while self.cursor.has_children() {
            self.cursor.descend_to_first_child()?;
        }
        Ok(())
    }
}

impl<N: TreeNode> Iterator for PostOrder<N> {
    type Item = N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next().ok()
    }
}

impl<N: TreeNode> FusedIterator for PostOrder<N> {}
