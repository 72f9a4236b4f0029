//! Level-order traversal (breadth-first, grouped by depth).

use crate::error::TraversalError;
use crate::model::TreeNode;
use crate::traversal::cursor::Cursor;
use std::iter::FusedIterator;
use tracing::debug;

/// Sequencer producing payloads in level-order.
///
/// Built on the same depth-first cursor as the other orders plus a target
/// depth. Between steps the cursor stands on the next node to emit, always at
/// the target depth. To find the successor, the cursor searches rightwards
/// for the next node at the same depth, skipping branches that end above it.
/// When the level is exhausted the target depth grows by one and the search
/// restarts from the root.
///
/// Each level restart walks down from the root again, so a step costs up to
/// O(depth) and a full traversal of a degenerate (path-like) tree is
/// quadratic in its depth.
pub struct LevelOrder<N: TreeNode> {
    cursor: Cursor<N>,
    target_depth: usize,
    finished: bool,
}

impl<N: TreeNode> LevelOrder<N> {
    /// Creates a level-order traversal of the tree rooted at `root`.
    ///
    /// # Errors
    /// [TraversalError::InvalidRoot] if `root` has a parent.
    pub fn new(root: N) -> Result<Self, TraversalError> {
        if !root.is_root() {
            debug!("rejected level-order traversal from non-root node");
            return Err(TraversalError::InvalidRoot);
        }
        Ok(Self::from_cursor(Cursor::new(root)))
    }

    pub(crate) fn from_cursor(cursor: Cursor<N>) -> Self {
        LevelOrder {
            cursor,
            target_depth: 0,
            finished: false,
        }
    }

    /// Returns `true` while there are payloads left.
    pub fn has_next(&self) -> bool {
        !self.finished
    }

    /// Returns the next payload in level-order.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] once all payloads were produced.
    pub fn produce_next(&mut self) -> Result<N::Data, TraversalError> {
        if self.finished {
            return Err(TraversalError::Exhausted);
        }

        let data = self.cursor.current_payload();
        if self.seek_on_level()? {
            return Ok(data);
        }

        // Level exhausted, the cursor is back at the root.
        self.target_depth += 1;
        debug!(
            target_depth = self.target_depth,
            "level-order traversal moves to next level"
        );
        if !(self.descend_to_target()? || self.seek_on_level()?) {
            debug!("level-order traversal finished");
            self.finished = true;
        }

        Ok(data)
    }

    /// Always fails; traversals cannot remove elements.
    ///
    /// # Errors
    /// [TraversalError::Unsupported], without moving the traversal.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        Err(TraversalError::Unsupported)
    }

    /// Moves to the next node at the target depth, to the right of the
    /// current position.
    ///
    /// Returns `false`, with the cursor on the root, if there is none.
    fn seek_on_level(&mut self) -> Result<bool, TraversalError> {
        loop {
            while !self.cursor.has_next_sibling() {
                if self.cursor.is_root() {
                    return Ok(false);
                }
                self.cursor.ascend()?;
            }
            self.cursor.advance_to_next_sibling()?;

            if self.descend_to_target()? {
                return Ok(true);
            }
            // Branch ends above the target depth, keep searching.
        }
    }

    /// Descends along first children until the target depth is reached.
    ///
    /// Returns `false` if a leaf above the target depth is hit first.
    fn descend_to_target(&mut self) -> Result<bool, TraversalError> {
        while self.cursor.depth() < self.target_depth {
            if !self.cursor.has_children() {
                return Ok(false);
            }
            self.cursor.descend_to_first_child()?;
        }
        Ok(true)
    }
}

impl<N: TreeNode> Iterator for LevelOrder<N> {
    type Item = N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next().ok()
    }
}

impl<N: TreeNode> FusedIterator for LevelOrder<N> {}
