//! Pre-order traversal (parents before children).

use crate::error::TraversalError;
use crate::model::TreeNode;
use crate::traversal::cursor::Cursor;
use std::iter::FusedIterator;
use tracing::debug;

/// Sequencer producing payloads in pre-order.
///
/// Each step emits the payload the cursor stands on, then moves to the next
/// position: into the first unvisited child, else to the next sibling, else
/// up until some ancestor has a next sibling. The sequence ends once the
/// climb reaches the root.
///
/// # Example
/// ```
/// use treewalk::model::TreeBuilder;
/// use treewalk::traversal::PreOrder;
///
/// let mut builder = TreeBuilder::new("root");
/// let a = builder.add_child(0, "A")?;
/// builder.add_child(a, "A1")?;
/// builder.add_child(0, "B")?;
/// let tree = builder.build();
///
/// let mut pre_order = PreOrder::new(tree.root())?;
/// assert_eq!(*pre_order.produce_next()?, "root");
/// assert_eq!(pre_order.map(|s| *s).collect::<Vec<_>>(), ["A", "A1", "B"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PreOrder<N: TreeNode> {
    cursor: Cursor<N>,
    finished: bool,
}

impl<N: TreeNode> PreOrder<N> {
    /// Creates a pre-order traversal of the tree rooted at `root`.
    ///
    /// # Errors
    /// [TraversalError::InvalidRoot] if `root` has a parent.
    pub fn new(root: N) -> Result<Self, TraversalError> {
        if !root.is_root() {
            debug!("rejected pre-order traversal from non-root node");
            return Err(TraversalError::InvalidRoot);
        }
        Ok(Self::from_cursor(Cursor::new(root)))
    }

    pub(crate) fn from_cursor(cursor: Cursor<N>) -> Self {
        PreOrder {
            cursor,
            finished: false,
        }
    }

    /// Returns `true` while there are payloads left.
    pub fn has_next(&self) -> bool {
        !self.finished
    }

    /// Returns the next payload in pre-order.
    ///
    /// # Errors
    /// [TraversalError::Exhausted] once all payloads were produced.
    pub fn produce_next(&mut self) -> Result<N::Data, TraversalError> {
        if self.finished {
            return Err(TraversalError::Exhausted);
        }

        let data = self.cursor.current_payload();
        self.advance()?;
        Ok(data)
    }

    /// Always fails; traversals cannot remove elements.
    ///
    /// # Errors
    /// [TraversalError::Unsupported], without moving the traversal.
    pub fn remove(&mut self) -> Result<(), TraversalError> {
        Err(TraversalError::Unsupported)
    }

    /// Moves the cursor to the pre-order successor of the current node.
    fn advance(&mut self) -> Result<(), TraversalError> {
        let cursor = &mut self.cursor;

        if !cursor.children_fully_visited() {
            cursor.descend_to_next_child()?;
        } else if cursor.has_next_sibling() {
            cursor.advance_to_next_sibling()?;
        } else {
            while !cursor.is_root() && !cursor.has_next_sibling() {
                cursor.ascend()?;
            }
            if cursor.is_root() {
                debug!("pre-order traversal finished");
                self.finished = true;
            } else {
                cursor.advance_to_next_sibling()?;
            }
        }

        Ok(())
    }
}

impl<N: TreeNode> Iterator for PreOrder<N> {
    type Item = N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next().ok()
    }
}

impl<N: TreeNode> FusedIterator for PreOrder<N> {}
