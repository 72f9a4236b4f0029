//! Error types for tree construction and traversal.
//!
//! This module provides [TraversalError], raised by the sequencers in
//! [crate::traversal], and [TreeError], raised while assembling a
//! [Tree](crate::model::Tree) with a [TreeBuilder](crate::model::TreeBuilder).

use crate::model::VertexIndex;
use thiserror::Error;

// =#========================================================================#=
// TRAVERSAL ERROR
// =#========================================================================#=
/// Errors signaled by a traversal to its immediate caller.
///
/// None of these are recoverable: a sequencer that reported an error other
/// than [TraversalError::Unsupported] should simply be dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The node given as traversal root has a parent.
    #[error("Invalid root - node has a parent")]
    InvalidRoot,

    /// The sequence already produced its last element.
    #[error("Traversal exhausted - no more elements")]
    Exhausted,

    /// Traversals are read-only; elements cannot be removed.
    #[error("Unsupported operation - traversal cannot remove elements")]
    Unsupported,

    /// A traversal order name could not be parsed.
    #[error("Unknown traversal order: {0}")]
    UnknownOrder(String),
}

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Errors raised while building a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A child was attached to a vertex that does not exist (yet).
    #[error("Unknown parent vertex {0}")]
    UnknownParent(VertexIndex),
}
