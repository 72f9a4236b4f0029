//! Read-only node abstraction consumed by the traversal engine.
//!
//! The sequencers in [crate::traversal] never see a concrete tree. They walk
//! any structure whose nodes implement [TreeNode], for example
//! [NodeRef](crate::model::NodeRef) of the arena [Tree](crate::model::Tree).

// =#========================================================================#=
// TREE NODE (trait)
// =#========================================================================T=
/// Capability set every traversable tree must provide.
///
/// Implementors are cheap *handles* to a node (e.g. a tree reference plus an
/// index), not the node storage itself. The traversal cursor clones handles
/// freely while moving up and down the tree.
///
/// # Contract
/// - `parent()` is `None` only for the root.
/// - A node returned by `children()` or `child_at()` of `x` has `x` as parent.
/// - The tree is finite and acyclic, and the order of `children()` is stable
///   while any traversal over the tree is alive.
///
/// # Example
/// ```
/// use treewalk::model::{TreeBuilder, TreeNode};
///
/// let mut builder = TreeBuilder::new("root");
/// let a = builder.add_child(0, "A").unwrap();
/// builder.add_child(a, "A1").unwrap();
/// let tree = builder.build();
///
/// let root = tree.root();
/// assert!(root.is_root());
/// assert_eq!(root.number_of_children(), 1);
/// assert_eq!(*root.child_at(0).unwrap().data(), "A");
/// ```
pub trait TreeNode: Clone {
    /// Payload handed out by traversals.
    type Data;

    /// Iterator over the ordered children of a node.
    type Children: Iterator<Item = Self>;

    /// Returns the payload of this node.
    fn data(&self) -> Self::Data;

    /// Returns the parent of this node, or `None` for the root.
    fn parent(&self) -> Option<Self>;

    /// Returns an iterator over the children of this node, in order.
    fn children(&self) -> Self::Children;

    /// Returns the number of children of this node.
    fn number_of_children(&self) -> usize;

    /// Returns the child at position `index`, or `None` if out of range.
    fn child_at(&self, index: usize) -> Option<Self>;

    /// Returns `true` if this node has no children.
    fn is_leaf(&self) -> bool {
        self.number_of_children() == 0
    }

    /// Returns `true` if this node has no parent.
    fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
