mod common;

use common::{chain, complete, ragged, sample_tree, single_node};
use pretty_assertions::assert_eq;
use treewalk::TreeError;
use treewalk::model::{ROOT_INDEX, TreeBuilder, TreeNode, Vertex};

// ============= Building =============
#[test]
fn test_building_tree() {
    let tree = sample_tree();

    // Counts
    assert_eq!(tree.num_vertices(), 5);
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 1);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_valid());

    // Root
    let root = tree.vertex(ROOT_INDEX);
    assert!(root.is_root());
    assert_eq!(root.parent(), None);
    assert_eq!(root.children(), &[1, 2]);

    // Internal
    let a = &tree[1];
    assert!(a.is_internal());
    assert_eq!(*a.data(), "A");
    assert_eq!(a.parent(), Some(ROOT_INDEX));
    assert_eq!(a.children(), &[3, 4]);

    // Leaf
    let b = &tree[2];
    assert!(b.is_leaf());
    assert!(!b.is_internal());
    assert_eq!(b.num_children(), 0);
}

#[test]
fn test_add_child_to_unknown_parent() {
    let mut builder = TreeBuilder::new("root");
    assert_eq!(builder.add_child(7, "orphan"), Err(TreeError::UnknownParent(7)));
    assert_eq!(builder.num_vertices(), 1);
}

#[test]
fn test_single_node_tree() {
    let tree = single_node();
    assert_eq!(tree.num_vertices(), 1);
    assert_eq!(tree.num_leaves(), 1);
    assert_eq!(tree.num_internal(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.is_valid());
}

#[test]
fn test_height() {
    assert_eq!(chain(10).height(), 9);
    assert_eq!(complete(3, 4).height(), 4);
    assert_eq!(ragged().height(), 4);
}

#[test]
fn test_complete_tree_counts() {
    let tree = complete(2, 3);
    assert_eq!(tree.num_vertices(), 15);
    assert_eq!(tree.num_leaves(), 8);
    assert_eq!(tree.num_internal(), 6);
    assert!(tree.is_valid());
}

#[test]
#[should_panic]
fn test_get_vertex_out_of_bounds() {
    let tree = sample_tree();
    let _ = &tree[55];
}

#[test]
fn test_vertex_constructors() {
    let root = Vertex::new_root(0, 'r');
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert!(!root.is_internal());

    let child = Vertex::new_child(3, 1, 'c');
    assert_eq!(child.index(), 3);
    assert_eq!(child.parent(), Some(1));
    assert_eq!(*child.data(), 'c');
}

// ============= Node handles =============
#[test]
fn test_node_ref_navigation() {
    let tree = sample_tree();
    let root = tree.root();

    assert!(root.is_root());
    assert!(!root.is_leaf());
    assert_eq!(*root.data(), "root");
    assert_eq!(root.number_of_children(), 2);
    assert_eq!(root.parent(), None);

    let a = root.child_at(0).unwrap();
    assert_eq!(*a.data(), "A");
    assert_eq!(a.parent(), Some(root));
    assert!(!a.is_root());

    let children: Vec<_> = a.children().map(|n| *n.data()).collect();
    assert_eq!(children, ["A1", "A2"]);
    assert_eq!(a.children().len(), 2);

    assert_eq!(root.child_at(2), None);
    assert!(root.child_at(1).unwrap().is_leaf());
}

#[test]
fn test_node_lookup() {
    let tree = sample_tree();
    let a1 = tree.node(3).unwrap();
    assert_eq!(a1.index(), 3);
    assert_eq!(*a1.data(), "A1");
    assert_eq!(a1.parent().map(|p| p.index()), Some(1));
    assert_eq!(tree.node(5), None);
}

#[test]
fn test_every_child_points_back_to_parent() {
    let tree = ragged();
    for index in 0..tree.num_vertices() {
        let node = tree.node(index).unwrap();
        for child in node.children() {
            assert_eq!(child.parent(), Some(node));
        }
    }
}
