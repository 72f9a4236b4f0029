//! Traversals over a tree that is not the crate's arena tree.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use treewalk::model::TreeNode;
use treewalk::{TraversalError, TraversalOrder, traverse};

// ============= Reference-counted tree =============
struct Node {
    name: char,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Rc<Node>>>,
}

#[derive(Clone)]
struct Handle(Rc<Node>);

impl Handle {
    fn new(name: char) -> Self {
        Handle(Rc::new(Node {
            name,
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    fn with_child(self, child: Handle) -> Self {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.0);
        self
    }
}

impl TreeNode for Handle {
    type Data = char;
    type Children = std::vec::IntoIter<Handle>;

    fn data(&self) -> char {
        self.0.name
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(Handle)
    }

    fn children(&self) -> Self::Children {
        self.0
            .children
            .borrow()
            .iter()
            .cloned()
            .map(Handle)
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn number_of_children(&self) -> usize {
        self.0.children.borrow().len()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        self.0.children.borrow().get(index).cloned().map(Handle)
    }
}

/// r -> [a, b, c], a -> [d, e], c -> [f], f -> [g]
fn build() -> Handle {
    let a = Handle::new('a')
        .with_child(Handle::new('d'))
        .with_child(Handle::new('e'));
    let f = Handle::new('f').with_child(Handle::new('g'));
    let c = Handle::new('c').with_child(f);
    Handle::new('r')
        .with_child(a)
        .with_child(Handle::new('b'))
        .with_child(c)
}

fn collect(root: &Handle, order: TraversalOrder) -> String {
    traverse(root.clone(), order).unwrap().collect()
}

#[test]
fn test_pre_order() {
    assert_eq!(collect(&build(), TraversalOrder::PreOrder), "radebcfg");
}

#[test]
fn test_post_order() {
    assert_eq!(collect(&build(), TraversalOrder::PostOrder), "deabgfcr");
}

#[test]
fn test_level_order() {
    assert_eq!(collect(&build(), TraversalOrder::LevelOrder), "rabcdefg");
}

#[test]
fn test_inner_node_is_not_a_root() {
    let root = build();
    let c = root.child_at(2).unwrap();
    assert!(matches!(
        traverse(c, TraversalOrder::PreOrder),
        Err(TraversalError::InvalidRoot)
    ));
}
