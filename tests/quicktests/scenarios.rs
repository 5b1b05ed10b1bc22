use unbalanced_bst::{Error, Order, Tree};

#[test]
fn words_come_back_sorted() {
    let mut tree = Tree::new();
    for word in ["dog", "cat", "bird"] {
        tree.insert(word);
    }

    assert!(tree.inorder().eq(&["bird", "cat", "dog"]));
    assert_eq!(tree.len(), 3);
    assert!(tree.contains("cat"));
    assert!(!tree.contains("fish"));
}

#[test]
fn empty_tree_has_nothing_to_give() {
    let mut tree: Tree<&str> = Tree::new();

    assert_eq!(tree.remove_min(), None);
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert!(matches!(tree.root(), Err(Error::EmptyTree)));
}

#[test]
fn traversal_reflects_shape_at_creation() {
    let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    let before: Vec<i32> = tree.preorder().copied().collect();

    tree.insert(0);
    tree.remove_max();

    assert_eq!(before, [2, 1, 3]);
    assert_eq!(tree.traverse(Order::PreOrder).copied().collect::<Vec<_>>(), [2, 1, 0]);
}

#[test]
fn clearing_drops_everything() {
    let mut tree: Tree<_> = (0..100).map(|x| x.to_string()).collect();
    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.inorder().next().is_none());
    assert!(!tree.contains("42"));
}

quickcheck::quickcheck! {
    fn inorder_rebuild_is_no_shorter(xs: Vec<u16>) -> bool {
        let original: Tree<_> = xs.into_iter().collect();

        // Persist the sorted sequence, then rebuild from it.
        let saved: Vec<u16> = original.inorder().copied().collect();
        let rebuilt: Tree<_> = saved.iter().copied().collect();

        rebuilt.inorder().eq(saved.iter())
            && rebuilt.len() == original.len()
            && original.height() <= rebuilt.height()
    }
}

quickcheck::quickcheck! {
    fn preorder_rebuild_is_identical(xs: Vec<u16>) -> bool {
        let original: Tree<_> = xs.into_iter().collect();
        let rebuilt: Tree<_> = original.preorder().copied().collect();

        rebuilt.preorder().eq(original.preorder())
            && rebuilt.postorder().eq(original.postorder())
            && rebuilt.height() == original.height()
    }
}

quickcheck::quickcheck! {
    fn owned_iteration_is_sorted(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        tree.into_iter().eq(expected)
    }
}
