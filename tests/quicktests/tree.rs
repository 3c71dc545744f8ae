use bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

/// Walks the tree from the root checking every node against the open
/// interval its ancestors allow it.
fn is_bst<K: Ord>(tree: &Tree<K>) -> bool {
    let mut stack = vec![(tree.root(), None, None)];
    while let Some((node, low, high)) = stack.pop() {
        let Some(node) = node else { continue };
        let key = node.key();
        if low.map_or(false, |low| key <= low) || high.map_or(false, |high| key >= high) {
            return false;
        }
        stack.push((node.left(), low, Some(key)));
        stack.push((node.right(), Some(key), high));
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    is_bst(&tree)
        && tree.len() == set.len()
        && set.iter().all(|key| tree.find(key) == Some(key))
        && tree.dfs_in_order().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    is_bst(&tree)
        && deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn in_order_is_sorted_input(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();
    tree.dfs_in_order().copied().eq(expected)
}

#[quickcheck]
fn remove_changes_len_by_presence(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before = tree.len();
    let present = tree.find(&key).is_some();

    let removed = tree.remove(&key);
    removed.is_some() == present
        && tree.len() == before - usize::from(present)
        && is_bst(&tree)
}

#[quickcheck]
fn removing_absent_key_is_idempotent(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != key).collect();
    let before: Vec<i8> = tree.dfs_pre_order().copied().collect();

    let first = tree.remove(&key);
    let after_first: Vec<i8> = tree.dfs_pre_order().copied().collect();
    let second = tree.remove(&key);
    let after_second: Vec<i8> = tree.dfs_pre_order().copied().collect();

    first.is_none() && second.is_none() && before == after_first && after_first == after_second
}

#[quickcheck]
fn recursive_and_iterative_insert_agree(xs: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for x in &xs {
        if iterative.insert(*x) != recursive.insert_recursive(*x) {
            return false;
        }
    }

    // A BST is fully determined by its pre-order sequence.
    iterative.dfs_pre_order().eq(recursive.dfs_pre_order()) && iterative.len() == recursive.len()
}

#[quickcheck]
fn recursive_and_iterative_find_agree(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    probes.iter().all(|p| tree.find(p) == tree.find_recursive(p))
}

#[quickcheck]
fn traversals_visit_every_node(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    fn sorted(mut keys: Vec<&i8>) -> Vec<&i8> {
        keys.sort_unstable();
        keys
    }
    let in_order: Vec<_> = tree.dfs_in_order().collect();

    in_order.len() == tree.len()
        && sorted(tree.dfs_pre_order().collect()) == in_order
        && sorted(tree.dfs_post_order().collect()) == in_order
        && sorted(tree.bfs().collect()) == in_order
}

#[quickcheck]
fn second_highest_is_predecessor_of_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.dfs_in_order().collect();

    tree.second_highest() == keys.len().checked_sub(2).map(|i| keys[i])
}
