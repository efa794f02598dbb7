use ordered_bst::tree::Tree;

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|key| tree.contains(key)) && tree.is_valid()
}

#[quickcheck]
fn valid_after_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    xs.into_iter().all(|x| {
        tree.insert(x);
        tree.is_valid() && tree.is_valid_by_range()
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.is_valid()
}

#[quickcheck]
fn iterates_in_sorted_order(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();
    sorted.dedup();

    tree.iter().copied().eq(sorted)
}

#[quickcheck]
fn floor_and_ceiling_bracket_the_query(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let floor = tree.floor(&x);
    let ceiling = tree.ceiling(&x);

    let expected_floor = xs.iter().filter(|k| **k <= x).max();
    let expected_ceiling = xs.iter().filter(|k| **k >= x).min();

    let bracketed = match (floor, ceiling) {
        (Some(f), Some(c)) => *f <= x && x <= *c,
        _ => true,
    };
    let exact = !tree.contains(&x) || (floor == Some(&x) && ceiling == Some(&x));

    bracketed && exact && floor == expected_floor && ceiling == expected_ceiling
}

#[quickcheck]
fn deleting_absent_key_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != k).collect();
    let before = tree.clone();

    let first = tree.delete(&k);
    let after_first = tree.clone();
    let second = tree.delete(&k);

    !first && !second && after_first == before && tree == before && tree.is_valid()
}

#[quickcheck]
fn kth_smallest_matches_sorted_keys(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.iter()
        .enumerate()
        .all(|(i, key)| tree.kth_smallest(i + 1) == Ok(key))
        && tree.kth_smallest(tree.len() + 1).is_err()
}

#[test]
fn round_trip_delete_two_inner_nodes() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert!(tree.delete(&3));
    assert!(tree.delete(&8));

    assert!(tree.is_valid());
    assert!(!tree.contains(&3));
    assert!(!tree.contains(&8));
    for key in [1, 4, 5, 7, 9] {
        assert!(tree.contains(&key));
    }
    assert_eq!(tree.len(), 5);
}

#[test]
fn deleting_the_only_node_empties_the_tree() {
    let mut tree = Tree::new();
    tree.insert(42);

    assert!(tree.delete(&42));
    assert!(tree.is_empty());
    assert!(!tree.contains(&42));
    assert!(tree.is_valid());
}
