use ordered_bst::order_stat::OrderStatTree;
use ordered_bst::Error;

use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

use crate::Op;

#[quickcheck]
fn kth_smallest_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderStatTree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(k) => assert_eq!(tree.insert(k), set.insert(k)),
            Op::Delete(k) => assert_eq!(tree.delete(&k), set.remove(&k)),
        }
    }

    tree.len() == set.len()
        && set
            .iter()
            .enumerate()
            .all(|(i, key)| tree.kth_smallest(i + 1) == Ok(key) && tree.rank(key) == Some(i + 1))
}

#[quickcheck]
fn iterates_in_sorted_order(xs: Vec<i8>) -> bool {
    let tree: OrderStatTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.iter().eq(set.iter())
}

#[test]
fn kth_smallest_on_skewed_chain() {
    let tree: OrderStatTree<_> = [1, 2, 3, 4, 5].into_iter().collect();

    assert_eq!(tree.kth_smallest(3), Ok(&3));
    assert_eq!(tree.len(), 5);
}

#[test]
fn kth_smallest_out_of_range() {
    let tree: OrderStatTree<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(
        tree.kth_smallest(4),
        Err(Error::RankOutOfRange { rank: 4, len: 3 })
    );
    assert_eq!(
        tree.kth_smallest(4).unwrap_err().to_string(),
        "rank 4 is out of range for a tree holding 3 keys"
    );
}
