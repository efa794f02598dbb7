//! Exercises answered with the ordering a [`Tree`] maintains.

use std::cmp::Ordering;
use std::ops::Add;

use crate::tree::Tree;

impl<K> Tree<K> {
    /// Whether two different keys in the tree add up to `sum`.
    ///
    /// Walks the sorted keys from both ends at once: a total that's too small can only grow by
    /// moving the low end up, and one that's too large can only shrink by moving the high end down.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 8, 20, 4, 9, 11, 30, 25].into_iter().collect();
    ///
    /// assert!(tree.has_pair_with_sum(&33));
    /// assert!(!tree.has_pair_with_sum(&60));
    /// // A key can't be paired with itself.
    /// assert!(!tree.has_pair_with_sum(&8));
    /// ```
    pub fn has_pair_with_sum(&self, sum: &K) -> bool
    where
        K: Ord + Clone + Add<Output = K>,
    {
        let keys: Vec<&K> = self.iter().collect();
        let (mut low, mut high) = (0, keys.len());
        while low + 1 < high {
            let total = keys[low].clone() + keys[high - 1].clone();
            match total.cmp(sum) {
                Ordering::Less => low += 1,
                Ordering::Equal => return true,
                Ordering::Greater => high -= 1,
            }
        }
        false
    }
}

/// For each value, the smallest value at or above it among the values before it.
///
/// # Examples
///
/// ```
/// use ordered_bst::queries::left_ceilings;
///
/// assert_eq!(
///     left_ceilings(&[2, 8, 30, 15, 25, 12]),
///     [None, None, None, Some(30), Some(30), Some(15)]
/// );
/// ```
pub fn left_ceilings<K>(values: &[K]) -> Vec<Option<K>>
where
    K: Ord + Clone,
{
    let mut seen = Tree::new();
    values
        .iter()
        .map(|value| {
            let ceiling = seen.ceiling(value).cloned();
            seen.insert(value.clone());
            ceiling
        })
        .collect()
}

/// For each value, the largest value at or below it among the values before it.
///
/// # Examples
///
/// ```
/// use ordered_bst::queries::left_floors;
///
/// assert_eq!(
///     left_floors(&[5, 20, 10, 12, 2, 40]),
///     [None, Some(5), Some(5), Some(10), None, Some(20)]
/// );
/// ```
pub fn left_floors<K>(values: &[K]) -> Vec<Option<K>>
where
    K: Ord + Clone,
{
    let mut seen = Tree::new();
    values
        .iter()
        .map(|value| {
            let floor = seen.floor(value).cloned();
            seen.insert(value.clone());
            floor
        })
        .collect()
}
