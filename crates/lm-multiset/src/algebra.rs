//! Intersection, difference and equality over sequences-as-multisets.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{MultisetError, MultisetResult};

/// Occurrence count of every distinct value in `items`.
fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Multiset intersection of `a` and `b`.
///
/// Every distinct value present on both sides is emitted
/// `min(count_a, count_b)` times, in one run per value. Runs are ordered by
/// the value's first appearance in `a`. Empty if either side is empty.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let in_a = counts(a);
    let in_b = counts(b);
    let mut emitted = HashSet::with_capacity(in_a.len());
    let mut out = Vec::new();

    for item in a {
        if !emitted.insert(item) {
            continue;
        }
        let (Some(&na), Some(&nb)) = (in_a.get(item), in_b.get(item)) else {
            continue;
        };
        out.extend(std::iter::repeat(item).take(na.min(nb)).cloned());
    }

    out
}

/// Multiset difference `a \ b`, preserving the order of `a`.
///
/// For each distinct value, up to `count_b(value)` occurrences are removed
/// from `a`, earliest first. The surviving occurrences keep their relative
/// order.
pub fn without<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if b.is_empty() {
        return a.to_vec();
    }

    let mut remaining = counts(b);
    a.iter()
        .filter(|item| match remaining.get_mut(*item) {
            Some(left) if *left > 0 => {
                *left -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}

/// Returns `true` if `a` and `b` hold the same values with the same counts.
pub fn multiset_eq<T>(a: &[T], b: &[T]) -> bool
where
    T: Eq + Hash,
{
    a.len() == b.len() && counts(a) == counts(b)
}

/// [`intersect`] over optional operands.
///
/// An absent `other` reads as empty. An absent `source` is a caller error.
pub fn try_intersect<T>(source: Option<&[T]>, other: Option<&[T]>) -> MultisetResult<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    let source = source.ok_or(MultisetError::InvalidArgument { operand: "source" })?;
    Ok(intersect(source, other.unwrap_or(&[])))
}

/// [`without`] over optional operands.
///
/// An absent `removed` reads as empty. An absent `source` is a caller error.
pub fn try_without<T>(source: Option<&[T]>, removed: Option<&[T]>) -> MultisetResult<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    let source = source.ok_or(MultisetError::InvalidArgument { operand: "source" })?;
    Ok(without(source, removed.unwrap_or(&[])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count(items: &[char], value: char) -> usize {
        items.iter().filter(|&&c| c == value).count()
    }

    #[test]
    fn intersect_keeps_min_counts() {
        let a = ['A', 'B', 'A', 'C', 'A'];
        let b = ['A', 'A', 'C', 'D'];
        assert_eq!(intersect(&a, &b), vec!['A', 'A', 'C']);
    }

    #[test]
    fn intersect_groups_by_first_appearance_in_left() {
        let a = ['C', 'A', 'C', 'B'];
        let b = ['A', 'B', 'C', 'C'];
        assert_eq!(intersect(&a, &b), vec!['C', 'C', 'A', 'B']);
    }

    #[test]
    fn intersect_with_empty_is_empty() {
        let a = ['A', 'B'];
        assert!(intersect(&a, &[]).is_empty());
        assert!(intersect(&[], &a).is_empty());
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        assert!(intersect(&['A', 'B'], &['C', 'D']).is_empty());
    }

    #[test]
    fn without_removes_one_occurrence_per_match() {
        assert_eq!(without(&['X', 'X', 'Y'], &['X']), vec!['X', 'Y']);
    }

    #[test]
    fn without_preserves_left_order() {
        let a = ['D', 'A', 'B', 'A', 'C'];
        let b = ['A', 'C', 'Z'];
        assert_eq!(without(&a, &b), vec!['D', 'B', 'A']);
    }

    #[test]
    fn without_empty_right_is_identity() {
        assert_eq!(without(&['A', 'B', 'A'], &[]), vec!['A', 'B', 'A']);
    }

    #[test]
    fn without_everything_is_empty() {
        assert!(without(&['A', 'C'], &['C', 'A', 'A']).is_empty());
    }

    #[test]
    fn multiset_eq_ignores_order_not_counts() {
        assert!(multiset_eq(&['A', 'B', 'A'], &['A', 'A', 'B']));
        assert!(!multiset_eq(&['A', 'B', 'A'], &['A', 'B', 'B']));
        assert!(!multiset_eq(&['A', 'B'], &['A', 'B', 'B']));
        assert!(multiset_eq::<char>(&[], &[]));
    }

    #[test]
    fn try_forms_treat_absent_secondary_as_empty() {
        let a = ['A', 'B'];
        assert_eq!(try_without(Some(&a[..]), None).unwrap(), vec!['A', 'B']);
        assert!(try_intersect(Some(&a[..]), None).unwrap().is_empty());
    }

    #[test]
    fn try_forms_reject_absent_primary() {
        let b = ['A'];
        assert_eq!(
            try_without::<char>(None, Some(&b[..])),
            Err(MultisetError::InvalidArgument { operand: "source" })
        );
        assert!(matches!(
            try_intersect::<char>(None, None),
            Err(MultisetError::InvalidArgument { .. })
        ));
    }

    fn seq() -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(prop::char::range('a', 'e'), 0..16)
    }

    proptest! {
        #[test]
        fn intersect_counts_are_minimums(a in seq(), b in seq()) {
            let out = intersect(&a, &b);
            for v in 'a'..='e' {
                prop_assert_eq!(count(&out, v), count(&a, v).min(count(&b, v)));
            }
        }

        #[test]
        fn intersect_is_commutative_as_multiset(a in seq(), b in seq()) {
            prop_assert!(multiset_eq(&intersect(&a, &b), &intersect(&b, &a)));
        }

        #[test]
        fn without_counts_saturate(a in seq(), b in seq()) {
            let out = without(&a, &b);
            for v in 'a'..='e' {
                prop_assert_eq!(count(&out, v), count(&a, v).saturating_sub(count(&b, v)));
            }
        }

        #[test]
        fn without_is_subsequence_of_left(a in seq(), b in seq()) {
            let out = without(&a, &b);
            let mut rest = a.iter();
            for item in &out {
                prop_assert!(rest.any(|x| x == item));
            }
        }

        #[test]
        fn intersection_plus_remainder_rebuilds_left(a in seq(), b in seq()) {
            let common = intersect(&a, &b);
            let mut rebuilt = common.clone();
            rebuilt.extend(without(&a, &common));
            prop_assert!(multiset_eq(&rebuilt, &a));
        }
    }
}
