use std::cmp::Ordering;
use std::collections::HashMap;

/// Collects every value-distinct pair `(b, c)` in `sorted[start..]` with `b + c == target`.
///
/// `sorted[start..]` must be ascending. Pairs come out in ascending order of `b`.
/// Only `left` skips repeated values after a match; `right` never needs to,
/// since a repeated `c` can only pair with the `b` that was just consumed.
pub fn find_pairs_with_sum(sorted: &[i32], start: usize, target: i64) -> Vec<(i32, i32)> {
    let mut pairs = Vec::new();
    if start >= sorted.len() {
        return pairs;
    }

    let mut left = start;
    let mut right = sorted.len() - 1;

    while left < right {
        let nl = sorted[left];
        let nr = sorted[right];

        match (nl as i64 + nr as i64).cmp(&target) {
            Ordering::Less => left += 1,
            Ordering::Equal => {
                pairs.push((nl, nr));
                left += 1;
                while left < right && sorted[left] == sorted[left - 1] {
                    left += 1;
                }
            }
            Ordering::Greater => right -= 1,
        }
    }

    pairs
}

/// First pair found by the two-pointer scan, as 1-indexed positions.
pub fn pair_sum_sorted(sorted: &[i32], target: i64) -> Option<(usize, usize)> {
    first_pair(sorted, target).map(|(l, r)| (l + 1, r + 1))
}

/// Same scan as [`pair_sum_sorted`], returning the values instead of positions.
pub fn pair_sum_sorted_values(sorted: &[i32], target: i64) -> Option<(i32, i32)> {
    first_pair(sorted, target).map(|(l, r)| (sorted[l], sorted[r]))
}

/// All value-distinct pairs as 1-indexed positions. Skips repeats on both sides after a match.
pub fn pair_sum_sorted_all_pairs(sorted: &[i32], target: i64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    if sorted.len() < 2 {
        return pairs;
    }

    let mut low = 0;
    let mut high = sorted.len() - 1;

    while low < high {
        match (sorted[low] as i64 + sorted[high] as i64).cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => {
                pairs.push((low + 1, high + 1));
                low += 1;
                high -= 1;

                while low < high && sorted[low] == sorted[low - 1] {
                    low += 1;
                }
                while low < high && sorted[high] == sorted[high + 1] {
                    high -= 1;
                }
            }
        }
    }

    pairs
}

/// Hash map complement lookup for unsorted input, 1-indexed with the earlier position first.
pub fn pair_sum_unsorted(nums: &[i32], target: i64) -> Option<(usize, usize)> {
    let mut idx_by_num: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &n) in nums.iter().enumerate() {
        let diff = target - n as i64;

        match idx_by_num.get(&diff) {
            Some(&idx) => return Some((idx + 1, i + 1)),
            None => {
                idx_by_num.insert(n as i64, i);
            }
        };
    }

    None
}

fn first_pair(sorted: &[i32], target: i64) -> Option<(usize, usize)> {
    if sorted.len() < 2 {
        return None;
    }

    let mut low = 0;
    let mut high = sorted.len() - 1;

    while low < high {
        match (sorted[low] as i64 + sorted[high] as i64).cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => return Some((low, high)),
        };
    }

    None
}
