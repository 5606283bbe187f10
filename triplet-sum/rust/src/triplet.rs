use tracing::{debug, instrument};

use crate::{pair::find_pairs_with_sum, Triplet};

/// Finds every distinct triplet in `nums` summing to zero.
///
/// Works on a sorted copy, so `nums` is left untouched. Results are ordered by
/// their smallest element, then by their middle element.
#[instrument(level = "debug", skip_all, fields(len = nums.len()))]
pub fn find_zero_triplets(nums: &[i32]) -> Vec<Triplet> {
    let mut results = Vec::new();

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    for (i, &a) in sorted.iter().enumerate() {
        // Everything from here on is positive.
        if a > 0 {
            break;
        }

        if i > 0 && a == sorted[i - 1] {
            continue;
        }

        let pairs = find_pairs_with_sum(&sorted, i + 1, -(a as i64));
        results.extend(pairs.into_iter().map(|(b, c)| Triplet::new_sorted(a, b, c)));
    }

    debug!(triplets = results.len(), "found zero triplets");
    results
}
