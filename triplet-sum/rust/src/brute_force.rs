use std::collections::HashSet;

use crate::Triplet;

/// Cubic reference for [`crate::find_zero_triplets`], checks every index combination `i < j < k`.
pub fn find_zero_triplets_brute_force(nums: &[i32]) -> HashSet<Triplet> {
    let n = nums.len();
    let mut triplets = HashSet::new();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let triplet = Triplet::from([nums[i], nums[j], nums[k]]);
                if triplet.sum() == 0 {
                    triplets.insert(triplet);
                }
            }
        }
    }

    triplets
}
