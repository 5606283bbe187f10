use std::fmt::{self, Display, Formatter};

pub mod brute_force;
pub mod input;
pub mod pair;
pub mod scenario;
pub mod triplet;

pub use brute_force::find_zero_triplets_brute_force;
pub use input::{parse_sequence, ParseSequenceError};
pub use pair::find_pairs_with_sum;
pub use triplet::find_zero_triplets;

/// Three values drawn from an input sequence, kept in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triplet {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Triplet {
    /// Caller guarantees `a <= b <= c`.
    pub(crate) fn new_sorted(a: i32, b: i32, c: i32) -> Self {
        debug_assert!(a <= b && b <= c);
        Self { a, b, c }
    }

    pub fn sum(&self) -> i64 {
        self.a as i64 + self.b as i64 + self.c as i64
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[i32; 3]> for Triplet {
    fn from(mut values: [i32; 3]) -> Self {
        values.sort_unstable();
        let [a, b, c] = values;
        Self { a, b, c }
    }
}

impl From<Triplet> for [i32; 3] {
    fn from(val: Triplet) -> Self {
        val.to_array()
    }
}

impl Display for Triplet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_sorts() {
        let triplet = Triplet::from([2, -3, 1]);
        assert_eq!(triplet, Triplet { a: -3, b: 1, c: 2 });
        assert_eq!(triplet.to_array(), [-3, 1, 2]);
    }

    #[test]
    fn sum_does_not_overflow() {
        let triplet = Triplet::from([i32::MAX, i32::MAX, i32::MAX]);
        assert_eq!(triplet.sum(), 3 * i32::MAX as i64);
    }

    #[test]
    fn display() {
        let triplet = Triplet::from([0, -1, 1]);
        assert_eq!(triplet.to_string(), "[-1, 0, 1]");
    }

    #[test]
    fn ordering_by_first_then_second() {
        let mut triplets = vec![
            Triplet::from([-1, 0, 1]),
            Triplet::from([-3, 1, 2]),
            Triplet::from([-1, -1, 2]),
        ];
        triplets.sort();
        let arrays = triplets.into_iter().map(<[i32; 3]>::from).collect::<Vec<_>>();
        assert_eq!(arrays, vec![[-3, 1, 2], [-1, -1, 2], [-1, 0, 1]]);
    }
}
