use crate::{brute_force::find_zero_triplets_brute_force, triplet::find_zero_triplets, Triplet};

pub const DEFAULT_BRUTE_FORCE_MAX_LEN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub input: &'static [i32],
    pub expected: &'static [[i32; 3]],
}

pub const SCENARIOS: [Scenario; 8] = [
    Scenario {
        name: "Basic example",
        input: &[0, -1, 2, -3, 1],
        expected: &[[-3, 1, 2], [-1, 0, 1]],
    },
    Scenario {
        name: "Empty array",
        input: &[],
        expected: &[],
    },
    Scenario {
        name: "Single element",
        input: &[0],
        expected: &[],
    },
    Scenario {
        name: "Two elements",
        input: &[1, -1],
        expected: &[],
    },
    Scenario {
        name: "All same values",
        input: &[0, 0, 0],
        expected: &[[0, 0, 0]],
    },
    Scenario {
        name: "No valid triplets",
        input: &[1, 0, 1],
        expected: &[],
    },
    Scenario {
        name: "Duplicate triplets",
        input: &[0, 0, 1, -1, 1, -1],
        expected: &[[-1, 0, 1]],
    },
    Scenario {
        name: "Complex case",
        input: &[-1, 0, 1, 2, -1, -4],
        expected: &[[-1, -1, 2], [-1, 0, 1]],
    },
];

#[derive(Debug)]
pub struct Outcome {
    pub result: Vec<Triplet>,
    pub matches_expected: bool,
    /// `None` when the input was too long to cross-check.
    pub brute_force_matches: Option<bool>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.matches_expected && self.brute_force_matches.unwrap_or(true)
    }
}

/// Sorts each triplet and then the collection, so results compare regardless of order.
pub fn normalize<I, T>(triplets: I) -> Vec<Triplet>
where
    I: IntoIterator<Item = T>,
    T: Into<Triplet>,
{
    let mut normalized = triplets.into_iter().map(Into::into).collect::<Vec<Triplet>>();
    normalized.sort_unstable();
    normalized
}

impl Scenario {
    pub fn expected(&self) -> Vec<Triplet> {
        normalize(self.expected.iter().copied())
    }

    pub fn run(&self, brute_force_max_len: usize) -> Outcome {
        let expected = self.expected();
        let result = find_zero_triplets(self.input);
        let matches_expected = normalize(result.iter().copied()) == expected;

        let brute_force_matches = (self.input.len() <= brute_force_max_len)
            .then(|| normalize(find_zero_triplets_brute_force(self.input)) == expected);

        Outcome {
            result,
            matches_expected,
            brute_force_matches,
        }
    }
}
