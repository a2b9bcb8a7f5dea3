use log::debug;

use crate::combinatorics::ksubsets;
use crate::engine::constants::NUMBER_COUNT;
use crate::engine::mode::SearchMode;

/// The six tiles reordered so a chosen pair leads and the other four keep
/// their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairSplit {
    numbers: [u64; NUMBER_COUNT],
}

impl PairSplit {
    fn new(numbers: &[u64; NUMBER_COUNT], first: usize, second: usize) -> Option<Self> {
        let mut reordered = [0u64; NUMBER_COUNT];
        let rest = numbers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != first && i != second)
            .map(|(_, &n)| n);

        let leading = [*numbers.get(first)?, *numbers.get(second)?];
        for (slot, n) in reordered.iter_mut().zip(leading.into_iter().chain(rest)) {
            *slot = n;
        }
        Some(Self { numbers: reordered })
    }

    pub fn numbers(&self) -> &[u64; NUMBER_COUNT] {
        &self.numbers
    }

    pub fn pair(&self) -> (u64, u64) {
        (self.numbers[0], self.numbers[1])
    }

    /// Same split with the leading pair swapped.
    pub fn mirrored(&self) -> Self {
        let mut numbers = self.numbers;
        numbers.swap(0, 1);
        Self { numbers }
    }
}

/// The 15 canonical splits, one per unordered pair of positions, in
/// lexicographic order of the pair.
pub fn pair_splits(numbers: &[u64; NUMBER_COUNT]) -> Vec<PairSplit> {
    ksubsets(NUMBER_COUNT, 2)
        .filter_map(|pair| match pair.as_slice() {
            [first, second] => PairSplit::new(numbers, first - 1, second - 1),
            _ => None,
        })
        .collect()
}

/// Splits a game sweeps for the given mode.
///
/// Thorough follows the canonical splits with their mirrors, skipping any
/// whose leading values are equal (the mirror would be the same sequence).
pub fn sweep_splits(numbers: &[u64; NUMBER_COUNT], mode: SearchMode) -> Vec<PairSplit> {
    let mut splits = pair_splits(numbers);

    if mode.mirrors_pairs() {
        let mirrors: Vec<PairSplit> = splits
            .iter()
            .filter(|split| {
                let (a, b) = split.pair();
                a != b
            })
            .map(PairSplit::mirrored)
            .collect();
        splits.extend(mirrors);
    }

    debug!("Sweeping {} pair-splits of {:?}", splits.len(), numbers);
    splits
}
