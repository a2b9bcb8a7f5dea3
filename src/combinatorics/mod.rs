//! Lazy combinatorial sequences used to build the search tables

mod multisets;
mod permutations;
mod subsets;

pub use multisets::{Multisets, multisets};
pub use permutations::{Permutations, permute};
pub use subsets::{KSubsets, ksubsets};
