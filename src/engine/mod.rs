//! Postfix search engine
//!
//! A candidate is a skeleton (positional pattern of number and operator
//! placeholders) bound to a pair-split of the six tiles and an arrangement of
//! one operator bag. The evaluator runs candidates with a value stack and
//! stops at the first intermediate equal to the target.

pub mod constants;
mod evaluator;
mod mode;
mod ranker;
mod skeleton;
mod split;
mod token;

pub use evaluator::{Evaluation, Evaluator, Hit, apply, reconstruct};
pub use mode::{PruningRules, SearchMode};
pub use ranker::{Arrangement, OperatorMultiset, rank};
pub use skeleton::{Skeleton, SkeletonCatalogue, Slot};
pub use split::{PairSplit, pair_splits, sweep_splits};
pub use token::{Operator, Token, TokenSequence, render_postfix};
