//! Countdown - a solver for the Countdown numbers game
//!
//! Every arithmetic expression over the six tiles is written in postfix form
//! and swept as a skeleton of number and operator placeholders. Operator bags
//! are ranked so that likely candidates are tried first, and batches of
//! candidates are evaluated in parallel until one reaches the target or the
//! time limit passes.

pub mod combinatorics;
pub mod engine;
pub mod expression;
pub mod game;
pub mod solver;

// Re-export the main public API
pub use engine::SearchMode;
pub use expression::{Expression, ExpressionError};
pub use game::{GameError, SourceNumbers, Target};
pub use solver::{CountdownSolver, SearchOutcome, SearchReport, Solution, SolverConfig, SolverError};

/// Solve one game with the default configuration
///
/// # Arguments
///
/// * `numbers` - The six tiles, each legal under the large and small pools
/// * `target` - The number to reach, between 101 and 999
///
/// # Errors
///
/// This function will return an error if:
/// * The tiles could not have been dealt from the pools
/// * The target is outside `101..=999`
/// * The worker threads cannot be started
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve([75, 50, 8, 4, 3, 2], 101) {
///     Ok(report) => match report.solution() {
///         Some(solution) => println!("{}", solution),
///         None => println!("No solution found"),
///     },
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: [u64; 6], target: i64) -> Result<SearchReport, SolverError> {
    let numbers = SourceNumbers::new(numbers)?;
    let target = Target::new(target)?;

    let solver = CountdownSolver::new(SolverConfig::default())?;
    Ok(solver.solve(&numbers, target))
}
