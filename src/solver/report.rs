use std::fmt;
use std::time::Duration;

use crate::engine::{Hit, Token};
use crate::expression::Expression;

/// An expression that reaches the target, exactly as the evaluator built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    target: u64,
    expression: Expression,
    postfix: Vec<Token>,
}

impl Solution {
    pub fn from_hit(target: u64, hit: &Hit) -> Option<Self> {
        Some(Self {
            target,
            expression: hit.expression()?,
            postfix: hit.postfix().to_vec(),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expression)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    /// Every candidate in the swept space was tried.
    Exhausted,
    /// The time limit passed before the sweep finished.
    TimedOut,
}

/// What one game's search did.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Evaluations actually performed, summed over every worker.
    pub combinations_tried: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.solution().is_some()
    }
}

/// Snapshot handed to an observer after each joined batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub multiset_index: usize,
    pub arrangement_index: usize,
    pub combinations_tried: u64,
    pub elapsed: Duration,
}

/// Receives progress from the orchestrating thread.
pub trait SearchObserver {
    fn on_batch(&mut self, progress: &Progress);
}

/// Observer that ignores progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl SearchObserver for NoProgress {
    fn on_batch(&mut self, _progress: &Progress) {}
}
