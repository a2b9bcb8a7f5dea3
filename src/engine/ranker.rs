use std::cmp::Reverse;
use std::fmt;

use log::debug;

use crate::combinatorics::{ksubsets, multisets};
use crate::engine::constants::{MAX_ADD, MAX_DIV, MAX_MUL, MAX_SUB, MIN_MUL, OPERATOR_COUNT};
use crate::engine::mode::SearchMode;
use crate::engine::token::Operator;

/// An unordered bag of five operators, kept sorted in canonical kind order.
///
/// The derived ordering compares the sorted operators, which is the canonical
/// tie-break order between bags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperatorMultiset {
    operators: [Operator; OPERATOR_COUNT],
}

impl OperatorMultiset {
    pub fn new(mut operators: [Operator; OPERATOR_COUNT]) -> Self {
        operators.sort();
        Self { operators }
    }

    /// All 56 bags, in canonical order.
    pub fn all() -> Vec<Self> {
        multisets(Operator::ALL.len(), OPERATOR_COUNT)
            .filter_map(|kinds| {
                let mut operators = [Operator::Add; OPERATOR_COUNT];
                for (slot, kind) in operators.iter_mut().zip(kinds) {
                    *slot = Operator::from_index(kind)?;
                }
                Some(Self::new(operators))
            })
            .collect()
    }

    pub fn operators(&self) -> &[Operator; OPERATOR_COUNT] {
        &self.operators
    }

    pub fn count(&self, op: Operator) -> usize {
        self.operators.iter().filter(|&&o| o == op).count()
    }

    pub fn contains(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    /// Whether the bag respects the tuned per-kind caps.
    pub fn within_caps(&self) -> bool {
        (MIN_MUL..=MAX_MUL).contains(&self.count(Operator::Mul))
            && self.count(Operator::Div) <= MAX_DIV
            && self.count(Operator::Add) <= MAX_ADD
            && self.count(Operator::Sub) <= MAX_SUB
    }

    /// The distinct ways to bind this bag to a skeleton.
    ///
    /// Skeletons already permute the four middle operator slots, so only the
    /// choice of the final operator matters. The middle four are taken as
    /// 4-subsets of the bag's positions and deduplicated; the result has one
    /// entry per distinct kind, ordered by final operator.
    pub fn arrangements(&self) -> Vec<Arrangement> {
        let mut arrangements: Vec<Arrangement> = Vec::new();

        for middle in ksubsets(OPERATOR_COUNT, OPERATOR_COUNT - 1) {
            let Some(arrangement) = self.arrangement_for(&middle) else {
                continue;
            };
            if !arrangements.iter().any(|a| a.last() == arrangement.last()) {
                arrangements.push(arrangement);
            }
        }

        arrangements.sort_by_key(Arrangement::last);
        arrangements
    }

    fn arrangement_for(&self, middle: &[usize]) -> Option<Arrangement> {
        let last_position = (1..=OPERATOR_COUNT).find(|p| !middle.contains(p))?;

        let mut operators = [Operator::Add; OPERATOR_COUNT];
        for (slot, &position) in operators.iter_mut().zip(middle) {
            *slot = *self.operators.get(position - 1)?;
        }
        *operators.last_mut()? = *self.operators.get(last_position - 1)?;

        Some(Arrangement { operators })
    }

    /// Number of distinct arrangements.
    pub fn variety(&self) -> usize {
        self.arrangements().len()
    }
}

impl fmt::Display for OperatorMultiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in &self.operators {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Operators in skeleton order: four middle placeholders, then the final one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrangement {
    operators: [Operator; OPERATOR_COUNT],
}

impl Arrangement {
    pub fn operators(&self) -> &[Operator; OPERATOR_COUNT] {
        &self.operators
    }

    pub fn last(&self) -> Operator {
        self.operators[OPERATOR_COUNT - 1]
    }
}

/// Sweep order of the operator bags.
///
/// Tuned keeps the capped bags (all of which multiply), most varied first.
/// Thorough appends the remaining bags, those with a multiplication first,
/// then by variety. Ties keep canonical order.
pub fn rank(mode: SearchMode) -> Vec<OperatorMultiset> {
    let (mut ranked, mut rest): (Vec<_>, Vec<_>) = OperatorMultiset::all()
        .into_iter()
        .partition(OperatorMultiset::within_caps);

    ranked.sort_by_key(|bag| Reverse(bag.variety()));
    debug!("{} operator bags within caps", ranked.len());

    if mode.sweeps_uncapped() {
        rest.sort_by_key(|bag| {
            let multiplies = bag.contains(Operator::Mul);
            (!multiplies, Reverse(bag.variety()))
        });
        ranked.extend(rest);
    }

    ranked
}
