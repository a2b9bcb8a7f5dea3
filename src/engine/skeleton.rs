use std::sync::OnceLock;

use log::{debug, info};

use crate::combinatorics::{ksubsets, permute};
use crate::engine::constants::{
    MIDDLE_LEN, NUMBER_COUNT, OPERATOR_COUNT, SEQUENCE_LEN, SKELETON_COUNT,
};
use crate::engine::token::{Operator, Token, TokenSequence};

/// A placeholder in a skeleton.
///
/// `Number(i)` is the `i`-th entry of a pair-split, `Op(i)` the `i`-th
/// operator of an arrangement (index 4 is always the final operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Number(u8),
    Op(u8),
}

impl Slot {
    pub fn is_op(self) -> bool {
        matches!(self, Slot::Op(_))
    }
}

/// Positional pattern of a valid 11-token postfix expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Skeleton {
    slots: [Slot; SEQUENCE_LEN],
}

impl Skeleton {
    /// Lay out the middle eight slots: `shape[i]` says whether middle slot `i`
    /// holds an operator, filled in turn from `numbers` and `operators`.
    fn from_shape(shape: &[bool], numbers: &[u8], operators: &[u8]) -> Option<Self> {
        let mut slots = [Slot::Number(0); SEQUENCE_LEN];
        slots[1] = Slot::Number(1);
        slots[SEQUENCE_LEN - 1] = Slot::Op((OPERATOR_COUNT - 1) as u8);

        let mut numbers = numbers.iter();
        let mut operators = operators.iter();
        for (slot, &is_op) in slots.iter_mut().skip(2).zip(shape) {
            *slot = if is_op {
                Slot::Op(*operators.next()?)
            } else {
                Slot::Number(*numbers.next()?)
            };
        }

        Some(Self { slots })
    }

    pub fn slots(&self) -> &[Slot; SEQUENCE_LEN] {
        &self.slots
    }

    /// Standard postfix rule: the stack depth never drops below one and ends
    /// at exactly one.
    pub fn is_valid(&self) -> bool {
        let mut depth = 0usize;
        for slot in &self.slots {
            if slot.is_op() {
                if depth < 2 {
                    return false;
                }
                depth -= 1;
            } else {
                depth += 1;
            }
        }
        depth == 1
    }

    /// Substitute concrete tiles and operators into the placeholders.
    #[inline]
    pub fn bind(
        &self,
        numbers: &[u64; NUMBER_COUNT],
        operators: &[Operator; OPERATOR_COUNT],
    ) -> TokenSequence {
        let mut tokens = [Token::Number(0); SEQUENCE_LEN];
        // slot indices are below NUMBER_COUNT / OPERATOR_COUNT by construction
        for (token, slot) in tokens.iter_mut().zip(&self.slots) {
            *token = match *slot {
                Slot::Number(i) => Token::Number(numbers[usize::from(i)]),
                Slot::Op(i) => Token::Op(operators[usize::from(i)]),
            };
        }
        tokens
    }
}

/// Every valid skeleton with slots 0 and 1 pinned to numbers and slot 10
/// pinned to the final operator.
#[derive(Debug, Clone)]
pub struct SkeletonCatalogue {
    skeletons: Vec<Skeleton>,
}

static CATALOGUE: OnceLock<SkeletonCatalogue> = OnceLock::new();

impl SkeletonCatalogue {
    /// Process-wide catalogue, built on first use.
    pub fn global() -> &'static SkeletonCatalogue {
        CATALOGUE.get_or_init(Self::build)
    }

    /// Choose which four middle slots hold operators, keep the placements that
    /// respect the postfix rule, then order the four trailing numbers and the
    /// four middle operators every possible way.
    pub fn build() -> Self {
        let middle_numbers: Vec<u8> = (2..NUMBER_COUNT as u8).collect();
        let middle_operators: Vec<u8> = (0..OPERATOR_COUNT as u8 - 1).collect();

        let mut skeletons = Vec::with_capacity(SKELETON_COUNT);
        let mut placements = 0usize;

        for placement in ksubsets(MIDDLE_LEN, OPERATOR_COUNT - 1) {
            let shape: Vec<bool> = (1..=MIDDLE_LEN).map(|i| placement.contains(&i)).collect();
            if !shape_is_valid(&shape) {
                continue;
            }
            placements += 1;

            for numbers in permute(&middle_numbers) {
                for operators in permute(&middle_operators) {
                    if let Some(skeleton) = Skeleton::from_shape(&shape, &numbers, &operators) {
                        skeletons.push(skeleton);
                    }
                }
            }
        }

        debug!("{} operator placements pass the postfix rule", placements);
        info!("Built a catalogue of {} skeletons", skeletons.len());
        Self { skeletons }
    }

    pub fn len(&self) -> usize {
        self.skeletons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skeletons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Skeleton> {
        self.skeletons.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Skeleton> {
        self.skeletons.get(index)
    }
}

impl<'a> IntoIterator for &'a SkeletonCatalogue {
    type Item = &'a Skeleton;
    type IntoIter = std::slice::Iter<'a, Skeleton>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two numbers are already on the stack when the middle starts; the depth
/// must stay at one or more throughout.
fn shape_is_valid(shape: &[bool]) -> bool {
    let mut depth = 2i32;
    for &is_op in shape {
        depth += if is_op { -1 } else { 1 };
        if depth < 1 {
            return false;
        }
    }
    true
}
