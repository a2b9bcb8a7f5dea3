// Shape of a Countdown postfix expression
pub const NUMBER_COUNT: usize = 6;
pub const OPERATOR_COUNT: usize = 5;
pub const SEQUENCE_LEN: usize = NUMBER_COUNT + OPERATOR_COUNT;

/// Slots between the two pinned leading numbers and the pinned final operator.
pub const MIDDLE_LEN: usize = SEQUENCE_LEN - 3;

pub const SKELETON_COUNT: usize = 24_192;
pub const MULTISET_COUNT: usize = 56;
pub const PAIR_SPLIT_COUNT: usize = 15;

// Per-kind caps on the operator bags the tuned sweep keeps
pub const MIN_MUL: usize = 1;
pub const MAX_MUL: usize = 3;
pub const MAX_DIV: usize = 2;
pub const MAX_ADD: usize = 3;
pub const MAX_SUB: usize = 2;
