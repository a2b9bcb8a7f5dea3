use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Negative intermediate: {left} - {right}")]
    NegativeResult { left: u64, right: u64 },
    #[error("Inexact division: {left} / {right}")]
    InexactDivision { left: u64, right: u64 },
    #[error("Arithmetic overflow")]
    Overflow,
}
