use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate with ordinary integer arithmetic under the game's legality
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns an error when any intermediate step would be:
    /// - a division by zero
    /// - a negative difference
    /// - a division with a remainder
    /// - outside the `u64` range
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_add(right).ok_or_else(|| {
                    debug!("Overflow in {} + {}", left, right);
                    ExpressionError::Overflow
                })
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_sub(right).ok_or_else(|| {
                    debug!("Negative intermediate: {} - {}", left, right);
                    ExpressionError::NegativeResult { left, right }
                })
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_mul(right).ok_or_else(|| {
                    debug!("Overflow in {} * {}", left, right);
                    ExpressionError::Overflow
                })
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0 {
                    debug!("Division by zero detected");
                    Err(ExpressionError::DivisionByZero)
                } else if left % right != 0 {
                    debug!("Inexact division: {} / {}", left, right);
                    Err(ExpressionError::InexactDivision { left, right })
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}
