use std::fmt;

use crate::expression::ast::Expression;

/// Fully parenthesised infix; every operator application is wrapped, so the
/// rendering shows the evaluation order without relying on precedence.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r) => write!(f, "({} + {})", l, r),
            Expression::Sub(l, r) => write!(f, "({} - {})", l, r),
            Expression::Mul(l, r) => write!(f, "({} * {})", l, r),
            Expression::Div(l, r) => write!(f, "({} / {})", l, r),
        }
    }
}
