use crate::engine::Operator;

/// An arithmetic expression over game tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(left, right),
            Operator::Sub => Expression::Sub(left, right),
            Operator::Mul => Expression::Mul(left, right),
            Operator::Div => Expression::Div(left, right),
        }
    }

    /// The root operator, or `None` for a bare number.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Sub),
            Expression::Mul(_, _) => Some(Operator::Mul),
            Expression::Div(_, _) => Some(Operator::Div),
        }
    }

    pub fn operands(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => Some((&**l, &**r)),
        }
    }

    /// Tiles used, left to right.
    pub fn leaves(&self) -> Vec<u64> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            match expr.operands() {
                Some((l, r)) => {
                    pending.push(r);
                    pending.push(l);
                }
                None => {
                    if let Expression::Number(n) = expr {
                        leaves.push(*n);
                    }
                }
            }
        }
        leaves
    }
}
