use crate::engine::constants::NUMBER_COUNT;
use crate::engine::mode::PruningRules;
use crate::engine::token::{Operator, Token, TokenSequence};
use crate::expression::Expression;

/// Result of running one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Pruned, malformed, or never reached the target.
    Miss,
    Hit(Hit),
}

/// A candidate whose value at `position` equalled the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    tokens: TokenSequence,
    position: usize,
}

impl Hit {
    pub fn new(tokens: TokenSequence, position: usize) -> Self {
        Self { tokens, position }
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Index of the operator whose result matched.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The postfix prefix that produced the target.
    pub fn postfix(&self) -> &[Token] {
        self.tokens.get(..=self.position).unwrap_or(&self.tokens)
    }

    /// Rebuild the exact expression that reached the target.
    pub fn expression(&self) -> Option<Expression> {
        reconstruct(self.postfix())
    }
}

/// Runs candidates against one target under a fixed set of pruning rules.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    target: u64,
    rules: PruningRules,
}

impl Evaluator {
    pub fn new(target: u64, rules: PruningRules) -> Self {
        Self { target, rules }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn evaluate(&self, tokens: &TokenSequence) -> Evaluation {
        match self.hit_position(tokens) {
            Some(position) => Evaluation::Hit(Hit::new(*tokens, position)),
            None => Evaluation::Miss,
        }
    }

    /// Scan left to right with a value stack; stop at the first operator
    /// result equal to the target, or at the first pruned step.
    #[inline]
    pub fn hit_position(&self, tokens: &TokenSequence) -> Option<usize> {
        let mut stack = [0u64; NUMBER_COUNT];
        let mut depth = 0usize;

        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Number(n) => {
                    *stack.get_mut(depth)? = n;
                    depth += 1;
                }
                Token::Op(op) => {
                    if depth < 2 {
                        return None;
                    }
                    let b = *stack.get(depth - 1)?;
                    let a = *stack.get(depth - 2)?;
                    let result = apply(op, a, b, self.rules)?;
                    if result == self.target {
                        return Some(position);
                    }
                    *stack.get_mut(depth - 2)? = result;
                    depth -= 1;
                }
            }
        }
        None
    }
}

/// One game step `a op b`, or `None` when the step is illegal or pointless.
///
/// Illegal: negative difference, division by zero, inexact division, overflow.
/// Pointless: multiplying or dividing by one, and (when the rules ask for it)
/// a difference or quotient equal to the operand just consumed.
#[inline]
pub fn apply(op: Operator, a: u64, b: u64, rules: PruningRules) -> Option<u64> {
    match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => {
            let difference = a.checked_sub(b)?;
            if rules.reject_reproductions && difference == b {
                return None;
            }
            Some(difference)
        }
        Operator::Mul => {
            if a == 1 || b == 1 {
                return None;
            }
            a.checked_mul(b)
        }
        Operator::Div => {
            if b == 0 || b == 1 || a % b != 0 {
                return None;
            }
            let quotient = a / b;
            if rules.reject_reproductions && quotient == b {
                return None;
            }
            Some(quotient)
        }
    }
}

/// Replay a postfix prefix building the expression tree, popping `b` then `a`
/// for each operator so the tree mirrors the evaluation exactly.
pub fn reconstruct(tokens: &[Token]) -> Option<Expression> {
    let mut stack: Vec<Expression> = Vec::with_capacity(NUMBER_COUNT);

    for token in tokens {
        match *token {
            Token::Number(n) => stack.push(Expression::Number(n)),
            Token::Op(op) => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(Expression::binary(op, a, b));
            }
        }
    }

    stack.pop()
}
