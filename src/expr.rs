//! Expression trees for well-formed propositional formulas.

use std::fmt;

use crate::error::{Error, Result};
use crate::valuation::Valuation;

/// A binary connective, used to direct [`Expr::distribute`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BinOp {
    And,
    Or,
}

impl BinOp {
    /// Builds the corresponding binary node over two operands.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinOp::And => Expr::and(lhs, rhs),
            BinOp::Or => Expr::or(lhs, rhs),
        }
    }
}

/// A well-formed propositional formula.
///
/// Binary nodes own both children and `Not` owns one; atoms and constants
/// are leaves. Truth values never live in the tree: they are supplied by a
/// [`Valuation`] at evaluation time. Rewrites construct new parent nodes
/// and reuse child subtrees by move; no node is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Atom(char),
    Const(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn atom(symbol: char) -> Self {
        Expr::Atom(symbol)
    }

    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the formula under the given valuation.
    ///
    /// Fails with [`Error::UnknownSymbol`] if an atom has no assignment.
    pub fn evaluate(&self, valuation: &Valuation) -> Result<bool> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Atom(symbol) => valuation
                .value(*symbol)
                .ok_or(Error::UnknownSymbol(*symbol)),
            Expr::Not(inner) => Ok(!inner.evaluate(valuation)?),
            Expr::And(lhs, rhs) => {
                let left = lhs.evaluate(valuation)?;
                let right = rhs.evaluate(valuation)?;
                Ok(left && right)
            }
            Expr::Or(lhs, rhs) => {
                let left = lhs.evaluate(valuation)?;
                let right = rhs.evaluate(valuation)?;
                Ok(left || right)
            }
        }
    }

    /// The De Morgan transform of this node:
    ///
    /// - `~(a+b)` becomes `~a*~b`
    /// - `~(a*b)` becomes `~a+~b`
    /// - `~a+~b` becomes `~(a*b)`
    /// - `~a*~b` becomes `~(a+b)`
    ///
    /// Any other shape is returned unchanged. The result evaluates
    /// identically to the original under every assignment.
    pub fn demorgan_dual(self) -> Expr {
        match self {
            Expr::Not(inner) => match *inner {
                Expr::Or(a, b) => Expr::and(Expr::Not(a), Expr::Not(b)),
                Expr::And(a, b) => Expr::or(Expr::Not(a), Expr::Not(b)),
                other => Expr::Not(Box::new(other)),
            },
            Expr::Or(a, b) => match (*a, *b) {
                (Expr::Not(x), Expr::Not(y)) => Expr::Not(Box::new(Expr::And(x, y))),
                (a, b) => Expr::or(a, b),
            },
            Expr::And(a, b) => match (*a, *b) {
                (Expr::Not(x), Expr::Not(y)) => Expr::Not(Box::new(Expr::Or(x, y))),
                (a, b) => Expr::and(a, b),
            },
            other => other,
        }
    }

    /// Pushes this node under a new binary operator, distributing over the
    /// existing children when this node is binary:
    /// a binary node `s(l, r)` becomes `s(op(lhs, l), op(lhs, r))`;
    /// a leaf or unary node becomes `op(lhs, self)` directly.
    pub fn distribute(self, op: BinOp, lhs: Expr) -> Expr {
        match self {
            Expr::And(l, r) => Expr::and(op.apply(lhs.clone(), *l), op.apply(lhs, *r)),
            Expr::Or(l, r) => Expr::or(op.apply(lhs.clone(), *l), op.apply(lhs, *r)),
            other => op.apply(lhs, other),
        }
    }

    /// Extracts the free proposition symbols as a fresh valuation with all
    /// entries defaulting to `false`, in first-occurrence order, left
    /// subtree before right. Constants contribute no entries.
    pub fn propositions(&self) -> Result<Valuation> {
        match self {
            Expr::Atom(symbol) => Valuation::singleton(*symbol),
            Expr::Const(_) => Ok(Valuation::new()),
            Expr::Not(inner) => inner.propositions(),
            Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => {
                let mut left = lhs.propositions()?;
                left.merge(rhs.propositions()?);
                Ok(left)
            }
        }
    }
}

/// Infix rendering without parentheses: `left`, then the node's symbol,
/// then `right`. Grouping is not re-inserted, so the output is not
/// guaranteed to parse back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(symbol) => write!(f, "{}", symbol),
            Expr::Const(value) => write!(f, "{}", if *value { '1' } else { '0' }),
            Expr::Not(inner) => write!(f, "~{}", inner),
            Expr::And(lhs, rhs) => write!(f, "{}*{}", lhs, rhs),
            Expr::Or(lhs, rhs) => write!(f, "{}+{}", lhs, rhs),
        }
    }
}
