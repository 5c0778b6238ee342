//! Error types used across the crate.

use thiserror::Error;

/// Errors produced while constructing, parsing, or evaluating formulas.
///
/// Every error is terminal for the current formula: a formula either parses
/// and evaluates completely, or is rejected entirely.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A reserved operator or constant character was used as a proposition.
    #[error("reserved character {0:?} used as a proposition")]
    ReservedSymbol(char),

    /// The parser could not reduce the input to a well-formed formula:
    /// no atom, no top-level operator, and no unary prefix was found.
    #[error("malformed formula {0:?}")]
    MalformedFormula(String),

    /// Evaluation reached an atom with no assignment in the supplied valuation.
    #[error("no truth value assigned to symbol {0:?}")]
    UnknownSymbol(char),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ReservedSymbol('+');
        assert!(err.to_string().contains("'+'"));

        let err = Error::MalformedFormula("a b".to_string());
        assert!(err.to_string().contains("malformed"));

        let err = Error::UnknownSymbol('x');
        assert!(err.to_string().contains("'x'"));
    }
}
