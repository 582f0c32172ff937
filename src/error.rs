//! Error types returned by fallible fraction operations

use thiserror::Error;

/// Failure of a construction, mutation or arithmetic operation on a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    /// The denominator is zero or negative, or an operand carries such a denominator
    #[error("denominator must be a positive integer")]
    InvalidDenominator,

    /// The divisor has the value zero
    #[error("division by a zero-valued fraction")]
    DivisionByZero,

    /// An intermediate result does not fit in the integer type
    #[error("integer overflow in fraction arithmetic")]
    Overflow,

    /// A float is not finite or its scaled value does not fit in the integer type
    #[error("value cannot be represented as a fraction")]
    Unrepresentable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    InvalidInteger,
    InvalidDenominator,
}

/// Failure of parsing a fraction from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.description())]
pub struct ParseFractionError {
    pub(crate) kind: ParseErrorKind,
}

impl ParseErrorKind {
    fn description(&self) -> &'static str {
        match self {
            ParseErrorKind::Empty => "cannot parse fraction from empty string",
            ParseErrorKind::InvalidInteger => "invalid integer in fraction literal",
            ParseErrorKind::InvalidDenominator => "denominator of fraction literal must be positive",
        }
    }
}

impl ParseFractionError {
    #[inline]
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        ParseFractionError { kind }
    }

    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_test() {
        assert_eq!(
            FractionError::InvalidDenominator.to_string(),
            "denominator must be a positive integer"
        );
        assert_eq!(
            ParseFractionError::new(ParseErrorKind::Empty).to_string(),
            "cannot parse fraction from empty string"
        );
    }
}
