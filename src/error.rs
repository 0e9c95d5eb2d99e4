//! Error types for the expression pipeline.
//!
//! Failures are split by the stage that detects them:
//!
//! - [`ParseError`] comes from the tokenizer and the shunting-yard parser.
//!   It always aborts the pipeline before any row is evaluated.
//! - [`EvalError`] signals a structurally invalid expression. It is recorded in
//!   each failing row; only an expression without variables, or one with an
//!   unusable postfix sequence, fails as a whole.
//! - [`Error`] is what [`evaluate_expression`][crate::evaluate_expression] returns.

use thiserror::Error;

use crate::operator::Operator;
use crate::types::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token pattern matches at `position` (byte offset in the normalized input).
    #[error("invalid token at position {position}: `{remainder}`")]
    Lexical { position: usize, remainder: String },

    /// A symbol that is neither an identifier, a parenthesis, nor a known operator.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    /// Unmatched parenthesis; `position` is the index in the token sequence.
    #[error("unbalanced parenthesis at token {position}")]
    UnbalancedParen { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum EvalError {
    /// An operator found fewer operands on the stack than its arity.
    #[error("malformed expression: operator `{0}` is missing an operand")]
    MissingOperand(Operator),

    /// The postfix sequence produced no value at all.
    #[error("malformed expression: nothing to evaluate")]
    EmptyExpression,

    /// More than one value was left after replaying the postfix sequence.
    #[error("malformed expression: {count} values left without an operator")]
    DanglingOperands { count: usize },

    /// An identifier without a matching variable node.
    #[error("malformed expression: unknown variable `{0}`")]
    UnknownVariable(String),

    /// An operator node carries a number of operands that differs from its arity.
    #[error("malformed expression: operator `{operator}` applied to {operands} operand(s)")]
    ArityMismatch { operator: Operator, operands: usize },

    /// An operator node refers to an operand that has not been evaluated yet.
    #[error("malformed expression: node {node} refers to node {operand} which is not evaluated before it")]
    ForwardReference { node: NodeId, operand: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// The truth table would have `2^count` rows, which exceeds the configured ceiling.
    #[error("too many variables: {count} (at most {limit} are supported)")]
    TooManyVariables { count: usize, limit: usize },

    /// The normalized expression is longer than the configured ceiling.
    #[error("expression too long: {len} characters (at most {limit} are supported)")]
    ExpressionTooLong { len: usize, limit: usize },
}

impl Error {
    /// Returns `true` if the error was raised before any evaluation took place.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_message() {
        let err = ParseError::Lexical {
            position: 2,
            remainder: "# B".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 2"));
        assert!(msg.contains("# B"));
    }

    #[test]
    fn test_missing_operand_names_operator() {
        let err = EvalError::MissingOperand(Operator::And);
        assert_eq!(err.to_string(), "malformed expression: operator `&` is missing an operand");
    }

    #[test]
    fn test_from_conversions() {
        let err: Error = ParseError::UnbalancedParen { position: 0 }.into();
        assert!(err.is_parse_error());
        let err: Error = EvalError::EmptyExpression.into();
        assert!(!err.is_parse_error());
        assert!(matches!(err, Error::Eval(EvalError::EmptyExpression)));
    }

    #[test]
    fn test_expression_too_long_message() {
        let err = Error::ExpressionTooLong { len: 5000, limit: 4096 };
        assert_eq!(err.to_string(), "expression too long: 5000 characters (at most 4096 are supported)");
    }
}
