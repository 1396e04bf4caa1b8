use thiserror::Error;

use crate::expression::ast::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{left} / {right} is not an exact division")]
    InexactDivision { left: u64, right: u64 },
    #[error("{left} - {right} is negative")]
    NegativeResult { left: u64, right: u64 },
    #[error("{left} {operator} {right} overflows")]
    Overflow {
        left: u64,
        operator: Operator,
        right: u64,
    },
    #[error("Unknown operator symbol: '{0}'")]
    UnknownOperator(char),
    #[error("Operator set cannot be empty")]
    EmptyOperatorSet,
    #[error("Step {index} claims {claimed} but evaluates to {actual}")]
    StepMismatch {
        index: usize,
        claimed: u64,
        actual: u64,
    },
    #[error("A combined solution for {value} has no steps")]
    EmptyTrace { value: u64 },
    #[error("Step {index} has its smaller operand first")]
    UnorderedOperands { index: usize },
}
