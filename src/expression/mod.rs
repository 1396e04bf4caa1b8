//! Operators, expression trees and solution traces

mod ast;
mod display;
mod errors;
mod eval;
mod trace;

pub use ast::{Expression, Operator, OperatorSet};
pub use errors::ExpressionError;
pub use trace::{Solution, Step};
