use std::fmt;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// One reduction: two values combined into one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub left: u64,
    pub operator: Operator,
    pub right: u64,
    pub result: u64,
}

impl Step {
    /// Combine two values with the larger one first.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination is illegal.
    pub fn combine(a: u64, operator: Operator, b: u64) -> Result<Self, ExpressionError> {
        let (left, right) = if a >= b { (a, b) } else { (b, a) };
        let result = operator.apply(left, right)?;
        Ok(Self {
            left,
            operator,
            right,
            result,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// The best value found for a hand and how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The value is one of the cards
    Leaf(u64),
    /// The value is the result of the last step
    Combined { steps: Vec<Step>, value: u64 },
}

impl Solution {
    pub fn value(&self) -> u64 {
        match self {
            Solution::Leaf(value) | Solution::Combined { value, .. } => *value,
        }
    }

    pub fn steps(&self) -> &[Step] {
        match self {
            Solution::Leaf(_) => &[],
            Solution::Combined { steps, .. } => steps,
        }
    }

    /// Number of cards the solution consumes
    pub fn card_count(&self) -> usize {
        self.steps().len() + 1
    }

    pub fn distance(&self, target: u64) -> u64 {
        self.value().abs_diff(target)
    }

    pub fn is_exact(&self, target: u64) -> bool {
        self.value() == target
    }

    /// Put `step` in front of the steps that reduced its result further.
    pub fn after(step: Step, rest: Solution) -> Solution {
        match rest {
            Solution::Leaf(value) => Solution::Combined {
                steps: vec![step],
                value,
            },
            Solution::Combined { steps, value } => {
                let mut all = Vec::with_capacity(steps.len() + 1);
                all.push(step);
                all.extend(steps);
                Solution::Combined { steps: all, value }
            }
        }
    }

    /// Replay every step and check the legality rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule a step breaks, a mismatch between the last
    /// step and the reported value, or an error for a combined solution
    /// without steps.
    pub fn verify(&self) -> Result<(), ExpressionError> {
        let Solution::Combined { steps, value } = self else {
            return Ok(());
        };

        for (index, step) in steps.iter().enumerate() {
            if step.left < step.right {
                return Err(ExpressionError::UnorderedOperands { index });
            }
            let actual = step.operator.apply(step.left, step.right)?;
            if actual != step.result {
                return Err(ExpressionError::StepMismatch {
                    index,
                    claimed: step.result,
                    actual,
                });
            }
        }

        match steps.last() {
            Some(last) if last.result == *value => Ok(()),
            Some(last) => Err(ExpressionError::StepMismatch {
                index: steps.len() - 1,
                claimed: *value,
                actual: last.result,
            }),
            None => Err(ExpressionError::EmptyTrace { value: *value }),
        }
    }

    /// Rebuild the steps as a single infix expression.
    ///
    /// Each operand is taken from the latest unused intermediate result of
    /// the same value, otherwise it is a card.
    pub fn to_expression(&self) -> Expression {
        let steps = match self {
            Solution::Leaf(value) => return Expression::Number(*value),
            Solution::Combined { steps, .. } => steps,
        };

        fn take(pending: &mut Vec<(u64, Expression)>, value: u64) -> Expression {
            match pending.iter().rposition(|(v, _)| *v == value) {
                Some(pos) => pending.remove(pos).1,
                None => Expression::Number(value),
            }
        }

        let mut pending: Vec<(u64, Expression)> = Vec::with_capacity(steps.len());

        for step in steps {
            let left = take(&mut pending, step.left);
            let right = take(&mut pending, step.right);
            pending.push((step.result, Expression::binary(step.operator, left, right)));
        }

        match pending.pop() {
            Some((_, expr)) => expr,
            None => Expression::Number(self.value()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Solution::Leaf(value) => write!(f, "{} (single card)", value),
            Solution::Combined { steps, value } => {
                for step in steps {
                    writeln!(f, "{}", step)?;
                }
                write!(f, "= {}", value)
            }
        }
    }
}
