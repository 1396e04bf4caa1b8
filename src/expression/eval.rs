use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Apply the operator to `left` and `right` in that order.
    ///
    /// Every legal result is a non-negative integer: subtraction may reach
    /// zero but not go below it, division needs a non-zero divisor and must
    /// be exact, and nothing may overflow `u64`.
    ///
    /// # Errors
    ///
    /// Returns an error when the combination is illegal under those rules.
    #[inline]
    pub fn apply(self, left: u64, right: u64) -> Result<u64, ExpressionError> {
        let overflow = || ExpressionError::Overflow {
            left,
            operator: self,
            right,
        };
        let result = match self {
            Operator::Add => left.checked_add(right).ok_or_else(overflow)?,
            Operator::Multiply => left.checked_mul(right).ok_or_else(overflow)?,
            Operator::Subtract => left
                .checked_sub(right)
                .ok_or(ExpressionError::NegativeResult { left, right })?,
            Operator::Divide => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                if left % right != 0 {
                    return Err(ExpressionError::InexactDivision { left, right });
                }
                left / right
            }
        };
        Ok(result)
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when any node is an illegal combination: a
    /// negative difference, an inexact division, a division by zero, or an
    /// overflow.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                match self.operator() {
                    Some(op) => op.apply(left, right),
                    None => Ok(left),
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression {} failed to evaluate: {}", self, e);
        }
        result
    }
}

#[cfg(test)]
mod tests_apply {
    use super::*;

    #[test]
    fn test_apply_basic_operations() {
        assert_eq!(Operator::Add.apply(9, 3), Ok(12));
        assert_eq!(Operator::Subtract.apply(9, 3), Ok(6));
        assert_eq!(Operator::Multiply.apply(9, 3), Ok(27));
        assert_eq!(Operator::Divide.apply(9, 3), Ok(3));
    }

    #[test]
    fn test_apply_allows_zero_but_not_negative_difference() {
        assert_eq!(Operator::Subtract.apply(7, 7), Ok(0));
        assert_eq!(
            Operator::Subtract.apply(3, 7),
            Err(ExpressionError::NegativeResult { left: 3, right: 7 })
        );
    }

    #[test]
    fn test_apply_zero_operands() {
        assert_eq!(Operator::Multiply.apply(9, 0), Ok(0));
        assert_eq!(Operator::Add.apply(9, 0), Ok(9));
        assert_eq!(
            Operator::Divide.apply(0, 0),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_rejects_inexact_division() {
        assert_eq!(
            Operator::Divide.apply(7, 2),
            Err(ExpressionError::InexactDivision { left: 7, right: 2 })
        );
        assert_eq!(
            Operator::Divide.apply(7, 0),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_rejects_overflow() {
        assert!(matches!(
            Operator::Multiply.apply(u64::MAX, 2),
            Err(ExpressionError::Overflow { .. })
        ));
        assert!(matches!(
            Operator::Add.apply(u64::MAX, 1),
            Err(ExpressionError::Overflow { .. })
        ));
    }
}
