use std::fmt;
use std::str::FromStr;

use crate::expression::errors::ExpressionError;

/// One of the four arithmetic operations, declared in search order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator in declared order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse a single operator symbol, accepting the usual typographic variants
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    fn bit(self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Subtract => 1 << 1,
            Operator::Multiply => 1 << 2,
            Operator::Divide => 1 << 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A set of allowed operators.
///
/// Iteration always follows the declared order of [`Operator`], no matter
/// how the set was built, so searches over the same set visit branches in
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorSet {
    bits: u8,
}

impl OperatorSet {
    pub fn all() -> Self {
        Operator::ALL.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub fn with(self, operator: Operator) -> Self {
        Self {
            bits: self.bits | operator.bit(),
        }
    }

    #[must_use]
    pub fn without(self, operator: Operator) -> Self {
        Self {
            bits: self.bits & !operator.bit(),
        }
    }

    pub fn contains(&self, operator: Operator) -> bool {
        self.bits & operator.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Operator> {
        Operator::ALL
            .into_iter()
            .filter(move |op| self.contains(*op))
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl FromStr for OperatorSet {
    type Err = ExpressionError;

    /// Parse a string of operator symbols such as `"+-*/"`. Whitespace and
    /// commas are ignored; repeated symbols are harmless.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let set = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Operator::from_symbol(c).ok_or(ExpressionError::UnknownOperator(c)))
            .collect::<Result<OperatorSet, _>>()?;

        if set.is_empty() {
            return Err(ExpressionError::EmptyOperatorSet);
        }
        Ok(set)
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in self.iter() {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// An arithmetic expression over card values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(u64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match operator {
            Operator::Add => Expression::Add(l, r),
            Operator::Subtract => Expression::Sub(l, r),
            Operator::Multiply => Expression::Mul(l, r),
            Operator::Divide => Expression::Div(l, r),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Subtract),
            Expression::Mul(_, _) => Some(Operator::Multiply),
            Expression::Div(_, _) => Some(Operator::Divide),
        }
    }

    /// Card values at the leaves, left to right
    pub fn leaves(&self) -> Vec<u64> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }
}
