//! Internal nodes shared by [`Expression`][crate::expression::Expression] and [`Rule`][crate::rule::Rule] trees.

use std::fmt::{Display, Formatter};

use crate::norm::Norms;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    And,
    Or,
    Not,
}

impl Connective {
    pub const fn symbol(self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
            Connective::Not => "!",
        }
    }

    /// Reduce `children` through the reducer of `norms` matching this connective.
    pub fn apply<T, E, F>(self, norms: Norms, children: &[T], degree: F) -> Result<f64, E>
    where
        F: FnMut(&T) -> Result<f64, E>,
    {
        match self {
            Connective::And => norms.apply_and(children, degree),
            Connective::Or => norms.apply_or(children, degree),
            Connective::Not => norms.apply_not(children, degree),
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A connective applied to an ordered list of operands.
///
/// # Invariants
///
/// - `Not` has exactly one operand
/// - `And` and `Or` have at least two operands
#[derive(Debug, Clone)]
pub struct Combinator<T> {
    connective: Connective,
    operands: Box<[T]>,
}

// Constructors
impl<T> Combinator<T> {
    pub fn and(a: T, b: T) -> Self {
        Combinator {
            connective: Connective::And,
            operands: Box::new([a, b]),
        }
    }

    pub fn or(a: T, b: T) -> Self {
        Combinator {
            connective: Connective::Or,
            operands: Box::new([a, b]),
        }
    }

    pub fn not(a: T) -> Self {
        Combinator {
            connective: Connective::Not,
            operands: Box::new([a]),
        }
    }

    /// N-ary AND/OR node.
    ///
    /// # Panics
    ///
    /// Panics if `connective` is `Not`, or if fewer than two operands are given.
    pub fn nary(connective: Connective, operands: Vec<T>) -> Self {
        assert_ne!(connective, Connective::Not, "Negation takes exactly one operand");
        assert!(operands.len() >= 2, "{} takes at least two operands", connective);
        Combinator {
            connective,
            operands: operands.into_boxed_slice(),
        }
    }
}

// Getters
impl<T> Combinator<T> {
    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn operands(&self) -> &[T] {
        &self.operands
    }

    pub fn apply<E, F>(&self, norms: Norms, degree: F) -> Result<f64, E>
    where
        F: FnMut(&T) -> Result<f64, E>,
    {
        self.connective.apply(norms, &self.operands, degree)
    }
}

impl<T: Display> Display for Combinator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &*self.operands {
            [single] => write!(f, "{}{}", self.connective, single),
            operands => {
                write!(f, "(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", self.connective)?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}
