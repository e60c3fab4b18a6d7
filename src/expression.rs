//! Fuzzy expressions over a single crisp value.
//!
//! An [`Expression`] is either a [`Shape`] leaf wrapping a membership function,
//! or a [`Combinator`] joining child expressions with AND, OR or NOT.
//! Combining expressions never evaluates anything: `&`, `|`, `-` and `!` only
//! build a new tree node. Degrees are computed by [`Expression::evaluate`], which
//! feeds the same crisp value to every leaf and reduces through the chosen [`Norms`].
//!
//! # Examples
//!
//! ```
//! use frules_rs::expression::Expression;
//! use frules_rs::norm::Norms;
//! use frules_rs::shape::triangle;
//!
//! let warm = Expression::named(triangle(15.0, 35.0), "warm");
//! let hot = Expression::named(triangle(25.0, 45.0), "hot");
//! let e = &warm & &hot;
//!
//! assert_eq!(e.to_string(), "(warm & hot)");
//! assert_eq!(e.evaluate(30.0), 0.5);
//! assert_eq!(e.evaluate_with(Norms::ProdSum, 30.0), 0.25);
//! ```

use std::convert::Infallible;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Neg, Not};
use std::sync::Arc;

use log::debug;

use crate::connective::Combinator;
use crate::hedge::Hedge;
use crate::norm::Norms;

/// Shared membership function mapping a crisp value to a degree.
pub type Membership = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Leaf of an expression tree: a membership function with an optional name.
#[derive(Clone)]
pub struct Shape {
    membership: Membership,
    name: Option<String>,
}

impl Shape {
    pub fn new<F>(membership: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Shape {
            membership: Arc::new(membership),
            name: None,
        }
    }

    pub fn named<F>(membership: F, name: impl Into<String>) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Shape {
            membership: Arc::new(membership),
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn degree(&self, x: f64) -> f64 {
        (self.membership)(x)
    }

    /// A new shape whose degrees are passed through `hedge`.
    ///
    /// A named shape `tall` becomes `very tall`; unnamed shapes stay unnamed.
    pub fn hedged(&self, hedge: Hedge) -> Self {
        let inner = Arc::clone(&self.membership);
        Shape {
            membership: Arc::new(move |x| hedge.apply(inner(x))),
            name: self.name.as_ref().map(|name| format!("{} {}", hedge, name)),
        }
    }
}

impl Debug for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name().unwrap_or("undefined"))
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    Shape(Shape),
    Combinator(Combinator<Expression>),
}

// Constructors
impl Expression {
    pub fn new<F>(membership: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Expression::Shape(Shape::new(membership))
    }

    pub fn named<F>(membership: F, name: impl Into<String>) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Expression::Shape(Shape::named(membership, name))
    }

    pub fn and_of(a: Self, b: Self) -> Self {
        Expression::Combinator(Combinator::and(a, b))
    }

    pub fn or_of(a: Self, b: Self) -> Self {
        Expression::Combinator(Combinator::or(a, b))
    }

    pub fn not_of(a: Self) -> Self {
        Expression::Combinator(Combinator::not(a))
    }
}

// Getters
impl Expression {
    /// Name of a leaf; combinators have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Expression::Shape(shape) => shape.name(),
            Expression::Combinator(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Shape(_))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Shape(_) => 1,
            Expression::Combinator(node) => {
                1 + node.operands().iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }
}

// Evaluation
impl Expression {
    /// Degree of `x` under the default [`Norms`] (max-min).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluate_with(Norms::default(), x)
    }

    pub fn evaluate_with(&self, norms: Norms, x: f64) -> f64 {
        match self {
            Expression::Shape(shape) => shape.degree(x),
            Expression::Combinator(node) => {
                debug!(
                    "evaluate({}, n = {}, x = {}, norms = {})",
                    node.connective(),
                    node.operands().len(),
                    x,
                    norms
                );
                let res: Result<f64, Infallible> =
                    node.apply(norms, |child| Ok(child.evaluate_with(norms, x)));
                match res {
                    Ok(degree) => degree,
                    Err(never) => match never {},
                }
            }
        }
    }
}

impl From<Shape> for Expression {
    fn from(shape: Shape) -> Self {
        Expression::Shape(shape)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Shape(shape) => write!(f, "{}", shape),
            Expression::Combinator(node) => write!(f, "{}", node),
        }
    }
}

impl BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expression::and_of(self, rhs)
    }
}

impl BitAnd for &Expression {
    type Output = Expression;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expression::and_of(self.clone(), rhs.clone())
    }
}

impl BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expression::or_of(self, rhs)
    }
}

impl BitOr for &Expression {
    type Output = Expression;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expression::or_of(self.clone(), rhs.clone())
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::not_of(self)
    }
}

impl Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::not_of(self.clone())
    }
}

impl Not for Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        Expression::not_of(self)
    }
}

impl Not for &Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        Expression::not_of(self.clone())
    }
}
