//! Triangular norms and conorms.
//!
//! A [`Norms`] value selects the pair of reducers used for fuzzy AND (t-norm)
//! and fuzzy OR (t-conorm). Negation is always the standard complement `1 - d`
//! and does not depend on the pair.
//!
//! Trees never capture a pair when they are built: the pair is supplied at
//! evaluation time, so the same tree can be evaluated under different norms.
//!
//! | Pair          | AND                      | OR                       |
//! |---------------|--------------------------|--------------------------|
//! | `MaxMin`      | `min(a, b)`              | `max(a, b)`              |
//! | `ProdSum`     | `a * b`                  | `a + b - a * b`          |
//! | `Hamacher`    | `ab / (a + b - ab)`      | `(a + b - 2ab) / (1 - ab)` |
//! | `Einstein`    | `ab / (2 - (a + b - ab))` | `(a + b) / (1 + ab)`    |
//! | `Lukasiewicz` | `max(0, a + b - 1)`      | `min(1, a + b)`          |
//!
//! Hamacher is completed at its singular points: AND of `(0, 0)` is `0` and
//! OR of `(1, 1)` is `1`.
//!
//! Over more than two operands the binary forms are folded left-to-right.
//!
//! # Examples
//!
//! ```
//! use frules_rs::norm::Norms;
//!
//! let degrees = [0.5, 0.8];
//! let and = Norms::ProdSum.apply_and(&degrees, |&d| Ok::<_, ()>(d)).unwrap();
//! assert_eq!(and, 0.4);
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::error::FuzzyError;

/// A pair of fuzzy AND/OR reducers.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Norms {
    /// Gödel norms: AND = min, OR = max.
    #[default]
    MaxMin,
    /// Product t-norm with the probabilistic sum.
    ProdSum,
    /// Hamacher product and sum.
    Hamacher,
    /// Einstein product and sum.
    Einstein,
    /// Bounded difference and bounded sum.
    Lukasiewicz,
}

impl Norms {
    pub const ALL: [Norms; 5] = [
        Norms::MaxMin,
        Norms::ProdSum,
        Norms::Hamacher,
        Norms::Einstein,
        Norms::Lukasiewicz,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Norms::MaxMin => "max-min",
            Norms::ProdSum => "product-sum",
            Norms::Hamacher => "hamacher",
            Norms::Einstein => "einstein",
            Norms::Lukasiewicz => "lukasiewicz",
        }
    }

    /// Binary t-norm (fuzzy AND) of two degrees.
    pub fn t_norm(self, a: f64, b: f64) -> f64 {
        match self {
            Norms::MaxMin => a.min(b),
            Norms::ProdSum => a * b,
            Norms::Hamacher => {
                let den = a + b - a * b;
                if den == 0.0 {
                    0.0
                } else {
                    (a * b) / den
                }
            }
            Norms::Einstein => (a * b) / (2.0 - (a + b - a * b)),
            Norms::Lukasiewicz => (a + b - 1.0).max(0.0),
        }
    }

    /// Binary t-conorm (fuzzy OR) of two degrees.
    pub fn t_conorm(self, a: f64, b: f64) -> f64 {
        match self {
            Norms::MaxMin => a.max(b),
            Norms::ProdSum => a + b - a * b,
            Norms::Hamacher => {
                let den = 1.0 - a * b;
                if den == 0.0 {
                    1.0
                } else {
                    (a + b - 2.0 * a * b) / den
                }
            }
            Norms::Einstein => (a + b) / (1.0 + a * b),
            Norms::Lukasiewicz => (a + b).min(1.0),
        }
    }

    /// Reduce `children` with the t-norm of this pair.
    ///
    /// Each child is turned into a degree by `degree`, in order. The first error
    /// stops the reduction and is returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn apply_and<T, E, F>(self, children: &[T], degree: F) -> Result<f64, E>
    where
        F: FnMut(&T) -> Result<f64, E>,
    {
        debug!("apply_and(norms = {}, n = {})", self, children.len());
        fold(children, degree, |a, b| self.t_norm(a, b))
    }

    /// Reduce `children` with the t-conorm of this pair.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn apply_or<T, E, F>(self, children: &[T], degree: F) -> Result<f64, E>
    where
        F: FnMut(&T) -> Result<f64, E>,
    {
        debug!("apply_or(norms = {}, n = {})", self, children.len());
        fold(children, degree, |a, b| self.t_conorm(a, b))
    }

    /// Standard complement of the single child: `1 - d`.
    ///
    /// # Panics
    ///
    /// Panics unless `children` holds exactly one element.
    pub fn apply_not<T, E, F>(self, children: &[T], mut degree: F) -> Result<f64, E>
    where
        F: FnMut(&T) -> Result<f64, E>,
    {
        assert_eq!(children.len(), 1, "Negation takes exactly one operand");
        Ok(1.0 - degree(&children[0])?)
    }
}

fn fold<T, E, F, G>(children: &[T], mut degree: F, op: G) -> Result<f64, E>
where
    F: FnMut(&T) -> Result<f64, E>,
    G: Fn(f64, f64) -> f64,
{
    let Some((first, rest)) = children.split_first() else {
        panic!("Norm reduction requires at least one operand");
    };
    let mut acc = degree(first)?;
    for child in rest {
        acc = op(acc, degree(child)?);
    }
    Ok(acc)
}

impl Display for Norms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Norms {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Norms::ALL
            .into_iter()
            .find(|norms| norms.name() == key)
            .ok_or_else(|| FuzzyError::UnknownNorms(s.to_string()))
    }
}
