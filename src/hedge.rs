//! Linguistic hedges.
//!
//! A hedge raises a degree to a fixed power: exponents above 1 intensify the
//! condition (`very tall`), exponents below 1 dilute it (`somewhat tall`).

use std::fmt::{Display, Formatter};

/// Raise `degree` to the power `p`; a zero exponent yields 0.
pub fn hedge(p: f64, degree: f64) -> f64 {
    if p == 0.0 {
        return 0.0;
    }
    degree.powf(p)
}

pub fn very(degree: f64) -> f64 {
    Hedge::Very.apply(degree)
}

pub fn extremely(degree: f64) -> f64 {
    Hedge::Extremely.apply(degree)
}

pub fn somewhat(degree: f64) -> f64 {
    Hedge::Somewhat.apply(degree)
}

pub fn slightly(degree: f64) -> f64 {
    Hedge::Slightly.apply(degree)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hedge {
    Very,
    Extremely,
    Somewhat,
    Slightly,
}

impl Hedge {
    pub fn exponent(self) -> f64 {
        match self {
            Hedge::Very => 2.0,
            Hedge::Extremely => 3.0,
            Hedge::Somewhat => 0.5,
            Hedge::Slightly => 1.0 / 3.0,
        }
    }

    pub const fn word(self) -> &'static str {
        match self {
            Hedge::Very => "very",
            Hedge::Extremely => "extremely",
            Hedge::Somewhat => "somewhat",
            Hedge::Slightly => "slightly",
        }
    }

    pub fn apply(self, degree: f64) -> f64 {
        hedge(self.exponent(), degree)
    }

    /// Wrap a membership function so that its output is hedged.
    pub fn modify<F>(self, membership: F) -> impl Fn(f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        move |x| self.apply(membership(x))
    }
}

impl Display for Hedge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())
    }
}
