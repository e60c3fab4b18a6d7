//! Named crisp inputs for rule evaluation.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Anything that can resolve an input name to a crisp value.
pub trait InputSource {
    fn input(&self, name: &str) -> Option<f64>;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn input(&self, name: &str) -> Option<f64> {
        (**self).input(name)
    }
}

impl<K, S> InputSource for HashMap<K, f64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn input(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K> InputSource for BTreeMap<K, f64>
where
    K: Borrow<str> + Ord,
{
    fn input(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K: AsRef<str>> InputSource for [(K, f64)] {
    fn input(&self, name: &str) -> Option<f64> {
        self.iter().find(|(key, _)| key.as_ref() == name).map(|&(_, value)| value)
    }
}

impl<K: AsRef<str>, const N: usize> InputSource for [(K, f64); N] {
    fn input(&self, name: &str) -> Option<f64> {
        self.as_slice().input(name)
    }
}

impl<K: AsRef<str>> InputSource for Vec<(K, f64)> {
    fn input(&self, name: &str) -> Option<f64> {
        self.as_slice().input(name)
    }
}

/// Owned map of input names to crisp values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inputs(HashMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn add(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.add(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InputSource for Inputs {
    fn input(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut inputs = Inputs::new();
        inputs.extend(iter);
        inputs
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Inputs {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}
