//! Fuzzy rules over named inputs.
//!
//! A [`Rule`] binds input names to [`Expression`]s and combines the bindings
//! with AND, OR and NOT. As with expressions, combining rules only builds a
//! tree; degrees are computed by [`Rule::evaluate`] from a set of named crisp
//! inputs (anything implementing [`InputSource`]).
//!
//! Rules can be defined in two ways:
//!
//! - [`Rule::binding`]: a single explicit `(input, expression)` binding;
//! - [`Rule::from_bindings`]: several named bindings, each turned into its own
//!   leaf and folded left-to-right with AND.
//!
//! [`RuleDefinition`] accepts both styles at runtime and rejects a definition
//! that mixes them.
//!
//! # Examples
//!
//! ```
//! use frules_rs::expression::Expression;
//! use frules_rs::rule::Rule;
//! use frules_rs::shape::rtrapezoid;
//!
//! let tall = Expression::named(rtrapezoid(170.0, 190.0), "tall");
//! let old = Expression::named(rtrapezoid(60.0, 80.0), "old");
//!
//! let rule = Rule::from_bindings([("height", tall), ("age", old)])?;
//! assert_eq!(rule.to_string(), "(height = tall & age = old)");
//! assert_eq!(rule.evaluate(&[("height", 180.0), ("age", 70.0)])?, 0.5);
//! # Ok::<(), frules_rs::error::FuzzyError>(())
//! ```

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Neg, Not};

use log::debug;

use crate::connective::Combinator;
use crate::error::{FuzzyError, Result};
use crate::expression::Expression;
use crate::inputs::InputSource;
use crate::norm::Norms;

/// Leaf of a rule tree: an input name bound to an expression.
#[derive(Debug, Clone)]
pub struct Binding {
    input: String,
    expression: Expression,
}

impl Binding {
    pub fn new(input: impl Into<String>, expression: Expression) -> Self {
        Binding {
            input: input.into(),
            expression,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.input, self.expression)
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    Binding(Binding),
    Combinator(Combinator<Rule>),
}

// Constructors
impl Rule {
    pub fn binding(input: impl Into<String>, expression: Expression) -> Self {
        Rule::Binding(Binding::new(input, expression))
    }

    /// Conjunction of one leaf per binding, folded left-to-right.
    ///
    /// Returns [`FuzzyError::NoBindings`] if `bindings` is empty.
    pub fn from_bindings<I, K>(bindings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Expression)>,
        K: Into<String>,
    {
        let rule = bindings
            .into_iter()
            .map(|(input, expression)| Rule::binding(input, expression))
            .reduce(Rule::and_of)
            .ok_or(FuzzyError::NoBindings)?;
        debug!("from_bindings: {}", rule);
        Ok(rule)
    }

    pub fn define() -> RuleDefinition {
        RuleDefinition::new()
    }

    pub fn and_of(a: Self, b: Self) -> Self {
        Rule::Combinator(Combinator::and(a, b))
    }

    pub fn or_of(a: Self, b: Self) -> Self {
        Rule::Combinator(Combinator::or(a, b))
    }

    pub fn not_of(a: Self) -> Self {
        Rule::Combinator(Combinator::not(a))
    }
}

// Getters
impl Rule {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Rule::Binding(_))
    }

    /// Distinct input names referenced by the rule, in order of first occurrence.
    pub fn inputs(&self) -> Vec<&str> {
        fn collect<'r>(rule: &'r Rule, out: &mut Vec<&'r str>) {
            match rule {
                Rule::Binding(binding) => {
                    if !out.contains(&binding.input()) {
                        out.push(binding.input());
                    }
                }
                Rule::Combinator(node) => {
                    for child in node.operands() {
                        collect(child, out);
                    }
                }
            }
        }

        let mut inputs = Vec::new();
        collect(self, &mut inputs);
        inputs
    }

    /// Number of rule nodes on the longest root-to-leaf path.
    ///
    /// Expressions inside the bindings are not counted.
    pub fn depth(&self) -> usize {
        match self {
            Rule::Binding(_) => 1,
            Rule::Combinator(node) => {
                1 + node.operands().iter().map(Rule::depth).max().unwrap_or(0)
            }
        }
    }
}

// Evaluation
impl Rule {
    /// Degree of the rule under the default [`Norms`] (max-min).
    pub fn evaluate<I>(&self, inputs: &I) -> Result<f64>
    where
        I: InputSource + ?Sized,
    {
        self.evaluate_with(Norms::default(), inputs)
    }

    /// Degree of the rule under `norms`.
    ///
    /// Fails with [`FuzzyError::MissingInput`] naming the first bound input
    /// (in evaluation order) that `inputs` does not provide.
    pub fn evaluate_with<I>(&self, norms: Norms, inputs: &I) -> Result<f64>
    where
        I: InputSource + ?Sized,
    {
        match self {
            Rule::Binding(binding) => {
                let Some(x) = inputs.input(binding.input()) else {
                    debug!("evaluate: missing input '{}'", binding.input());
                    return Err(FuzzyError::missing_input(binding.input()));
                };
                let degree = binding.expression().evaluate_with(norms, x);
                debug!("evaluate({} = {}) = {}", binding.input(), x, degree);
                Ok(degree)
            }
            Rule::Combinator(node) => node.apply(norms, |child| child.evaluate_with(norms, inputs)),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Binding(binding) => write!(f, "{}", binding),
            Rule::Combinator(node) => write!(f, "{}", node),
        }
    }
}

impl BitAnd for Rule {
    type Output = Rule;

    fn bitand(self, rhs: Self) -> Self::Output {
        Rule::and_of(self, rhs)
    }
}

impl BitAnd for &Rule {
    type Output = Rule;

    fn bitand(self, rhs: Self) -> Self::Output {
        Rule::and_of(self.clone(), rhs.clone())
    }
}

impl BitOr for Rule {
    type Output = Rule;

    fn bitor(self, rhs: Self) -> Self::Output {
        Rule::or_of(self, rhs)
    }
}

impl BitOr for &Rule {
    type Output = Rule;

    fn bitor(self, rhs: Self) -> Self::Output {
        Rule::or_of(self.clone(), rhs.clone())
    }
}

impl Neg for Rule {
    type Output = Rule;

    fn neg(self) -> Self::Output {
        Rule::not_of(self)
    }
}

impl Neg for &Rule {
    type Output = Rule;

    fn neg(self) -> Self::Output {
        Rule::not_of(self.clone())
    }
}

impl Not for Rule {
    type Output = Rule;

    fn not(self) -> Self::Output {
        Rule::not_of(self)
    }
}

impl Not for &Rule {
    type Output = Rule;

    fn not(self) -> Self::Output {
        Rule::not_of(self.clone())
    }
}

/// Runtime rule definition accepting either an explicit binding or named bindings.
///
/// ```
/// use frules_rs::error::FuzzyError;
/// use frules_rs::expression::Expression;
/// use frules_rs::rule::Rule;
/// use frules_rs::shape::rtrapezoid;
///
/// let tall = Expression::named(rtrapezoid(170.0, 190.0), "tall");
/// let old = Expression::named(rtrapezoid(60.0, 80.0), "old");
///
/// let res = Rule::define().bind("height", tall).with("age", old).build();
/// assert_eq!(res.unwrap_err(), FuzzyError::AmbiguousDefinition);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RuleDefinition {
    explicit: Vec<Binding>,
    named: Vec<Binding>,
}

impl RuleDefinition {
    pub fn new() -> Self {
        RuleDefinition::default()
    }

    /// Explicit binding. At most one may be given.
    pub fn bind(mut self, input: impl Into<String>, expression: Expression) -> Self {
        self.explicit.push(Binding::new(input, expression));
        self
    }

    /// Named binding. A repeated name replaces the earlier binding in place.
    pub fn with(mut self, input: impl Into<String>, expression: Expression) -> Self {
        let binding = Binding::new(input, expression);
        match self.named.iter_mut().find(|b| b.input == binding.input) {
            Some(existing) => *existing = binding,
            None => self.named.push(binding),
        }
        self
    }

    pub fn build(self) -> Result<Rule> {
        let RuleDefinition { mut explicit, named } = self;
        if explicit.len() > 1 || (!explicit.is_empty() && !named.is_empty()) {
            debug!(
                "build: ambiguous definition ({} explicit, {} named)",
                explicit.len(),
                named.len()
            );
            return Err(FuzzyError::AmbiguousDefinition);
        }
        match explicit.pop() {
            Some(binding) => Ok(Rule::Binding(binding)),
            None => Rule::from_bindings(named.into_iter().map(|b| (b.input, b.expression))),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::inputs::Inputs;
    use crate::shape::rtrapezoid;

    // mu(170) == 0, mu(180) == 0.5, mu(190) == 1
    fn tall() -> Expression {
        Expression::named(rtrapezoid(170.0, 190.0), "tall")
    }

    // mu(60) == 0, mu(70) == 0.5, mu(80) == 1
    fn old() -> Expression {
        Expression::named(rtrapezoid(60.0, 80.0), "old")
    }

    fn at(height: f64, age: f64) -> Inputs {
        Inputs::new().with("height", height).with("age", age)
    }

    #[test]
    fn test_rule_eval() {
        let rule = Rule::binding("height", tall());
        assert!(rule.is_leaf());
        assert_eq!(rule.evaluate(&[("height", 100.0)]).unwrap(), 0.0);
        assert_eq!(rule.evaluate(&[("height", 170.0)]).unwrap(), 0.0);
        assert_eq!(rule.evaluate(&[("height", 180.0)]).unwrap(), 0.5);
        assert_eq!(rule.evaluate(&[("height", 190.0)]).unwrap(), 1.0);
    }

    #[test]
    fn test_rule_and() {
        let implicit = Rule::from_bindings([("height", tall()), ("age", old())]).unwrap();
        let explicit = Rule::binding("height", tall()) & Rule::binding("age", old());

        for (height, age, expected) in [
            (170.0, 60.0, 0.0),
            (170.0, 70.0, 0.0),
            (180.0, 70.0, 0.5),
            (190.0, 70.0, 0.5),
            (190.0, 80.0, 1.0),
        ] {
            let inputs = at(height, age);
            assert_eq!(explicit.evaluate(&inputs).unwrap(), expected);
            assert_eq!(implicit.evaluate(&inputs).unwrap(), expected);
        }
    }

    #[test]
    fn test_rule_or_de_morgan() {
        let implicit = -Rule::from_bindings([("height", -tall()), ("age", -old())]).unwrap();
        let explicit = Rule::binding("height", tall()) | Rule::binding("age", old());

        for (height, age, expected) in [
            (170.0, 60.0, 0.0),
            (170.0, 70.0, 0.5),
            (180.0, 70.0, 0.5),
            (190.0, 70.0, 1.0),
            (190.0, 80.0, 1.0),
        ] {
            let inputs = at(height, age);
            assert_eq!(explicit.evaluate(&inputs).unwrap(), expected);
            assert_eq!(implicit.evaluate(&inputs).unwrap(), expected);
        }
    }

    #[test]
    fn test_rule_neg() {
        let rule = -Rule::binding("height", tall());
        assert_eq!(rule.evaluate(&[("height", 150.0)]).unwrap(), 1.0);
        assert_eq!(rule.evaluate(&[("height", 170.0)]).unwrap(), 1.0);
        assert_eq!(rule.evaluate(&[("height", 180.0)]).unwrap(), 0.5);
        assert_eq!(rule.evaluate(&[("height", 190.0)]).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_input() {
        let rule = Rule::binding("height", tall());
        assert_eq!(
            rule.evaluate(&[("age", 13.0)]),
            Err(FuzzyError::missing_input("height"))
        );
        assert_eq!(
            rule.evaluate(&Inputs::new()),
            Err(FuzzyError::missing_input("height"))
        );
    }

    #[test]
    fn test_missing_input_nested() {
        let inner = Rule::binding("age", old()) & Rule::binding("weight", tall());
        let rule = (Rule::binding("height", tall()) | -inner) & Rule::binding("height", -tall());
        let res = rule.evaluate(&at(180.0, 70.0));
        assert_eq!(res, Err(FuzzyError::missing_input("weight")));
    }

    #[test]
    fn test_no_bindings() {
        let none: [(&str, Expression); 0] = [];
        assert_eq!(Rule::from_bindings(none).unwrap_err(), FuzzyError::NoBindings);
        assert_eq!(Rule::define().build().unwrap_err(), FuzzyError::NoBindings);
    }

    #[test]
    fn test_definition_explicit() {
        let rule = Rule::define().bind("height", tall()).build().unwrap();
        assert_eq!(rule.to_string(), "height = tall");
        assert_eq!(rule.evaluate(&[("height", 180.0)]).unwrap(), 0.5);
    }

    #[test]
    fn test_definition_named() {
        let rule = Rule::define()
            .with("height", tall())
            .with("age", tall())
            .with("age", old())
            .build()
            .unwrap();
        assert_eq!(rule.to_string(), "(height = tall & age = old)");
        assert_eq!(rule.evaluate(&at(180.0, 70.0)).unwrap(), 0.5);
    }

    #[test]
    fn test_definition_ambiguous() {
        let res = Rule::define().bind("height", tall()).with("age", old()).build();
        assert_eq!(res.unwrap_err(), FuzzyError::AmbiguousDefinition);

        let res = Rule::define().with("age", old()).bind("height", tall()).build();
        assert_eq!(res.unwrap_err(), FuzzyError::AmbiguousDefinition);

        let res = Rule::define().bind("height", tall()).bind("age", old()).build();
        assert_eq!(res.unwrap_err(), FuzzyError::AmbiguousDefinition);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::binding("height", tall()).to_string(), "height = tall");
        assert_eq!(
            Rule::binding("height", -tall()).to_string(),
            "height = !tall"
        );
        assert_eq!(
            (-Rule::binding("height", tall())).to_string(),
            "!height = tall"
        );
        assert_eq!(
            (Rule::binding("height", tall()) | Rule::binding("age", old())).to_string(),
            "(height = tall | age = old)"
        );
        let rule = Rule::from_bindings([("a", tall()), ("b", old()), ("c", tall())]).unwrap();
        assert_eq!(rule.to_string(), "((a = tall & b = old) & c = tall)");
    }

    #[test]
    fn test_norms_selected_at_evaluation() {
        let rule = Rule::from_bindings([("height", tall()), ("age", old())]).unwrap();
        let inputs = at(180.0, 70.0);
        assert_eq!(rule.evaluate(&inputs).unwrap(), 0.5);
        assert_eq!(rule.evaluate_with(Norms::ProdSum, &inputs).unwrap(), 0.25);
        assert_eq!(rule.evaluate_with(Norms::MaxMin, &inputs).unwrap(), 0.5);
    }

    #[test]
    fn test_inputs_and_depth() {
        let both = Rule::binding("height", tall()) & Rule::binding("age", old());
        let rule = both | -Rule::binding("height", tall());
        assert_eq!(rule.inputs(), vec!["height", "age"]);
        assert_eq!(rule.depth(), 3);
        assert_eq!(Rule::binding("age", old()).depth(), 1);
    }

    #[test]
    fn test_ref_operators() {
        let a = Rule::binding("height", tall());
        let b = Rule::binding("age", old());
        let rule = &a & &b;
        let negated = !&a;
        assert_eq!(rule.to_string(), "(height = tall & age = old)");
        assert_eq!(negated.to_string(), "!height = tall");
        assert_eq!((&a | &b).evaluate(&at(170.0, 70.0)).unwrap(), 0.5);
        assert_eq!((-&b).evaluate(&at(170.0, 70.0)).unwrap(), 0.5);
    }
}
