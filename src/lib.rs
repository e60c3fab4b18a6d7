//! # frules-rs: fuzzy logic expressions and rules in Rust
//!
//! **`frules-rs`** is a small algebra for building and evaluating fuzzy-logic
//! membership expressions and rules.
//!
//! ## What is a fuzzy rule?
//!
//! A fuzzy condition does not hold or fail outright: it holds to a *degree* in `[0, 1]`.
//! A *membership function* maps a crisp value (a height, an age) to such a degree,
//! and fuzzy AND/OR/NOT combine degrees through a pair of triangular norms.
//!
//! ## Key Features
//!
//! - **Lazy trees**: `&`, `|`, `-` and `!` on [`Expression`][crate::expression::Expression] and [`Rule`][crate::rule::Rule] build trees; nothing is computed until `evaluate` is called.
//! - **Pluggable norms**: the AND/OR pair ([`Norms`][crate::norm::Norms]) is chosen at evaluation time, so the same tree can be evaluated under max-min, product-sum, Hamacher, Einstein or Łukasiewicz norms.
//! - **Named inputs**: rules bind input names to expressions and are evaluated against any [`InputSource`][crate::inputs::InputSource].
//! - **Explicit errors**: missing inputs and ambiguous rule definitions are reported through [`FuzzyError`][crate::error::FuzzyError].
//!
//! ## Basic Usage
//!
//! ```rust
//! use frules_rs::expression::Expression;
//! use frules_rs::norm::Norms;
//! use frules_rs::rule::Rule;
//! use frules_rs::shape::rtrapezoid;
//!
//! // 1. Define membership functions
//! let tall = Expression::named(rtrapezoid(170.0, 190.0), "tall");
//! let old = Expression::named(rtrapezoid(60.0, 80.0), "old");
//!
//! // 2. Bind them to inputs and combine
//! let rule = Rule::binding("height", tall) | -Rule::binding("age", old);
//! assert_eq!(rule.to_string(), "(height = tall | !age = old)");
//!
//! // 3. Evaluate
//! let inputs = [("height", 180.0), ("age", 70.0)];
//! assert_eq!(rule.evaluate(&inputs)?, 0.5);
//! assert_eq!(rule.evaluate_with(Norms::ProdSum, &inputs)?, 0.75);
//! # Ok::<(), frules_rs::error::FuzzyError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`norm`]**: t-norm/t-conorm pairs and the AND/OR/NOT reducers.
//! - **[`expression`]**: expression trees over a single crisp value.
//! - **[`rule`]**: rule trees over named inputs.
//! - **[`shape`]** and **[`hedge`]**: membership function shapes and linguistic hedges.

pub mod connective;
pub mod error;
pub mod expression;
pub mod hedge;
pub mod inputs;
pub mod norm;
pub mod rule;
pub mod shape;
