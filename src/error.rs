use thiserror::Error;

/// Errors raised while defining or evaluating fuzzy rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyError {
    /// A rule definition mixed an explicit binding with named bindings.
    #[error("can't define rule with both an explicit binding and named bindings")]
    AmbiguousDefinition,

    /// A rule definition carried no binding at all.
    #[error("rule definition has no bindings")]
    NoBindings,

    /// A rule leaf is bound to an input that was not supplied.
    #[error("input key missing: '{name}'")]
    MissingInput { name: String },

    /// Norm pair name not recognized.
    #[error("unknown norm pair: '{0}'")]
    UnknownNorms(String),
}

impl FuzzyError {
    pub fn missing_input(name: impl Into<String>) -> Self {
        FuzzyError::MissingInput { name: name.into() }
    }
}

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;
