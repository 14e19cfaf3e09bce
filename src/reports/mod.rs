/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
///
/// A local search is incomplete: a satisfying valuation witnesses satisfiability, while an exhausted budget witnesses nothing.
/// So, unlike a complete solver, no report of unsatisfiability is ever made.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A satisfying valuation was found, and is held by the context.
    Satisfiable,

    /// The try and flip budgets were exhausted without a satisfying valuation being found.
    Exhausted,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Exhausted => Self::Exhausted,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
