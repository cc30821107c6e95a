//! Error types for the evolution engine.

/// Errors produced by the engine and its strategies.
///
/// All failures are synchronous and fail fast: no operation retries, and no
/// input is mutated before an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvolutionError {
    /// A caller-supplied value violates a structural contract, e.g. a genome
    /// whose length differs from the number of scoring items, mismatched
    /// parent lengths in crossover, or an empty population in selection.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The [`EvolutionConfig`](crate::EvolutionConfig) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvolutionError>;
