use thiserror::Error;

/// Errors produced by the damage calculator.
///
/// Zero-power moves, status moves, and full type immunity are not errors. They produce a
/// well-defined all-zero outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The move name is absent from the reference data.
    #[error("move {0} does not exist")]
    UnknownMove(String),
    /// The species name is absent from the reference data.
    #[error("species {0} does not exist")]
    UnknownSpecies(String),
    /// An input value is out of its declared bounds.
    #[error("invalid input: {0}")]
    Validation(String),
}
