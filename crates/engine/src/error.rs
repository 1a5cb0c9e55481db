//! Generation-time error types.

use thiserror::Error;

/// Errors emitted while resolving caller values against stored declarations.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required declaration had neither a caller value nor a default.
    #[error("missing required parameter: {name}")]
    MissingRequiredParameter {
        /// Name of the missing parameter.
        name: String,
    },
}

/// Errors that abort a generation request.
///
/// Coercion failures never appear here; they degrade to textual
/// substitutions and surface as warnings on the prepared result instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Parameter resolution failed before the template was consulted.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The definition store failed; propagated opaquely, never retried.
    #[error("definition store failure: {0}")]
    Store(anyhow::Error),
    /// The template engine failed; propagated opaquely, never retried.
    #[error("template engine failure: {0}")]
    Template(anyhow::Error),
}
