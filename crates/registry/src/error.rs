//! Registration-side error types.

use thiserror::Error;

use relato_types::ParameterType;

/// Errors emitted while normalizing the parameter intake wire format.
///
/// Every variant aborts the operation that supplied the document, whether a
/// template registration or a generation request carrying inline
/// declarations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The document was not parseable as JSON at all.
    #[error("parameter intake is not valid JSON: {0}")]
    InvalidJson(String),
    /// The document parsed but matched none of the accepted shapes.
    #[error("unrecognized parameter intake shape: expected a list of declarations, a single declaration object, or a name map")]
    UnrecognizedShape,
    /// A single-object declaration did not carry a usable parameter name.
    #[error("single-object parameter intake is missing a parameter name")]
    MissingName,
}

/// Errors emitted while validating declarations at registration time.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A declaration arrived with an empty name.
    #[error("parameter name must not be empty")]
    EmptyName,
    /// The supplied type text does not resolve to a taxonomy member.
    #[error(
        "invalid parameter type '{supplied}' for parameter '{name}' (valid: STRING, INTEGER, LONG, DECIMAL_FLOAT, DECIMAL_EXACT, BOOLEAN, DATE, DATETIME)"
    )]
    UnknownType {
        /// Declaration the bad type belongs to.
        name: String,
        /// Type text as supplied by the caller.
        supplied: String,
    },
    /// The default value failed its type's lightweight acceptance test.
    #[error("invalid default value '{value}' for parameter '{name}' of type {parameter_type}")]
    InvalidDefault {
        /// Declaration the bad default belongs to.
        name: String,
        /// Default literal as supplied.
        value: String,
        /// The declared type whose acceptance test rejected the literal.
        parameter_type: ParameterType,
    },
    /// The declaration metadata was not parseable as a JSON document.
    #[error("metadata for parameter '{name}' is not valid JSON: {message}")]
    InvalidMetadata {
        /// Declaration the bad metadata belongs to.
        name: String,
        /// Parse failure detail.
        message: String,
    },
}

/// Errors emitted by report catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The referenced report has not been registered.
    #[error("report '{0}' is not registered")]
    UnknownReport(String),
    /// Parameter intake failed to normalize.
    #[error(transparent)]
    Intake(#[from] IntakeError),
    /// A declaration failed registration validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
