//! Persisted parameter declarations.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterType;

/// Persisted description of one named, typed report parameter.
///
/// Declarations are created or updated during template registration (one
/// upsert per declaration, keyed by report code and parameter name) and are
/// read-mostly afterward. The serialized form uses the canonical machine
/// vocabulary; the localized intake vocabulary is resolved by the intake
/// normalizer before a declaration is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    /// Parameter name, unique within a report. Never empty.
    #[serde(rename = "parameterName")]
    pub name: String,
    /// Taxonomy member this parameter coerces to during pass 1.
    #[serde(rename = "parameterType")]
    pub parameter_type: ParameterType,
    /// Optional default in literal textual form, coerced identically to
    /// caller-supplied values when injected.
    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<String>,
    /// Whether generation fails when no value and no default is available.
    #[serde(rename = "isRequired", default)]
    pub required: bool,
    /// Free-form human description.
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque metadata as compact JSON text. Validated for well-formedness at
    /// registration, never interpreted by the engine.
    #[serde(default)]
    pub metadata: Option<String>,
}

impl ParameterDeclaration {
    /// Creates a minimal declaration with the documented defaults
    /// (`required = false`, no default value, no description, no metadata).
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            default_value: None,
            required: false,
            description: None,
            metadata: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_canonical_field_names() {
        let declaration = ParameterDeclaration {
            name: "dataInicio".to_string(),
            parameter_type: ParameterType::Date,
            default_value: Some("2024-01-01".to_string()),
            required: true,
            description: Some("start of the period".to_string()),
            metadata: None,
        };

        let encoded = serde_json::to_value(&declaration).expect("serialize declaration");
        assert_eq!(encoded["parameterName"], "dataInicio");
        assert_eq!(encoded["parameterType"], "DATE");
        assert_eq!(encoded["defaultValue"], "2024-01-01");
        assert_eq!(encoded["isRequired"], true);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let declaration: ParameterDeclaration =
            serde_json::from_value(serde_json::json!({"parameterName": "x", "parameterType": "INTEGER"}))
                .expect("deserialize minimal declaration");
        assert_eq!(declaration.parameter_type, ParameterType::Integer);
        assert!(!declaration.required);
        assert!(declaration.default_value.is_none());
        assert!(declaration.description.is_none());
        assert!(declaration.metadata.is_none());
    }
}
