//! Registration-time declaration validation.
//!
//! Drafts produced by the intake normalizer pass through here exactly once
//! before they reach the definition store. The checks mirror the registration
//! contract: names must be non-empty, explicit type text must resolve to a
//! taxonomy member, default values must pass their type's lightweight
//! acceptance test, and metadata must be a well-formed JSON document.

use serde_json::Value;

use relato_types::{ParameterDeclaration, ParameterType};

use crate::error::ValidationError;
use crate::intake::ParameterDraft;

/// Validates and finalizes a sequence of drafts into typed declarations.
///
/// The first failing draft aborts the whole registration; there is no
/// partial acceptance of a declaration list.
pub fn finalize_declarations(drafts: Vec<ParameterDraft>) -> Result<Vec<ParameterDeclaration>, ValidationError> {
    drafts.into_iter().map(finalize_draft).collect()
}

fn finalize_draft(draft: ParameterDraft) -> Result<ParameterDeclaration, ValidationError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let parameter_type = match draft.type_text {
        Some(supplied) => ParameterType::parse(&supplied).ok_or(ValidationError::UnknownType {
            name: name.clone(),
            supplied,
        })?,
        None => draft.inferred_type.unwrap_or(ParameterType::String),
    };

    check_default(&name, parameter_type, draft.default_value.as_deref())?;

    let metadata = match draft.metadata {
        Some(raw) => Some(normalize_metadata(&raw).map_err(|error| ValidationError::InvalidMetadata {
            name: name.clone(),
            message: error.to_string(),
        })?),
        None => None,
    };

    Ok(ParameterDeclaration {
        name,
        parameter_type,
        default_value: draft.default_value,
        required: draft.required,
        description: draft.description,
        metadata,
    })
}

/// Re-validates declarations that arrive already typed, e.g. through the
/// single-declaration upsert path.
pub fn validate_declarations(declarations: &[ParameterDeclaration]) -> Result<(), ValidationError> {
    for declaration in declarations {
        if declaration.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        check_default(&declaration.name, declaration.parameter_type, declaration.default_value.as_deref())?;
        if let Some(metadata) = &declaration.metadata {
            normalize_metadata(metadata).map_err(|error| ValidationError::InvalidMetadata {
                name: declaration.name.clone(),
                message: error.to_string(),
            })?;
        }
    }
    Ok(())
}

fn check_default(name: &str, parameter_type: ParameterType, default_value: Option<&str>) -> Result<(), ValidationError> {
    if let Some(default) = default_value
        && !default.trim().is_empty()
        && !parameter_type.accepts_literal(default)
    {
        return Err(ValidationError::InvalidDefault {
            name: name.to_string(),
            value: default.to_string(),
            parameter_type,
        });
    }
    Ok(())
}

/// Parses metadata text as a JSON document and re-renders it compactly.
///
/// The compact form is what gets persisted; the engine never interprets it.
pub fn normalize_metadata(raw: &str) -> Result<String, serde_json::Error> {
    let document: Value = serde_json::from_str(raw.trim())?;
    Ok(document.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::intake::normalize_parameter_intake;

    fn draft(name: &str, type_text: Option<&str>) -> ParameterDraft {
        ParameterDraft {
            name: name.to_string(),
            type_text: type_text.map(str::to_string),
            inferred_type: None,
            default_value: None,
            required: false,
            description: None,
            metadata: None,
        }
    }

    #[test]
    fn empty_names_are_rejected() {
        let error = finalize_declarations(vec![draft("   ", Some("DATE"))]).expect_err("blank name must fail");
        assert!(matches!(error, ValidationError::EmptyName));
    }

    #[test]
    fn unknown_type_text_is_rejected_with_the_declaration_named() {
        let error = finalize_declarations(vec![draft("periodo", Some("UUID"))]).expect_err("unknown type must fail");
        match error {
            ValidationError::UnknownType { name, supplied } => {
                assert_eq!(name, "periodo");
                assert_eq!(supplied, "UUID");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn typeless_drafts_without_an_example_default_to_string() {
        let declarations = finalize_declarations(vec![draft("obs", None)]).expect("finalize typeless draft");
        assert_eq!(declarations[0].parameter_type, ParameterType::String);
    }

    #[test]
    fn default_values_must_pass_the_acceptance_test() {
        let mut bad_default = draft("inicio", Some("DATE"));
        bad_default.default_value = Some("31/12/2024".to_string());
        let error = finalize_declarations(vec![bad_default]).expect_err("display-format default must fail");
        assert!(matches!(error, ValidationError::InvalidDefault { .. }));

        let mut good_default = draft("inicio", Some("DATE"));
        good_default.default_value = Some("2024-12-31".to_string());
        assert!(finalize_declarations(vec![good_default]).is_ok());
    }

    #[test]
    fn metadata_must_be_well_formed_json() {
        let mut bad_metadata = draft("x", Some("STRING"));
        bad_metadata.metadata = Some("{not json".to_string());
        let error = finalize_declarations(vec![bad_metadata]).expect_err("broken metadata must fail");
        match error {
            ValidationError::InvalidMetadata { name, .. } => assert_eq!(name, "x"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn metadata_is_normalized_to_compact_json() {
        let mut spaced_metadata = draft("x", Some("STRING"));
        spaced_metadata.metadata = Some("{ \"mask\" : \"##\" }".to_string());
        let declarations = finalize_declarations(vec![spaced_metadata]).expect("finalize metadata draft");
        assert_eq!(declarations[0].metadata.as_deref(), Some("{\"mask\":\"##\"}"));
    }

    #[test]
    fn intake_and_validation_compose_for_the_name_map_shape() {
        let drafts = normalize_parameter_intake(&json!({"dataInicio": "DATE", "dataFim": "DATE"}))
            .expect("normalize name map");
        let declarations = finalize_declarations(drafts).expect("finalize name map");
        assert_eq!(declarations.len(), 2);
        for declaration in &declarations {
            assert_eq!(declaration.parameter_type, ParameterType::Date);
            assert!(!declaration.required);
        }
    }

    #[test]
    fn validate_declarations_covers_the_pre_typed_path() {
        let mut declaration = ParameterDeclaration::new("x", ParameterType::Integer);
        assert!(validate_declarations(std::slice::from_ref(&declaration)).is_ok());

        declaration.default_value = Some("not-a-number".to_string());
        assert!(matches!(
            validate_declarations(std::slice::from_ref(&declaration)),
            Err(ValidationError::InvalidDefault { .. })
        ));
    }
}
