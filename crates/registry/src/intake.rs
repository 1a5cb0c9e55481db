//! Flexible parameter intake normalization.
//!
//! Client applications describe report parameters in three wire shapes: a
//! list of declaration objects, a single declaration object, or a flat
//! name map. Declaration objects accept two parallel vocabularies for the
//! same concepts — the machine vocabulary (`parameterName`, `parameterType`,
//! `defaultValue`, `isRequired`, `description`) and the localized one
//! (`nome`, `tipo`, `valorPadrao`, `obrigatorio`, `descricao`) — with the
//! machine vocabulary winning when both are present.
//!
//! Normalization produces [`ParameterDraft`]s: the supplied type text is kept
//! verbatim so registration validation can reject unknown taxonomy names
//! with a precise error, while entries without an explicit type carry the
//! type inferred from their example value.

use serde_json::{Map, Value};

use relato_types::ParameterType;
use relato_util::plain_text;

use crate::error::IntakeError;
use crate::infer::infer_parameter_type;

const NAME_KEYS: [&str; 2] = ["parameterName", "nome"];
const TYPE_KEYS: [&str; 2] = ["parameterType", "tipo"];
const DEFAULT_KEYS: [&str; 2] = ["defaultValue", "valorPadrao"];
const REQUIRED_KEYS: [&str; 2] = ["isRequired", "obrigatorio"];
const DESCRIPTION_KEYS: [&str; 2] = ["description", "descricao"];
const METADATA_KEY: &str = "metadata";

/// One declaration as normalized from the intake wire format, before
/// registration validation resolves its final type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDraft {
    /// Parameter name after vocabulary resolution.
    pub name: String,
    /// Explicit type text exactly as supplied, when the caller supplied one.
    pub type_text: Option<String>,
    /// Type inferred from the example value when no explicit type was given.
    pub inferred_type: Option<ParameterType>,
    /// Default value in literal textual form.
    pub default_value: Option<String>,
    /// Required flag; defaults to false.
    pub required: bool,
    /// Free-form description.
    pub description: Option<String>,
    /// Metadata as JSON text, well-formedness checked during validation.
    pub metadata: Option<String>,
}

/// The three accepted intake shapes, in disambiguation priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeShape<'document> {
    /// A JSON array; each element is one declaration object.
    List(&'document [Value]),
    /// A JSON object that itself names a parameter.
    Single(&'document Map<String, Value>),
    /// A JSON object whose fields are `name -> type-or-declaration` pairs.
    NameMap(&'document Map<String, Value>),
}

/// Classifies an intake document into one of the accepted shapes.
///
/// A JSON array is always a list. An object carrying a parameter-name key in
/// either vocabulary is a single declaration; any other object is a name
/// map. Scalar roots match nothing and fail.
pub fn classify_intake(document: &Value) -> Result<IntakeShape<'_>, IntakeError> {
    match document {
        Value::Array(elements) => Ok(IntakeShape::List(elements)),
        Value::Object(node) => {
            if first_value(node, &NAME_KEYS).is_some() {
                Ok(IntakeShape::Single(node))
            } else {
                Ok(IntakeShape::NameMap(node))
            }
        }
        _ => Err(IntakeError::UnrecognizedShape),
    }
}

/// Normalizes an intake document into an ordered sequence of drafts.
///
/// List elements without a usable name are dropped silently; a single-object
/// document without one is an error. Name-map entries always have a name
/// (the field key) unless a nested declaration overrides it with an empty
/// one, in which case the entry is dropped like a nameless list element.
pub fn normalize_parameter_intake(document: &Value) -> Result<Vec<ParameterDraft>, IntakeError> {
    match classify_intake(document)? {
        IntakeShape::List(elements) => Ok(elements
            .iter()
            .filter_map(|element| element.as_object().and_then(draft_from_node))
            .collect()),
        IntakeShape::Single(node) => match draft_from_node(node) {
            Some(draft) => Ok(vec![draft]),
            None => Err(IntakeError::MissingName),
        },
        IntakeShape::NameMap(node) => Ok(node
            .iter()
            .filter_map(|(field_key, field_value)| draft_from_map_entry(field_key, field_value))
            .collect()),
    }
}

/// Normalizes an intake document supplied as raw text.
///
/// Empty or blank text means "no declared parameters" and yields an empty
/// sequence rather than an error.
pub fn normalize_parameter_intake_text(document: &str) -> Result<Vec<ParameterDraft>, IntakeError> {
    if document.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Value = serde_json::from_str(document).map_err(|error| IntakeError::InvalidJson(error.to_string()))?;
    normalize_parameter_intake(&parsed)
}

/// Builds a draft from a declaration object in either vocabulary.
///
/// Returns `None` when no usable name is present. An explicit type wins; an
/// absent or blank type falls back to inference over the default value, with
/// a missing default inferring STRING.
fn draft_from_node(node: &Map<String, Value>) -> Option<ParameterDraft> {
    let name = first_text(node, &NAME_KEYS).filter(|name| !name.trim().is_empty())?;

    let type_text = first_text(node, &TYPE_KEYS).filter(|text| !text.trim().is_empty());
    let default_node = first_value(node, &DEFAULT_KEYS);
    let inferred_type = match type_text {
        Some(_) => None,
        None => Some(infer_parameter_type(default_node.unwrap_or(&Value::Null))),
    };
    let default_value = default_node.map(plain_text);

    Some(ParameterDraft {
        name,
        type_text,
        inferred_type,
        default_value,
        required: first_bool(node, &REQUIRED_KEYS).unwrap_or(false),
        description: first_text(node, &DESCRIPTION_KEYS),
        metadata: metadata_text(node),
    })
}

/// Builds a draft from one `name -> type-or-declaration` field of a name map.
fn draft_from_map_entry(field_key: &str, field_value: &Value) -> Option<ParameterDraft> {
    match field_value {
        Value::Object(nested) => {
            // Nested declaration; the field key is the fallback name.
            let mut nested_node = nested.clone();
            if first_value(&nested_node, &NAME_KEYS).is_none() {
                nested_node.insert("parameterName".to_string(), Value::String(field_key.to_string()));
            }
            draft_from_node(&nested_node)
        }
        Value::String(text) if ParameterType::parse(text).is_some() => Some(ParameterDraft {
            name: field_key.to_string(),
            type_text: Some(text.clone()),
            inferred_type: None,
            default_value: None,
            required: false,
            description: None,
            metadata: None,
        }),
        scalar => Some(ParameterDraft {
            name: field_key.to_string(),
            type_text: None,
            inferred_type: Some(infer_parameter_type(scalar)),
            default_value: (!scalar.is_null()).then(|| plain_text(scalar)),
            required: false,
            description: None,
            metadata: None,
        }),
    }
}

/// First non-null value for a concept, machine vocabulary first.
fn first_value<'node>(node: &'node Map<String, Value>, keys: &[&str]) -> Option<&'node Value> {
    keys.iter().find_map(|key| node.get(*key).filter(|value| !value.is_null()))
}

fn first_text(node: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_value(node, keys).map(plain_text)
}

fn first_bool(node: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    match first_value(node, keys)? {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn metadata_text(node: &Map<String, Value>) -> Option<String> {
    node.get(METADATA_KEY).filter(|value| !value.is_null()).map(plain_text)
}
