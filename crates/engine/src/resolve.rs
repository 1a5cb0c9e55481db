//! Caller value binding and declaration resolution.
//!
//! This module covers the steps that run before any type-directed coercion:
//! binding the raw JSON bag into the semantic value model, the identifier
//! widening heuristic, and the merge against stored declarations that
//! injects defaults and enforces required-ness.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use relato_types::{CoercedValue, ParameterDeclaration};

use crate::error::ResolveError;

/// Conventional suffix marking foreign-key parameters.
pub const IDENTIFIER_SUFFIX: &str = "_ID";

/// Caller values bound into the semantic model, plus the names whose values
/// are already final and exempt from both coercion passes.
#[derive(Debug, Clone, Default)]
pub struct BoundParameters {
    /// Values in caller insertion order.
    pub values: IndexMap<String, CoercedValue>,
    /// Names widened by the identifier heuristic; final as-is.
    pub finalized: HashSet<String>,
}

/// Binds the raw caller map and applies the identifier widening heuristic.
///
/// Any name ending in [`IDENTIFIER_SUFFIX`] whose raw value is already
/// numeric widens to the widest integral representation immediately,
/// reflecting the common case of foreign-key parameters whose declarations
/// are coarser than what the template expects. Widened values are recorded
/// as final and skipped by both coercion passes.
pub fn bind_caller_values(raw: &Map<String, Value>) -> BoundParameters {
    let mut bound = BoundParameters::default();
    for (name, raw_value) in raw {
        let mut value = CoercedValue::from_raw(raw_value);
        if name.ends_with(IDENTIFIER_SUFFIX)
            && let Some(widened) = value.as_widened_long()
        {
            debug!(parameter = %name, value = widened, "widened identifier parameter");
            value = CoercedValue::Long(widened);
            bound.finalized.insert(name.clone());
        }
        bound.values.insert(name.clone(), value);
    }
    bound
}

/// Merges stored declarations into the bound caller values.
///
/// For each declaration: a caller-supplied value is kept; otherwise a stored
/// default is injected as raw text, to be coerced identically to
/// caller-supplied values; otherwise a required declaration fails the whole
/// request; otherwise the name simply stays absent. Caller names without a
/// matching declaration pass through untouched — they are aligned later
/// against the template's native signature only.
pub fn merge_with_declarations(
    declarations: &[ParameterDeclaration],
    values: &mut IndexMap<String, CoercedValue>,
) -> Result<(), ResolveError> {
    for declaration in declarations {
        if values.contains_key(&declaration.name) {
            continue;
        }
        match declaration.default_value.as_deref().filter(|default| !default.is_empty()) {
            Some(default) => {
                debug!(parameter = %declaration.name, "injecting stored default");
                values.insert(declaration.name.clone(), CoercedValue::Text(default.to_string()));
            }
            None if declaration.required => {
                return Err(ResolveError::MissingRequiredParameter {
                    name: declaration.name.clone(),
                });
            }
            None => {}
        }
    }
    Ok(())
}
