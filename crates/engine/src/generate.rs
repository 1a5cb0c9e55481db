//! The two-pass generation pipeline.
//!
//! Pass 1 honors the business-level declarations (defaults, required-ness,
//! human-entered taxonomy types) before the template is even consulted.
//! Pass 2 re-aligns every value the template's compiled signature names,
//! because that signature is the single source of truth the render step
//! actually enforces. Identifier-widened values are final and skip both
//! passes.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use relato_registry::DefinitionStore;
use relato_types::{CoercedValue, ParameterDeclaration, ParameterType, TemplateSignature};

use crate::coerce::{Coercion, coerce_declared, coerce_native};
use crate::error::{GenerationError, ResolveError};
use crate::resolve::{bind_caller_values, merge_with_declarations};
use crate::template::{ExportFormat, TemplateEngine};

/// One degradation recorded while preparing a parameter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    /// Parameter whose value degraded to its textual rendering.
    pub parameter: String,
    /// What failed.
    pub detail: String,
}

/// A complete, render-ready parameter map.
///
/// Either every parameter resolved and coerced, or the whole request failed
/// before reaching the render call; there is no partial map. Degradations do
/// not fail the request — they are collected here so callers and tests can
/// distinguish a clean preparation from a fail-soft one.
#[derive(Debug, Clone, Default)]
pub struct PreparedParameters {
    /// Final values in resolution order.
    pub values: IndexMap<String, CoercedValue>,
    /// Fail-soft degradations recorded across both passes.
    pub warnings: Vec<CoercionWarning>,
}

/// Successful generation output.
#[derive(Debug)]
pub struct GenerationOutcome<Renderable> {
    /// Whatever the template engine rendered.
    pub renderable: Renderable,
    /// Degradations recorded while preparing the parameter map.
    pub warnings: Vec<CoercionWarning>,
}

/// Resolves and coerces a caller-supplied value bag into a render-ready map.
///
/// Steps: bind raw values (widening identifier-suffixed numerics), merge
/// stored declarations, coerce against declared types, then re-coerce
/// against the template's native signature.
pub fn prepare_parameters(
    declarations: &[ParameterDeclaration],
    signature: &TemplateSignature,
    caller_values: &Map<String, Value>,
) -> Result<PreparedParameters, ResolveError> {
    let mut bound = bind_caller_values(caller_values);
    merge_with_declarations(declarations, &mut bound.values)?;

    let mut warnings = Vec::new();

    // Pass 1: stored declaration types. Later declarations win on duplicate
    // names, which the store layer is expected to prevent anyway.
    let declared_types: HashMap<&str, ParameterType> = declarations
        .iter()
        .map(|declaration| (declaration.name.as_str(), declaration.parameter_type))
        .collect();
    for (name, value) in bound.values.iter_mut() {
        if bound.finalized.contains(name) {
            continue;
        }
        if let Some(target) = declared_types.get(name.as_str()) {
            let coercion = coerce_declared(*target, value);
            apply(name, coercion, value, &mut warnings);
        }
    }

    // Pass 2: the template's native signature.
    for (name, value) in bound.values.iter_mut() {
        if bound.finalized.contains(name) {
            continue;
        }
        if let Some(native_target) = signature.get(name.as_str()) {
            let coercion = coerce_native(native_target, value);
            apply(name, coercion, value, &mut warnings);
        }
    }

    debug!(parameters = bound.values.len(), warnings = warnings.len(), "prepared parameter map");
    Ok(PreparedParameters {
        values: bound.values,
        warnings,
    })
}

fn apply(name: &str, coercion: Coercion, value: &mut CoercedValue, warnings: &mut Vec<CoercionWarning>) {
    *value = coercion.value;
    if let Some(detail) = coercion.degraded {
        warnings.push(CoercionWarning {
            parameter: name.to_string(),
            detail,
        });
    }
}

/// Drives one generation request end to end.
///
/// Fetches the stored declarations, reads the template's native signature,
/// prepares the parameter map, and renders. Collaborator failures propagate
/// opaquely and are never retried here.
pub fn generate<Store, Engine>(
    store: &Store,
    template_engine: &Engine,
    template: &Engine::Template,
    report: &str,
    caller_values: &Map<String, Value>,
    connection: &mut Engine::Connection,
    format: ExportFormat,
) -> Result<GenerationOutcome<Engine::Renderable>, GenerationError>
where
    Store: DefinitionStore,
    Engine: TemplateEngine,
{
    debug!(report, format = %format, "starting report generation");
    let declarations = store.declarations_for(report).map_err(GenerationError::Store)?;
    let signature = template_engine.native_signature(template).map_err(GenerationError::Template)?;

    let prepared = prepare_parameters(&declarations, &signature, caller_values)?;

    let renderable = template_engine
        .render(template, &prepared.values, connection, format)
        .map_err(GenerationError::Template)?;
    debug!(report, "report rendered");

    Ok(GenerationOutcome {
        renderable,
        warnings: prepared.warnings,
    })
}
