//! Template-native parameter signature types.
//!
//! The compiled report template carries its own typed parameter signature,
//! which is the single source of truth the render step enforces. The template
//! engine adapter maps whatever native value classes its format exposes onto
//! this small explicit set; anything it cannot map arrives as
//! [`NativeType::Other`] and falls back to textual rendering during pass 2.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parameter::ParameterType;

/// Target type demanded by the compiled template for one named parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    /// Machine-word integer.
    Integer,
    /// Wide integer.
    Long,
    /// Floating-point decimal.
    Float,
    /// Exact decimal.
    ExactDecimal,
    /// True or false.
    Boolean,
    /// Date without a time component.
    Date,
    /// Date with a time-of-day component.
    DateTime,
    /// Free text.
    Text,
    /// Any collection type; scalar values wrap into a one-element sequence.
    Collection,
    /// A native class the adapter could not map; coerces to text.
    Other(String),
}

impl NativeType {
    /// The taxonomy member whose coercion rule applies to this native target.
    ///
    /// Returns `None` for [`NativeType::Collection`] (handled structurally,
    /// not by a scalar rule) and [`NativeType::Other`] (textual fallback).
    pub fn taxonomy_equivalent(&self) -> Option<ParameterType> {
        match self {
            NativeType::Integer => Some(ParameterType::Integer),
            NativeType::Long => Some(ParameterType::Long),
            NativeType::Float => Some(ParameterType::DecimalFloat),
            NativeType::ExactDecimal => Some(ParameterType::DecimalExact),
            NativeType::Boolean => Some(ParameterType::Boolean),
            NativeType::Date => Some(ParameterType::Date),
            NativeType::DateTime => Some(ParameterType::DateTime),
            NativeType::Text => Some(ParameterType::String),
            NativeType::Collection | NativeType::Other(_) => None,
        }
    }
}

/// Read-only name to native-type mapping intrinsic to a compiled template.
///
/// Produced by the template engine adapter; the reconciliation core never
/// mutates it. Insertion order follows the template's own declaration order.
pub type TemplateSignature = IndexMap<String, NativeType>;
