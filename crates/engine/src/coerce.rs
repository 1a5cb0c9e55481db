//! Type coercion with fail-soft degradation.
//!
//! Coercion converts a bound value into the semantic type demanded first by
//! the stored declaration (pass 1) and then by the compiled template's native
//! signature (pass 2). Collections coerce element-wise; a failing element
//! fails the whole collection. Failures never abort a generation request:
//! the value degrades to its plain textual rendering and the degradation is
//! reported on the returned [`Coercion`] so callers can observe it.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::NaiveTime;
use thiserror::Error;
use tracing::warn;

use relato_types::{CoercedValue, NativeType, ParameterType};
use relato_util::{parse_iso_date, parse_iso_datetime};

/// Internal coercion failure. Never surfaced to callers on its own; it is
/// always downgraded to a textual substitution carried by [`Coercion`].
#[derive(Debug, Error)]
#[error("cannot coerce '{rendered}' to {target}")]
pub struct CoercionError {
    /// Target type the value failed to reach.
    target: String,
    /// Textual rendering of the offending value.
    rendered: String,
}

impl CoercionError {
    fn new(target: impl ToString, value: &CoercedValue) -> Self {
        Self {
            target: target.to_string(),
            rendered: value.render_text(),
        }
    }
}

/// Result of one coercion: the value to use, plus the degradation message
/// when the conversion failed and the textual fallback was substituted.
#[derive(Debug, Clone)]
pub struct Coercion {
    /// Coerced value, or the textual substitution when degraded.
    pub value: CoercedValue,
    /// Why the conversion fell back to text, when it did.
    pub degraded: Option<String>,
}

impl Coercion {
    fn clean(value: CoercedValue) -> Self {
        Self { value, degraded: None }
    }

    fn degraded(original: &CoercedValue, error: CoercionError) -> Self {
        let message = error.to_string();
        warn!(detail = %message, "coercion degraded to textual rendering");
        Self {
            value: CoercedValue::Text(original.render_text()),
            degraded: Some(message),
        }
    }
}

/// Coerces a value against a declared taxonomy type, fail-soft.
pub fn coerce_declared(target: ParameterType, value: &CoercedValue) -> Coercion {
    match coerce_value(target, value) {
        Ok(coerced) => Coercion::clean(coerced),
        Err(error) => Coercion::degraded(value, error),
    }
}

/// Coerces a value against a template-native target type, fail-soft.
///
/// Scalar targets reuse the taxonomy rules through their equivalent member.
/// Collection targets wrap bare scalars into a one-element sequence. Targets
/// the adapter could not map degrade to the textual rendering immediately.
pub fn coerce_native(target: &NativeType, value: &CoercedValue) -> Coercion {
    if matches!(value, CoercedValue::Null) {
        return Coercion::clean(CoercedValue::Null);
    }
    match target {
        NativeType::Collection => match value {
            CoercedValue::Collection(_) => Coercion::clean(value.clone()),
            scalar => Coercion::clean(CoercedValue::Collection(vec![scalar.clone()])),
        },
        NativeType::Other(native_name) => Coercion::degraded(
            value,
            CoercionError::new(format!("unmapped native type '{native_name}'"), value),
        ),
        scalar_target => match scalar_target.taxonomy_equivalent() {
            Some(parameter_type) => coerce_declared(parameter_type, value),
            None => Coercion::degraded(value, CoercionError::new(format!("{scalar_target:?}"), value)),
        },
    }
}

/// Full coercion rule: collections coerce element-wise, everything else goes
/// through the scalar rule.
fn coerce_value(target: ParameterType, value: &CoercedValue) -> Result<CoercedValue, CoercionError> {
    match value {
        CoercedValue::Collection(elements) => {
            let coerced: Result<Vec<CoercedValue>, CoercionError> =
                elements.iter().map(|element| coerce_scalar(target, element)).collect();
            Ok(CoercedValue::Collection(coerced?))
        }
        scalar => coerce_scalar(target, scalar),
    }
}

fn coerce_scalar(target: ParameterType, value: &CoercedValue) -> Result<CoercedValue, CoercionError> {
    if matches!(value, CoercedValue::Null) {
        return Ok(CoercedValue::Null);
    }
    match target {
        ParameterType::Integer => match value.as_widened_long() {
            Some(widened) => Ok(CoercedValue::Integer(widened as i32)),
            None => parse_text(target, value, |text| text.parse::<i32>().ok().map(CoercedValue::Integer)),
        },
        ParameterType::Long => match value.as_widened_long() {
            Some(widened) => Ok(CoercedValue::Long(widened)),
            None => parse_text(target, value, |text| text.parse::<i64>().ok().map(CoercedValue::Long)),
        },
        ParameterType::DecimalFloat => match value {
            CoercedValue::Integer(narrow) => Ok(CoercedValue::Float(f64::from(*narrow))),
            CoercedValue::Long(wide) => Ok(CoercedValue::Float(*wide as f64)),
            CoercedValue::Float(float) => Ok(CoercedValue::Float(*float)),
            CoercedValue::Decimal(decimal) => decimal
                .to_f64()
                .map(CoercedValue::Float)
                .ok_or_else(|| CoercionError::new(target, value)),
            other => parse_text(target, other, |text| text.parse::<f64>().ok().map(CoercedValue::Float)),
        },
        ParameterType::DecimalExact => match value {
            CoercedValue::Decimal(decimal) => Ok(CoercedValue::Decimal(decimal.clone())),
            CoercedValue::Integer(narrow) => Ok(CoercedValue::Decimal(BigDecimal::from(i64::from(*narrow)))),
            CoercedValue::Long(wide) => Ok(CoercedValue::Decimal(BigDecimal::from(*wide))),
            // The string route keeps the literal digits; no float detour.
            other => parse_text(target, other, |text| {
                BigDecimal::from_str(text).ok().map(CoercedValue::Decimal)
            }),
        },
        ParameterType::Boolean => match value {
            CoercedValue::Boolean(flag) => Ok(CoercedValue::Boolean(*flag)),
            other => parse_text(target, other, |text| {
                parse_boolean_vocabulary(text).map(CoercedValue::Boolean)
            }),
        },
        ParameterType::Date => match value {
            CoercedValue::Date(_) | CoercedValue::DateTime(_) => Ok(value.clone()),
            other => parse_text(target, other, |text| parse_iso_date(text).map(CoercedValue::Date)),
        },
        ParameterType::DateTime => match value {
            CoercedValue::DateTime(timestamp) => Ok(CoercedValue::DateTime(*timestamp)),
            CoercedValue::Date(date) => Ok(CoercedValue::DateTime(date.and_time(NaiveTime::MIN))),
            other => parse_text(target, other, |text| {
                parse_iso_datetime(text).map(CoercedValue::DateTime)
            }),
        },
        ParameterType::String => Ok(CoercedValue::Text(value.render_text())),
    }
}

/// Applies a text parser to the value's rendering, producing the target
/// coercion error on failure.
fn parse_text(
    target: ParameterType,
    value: &CoercedValue,
    parser: impl FnOnce(&str) -> Option<CoercedValue>,
) -> Result<CoercedValue, CoercionError> {
    let rendered = value.render_text();
    parser(rendered.trim()).ok_or_else(|| CoercionError::new(target, value))
}

/// Case-insensitive boolean vocabulary, machine and localized forms.
fn parse_boolean_vocabulary(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "true" | "1" | "yes" | "sim" => Some(true),
        "false" | "0" | "no" | "nao" | "não" => Some(false),
        _ => None,
    }
}
