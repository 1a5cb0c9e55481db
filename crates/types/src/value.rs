//! Semantic value model produced by the coercion engine.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

/// A runtime parameter value after coercion.
///
/// Raw JSON values bind structurally into this model on arrival (numbers to
/// the narrowest fitting integral width, strings to text, arrays to
/// collections); the coercion engine then converts between members according
/// to the declared or template-native target type.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// Explicit JSON null; passes through every coercion untouched.
    Null,
    /// Machine-word integer.
    Integer(i32),
    /// Wide integer.
    Long(i64),
    /// Floating-point decimal.
    Float(f64),
    /// Exact decimal.
    Decimal(BigDecimal),
    /// True or false.
    Boolean(bool),
    /// Date without a time component.
    Date(NaiveDate),
    /// Date with a time-of-day component.
    DateTime(NaiveDateTime),
    /// Free text.
    Text(String),
    /// Ordered collection; elements coerce independently.
    Collection(Vec<CoercedValue>),
}

impl CoercedValue {
    /// Binds a raw JSON value into the semantic model without any
    /// type-directed conversion.
    ///
    /// Integral numbers land on [`CoercedValue::Integer`] when they fit a
    /// machine word and [`CoercedValue::Long`] otherwise; every other number
    /// becomes [`CoercedValue::Float`]. Objects have no semantic counterpart
    /// and bind as their compact JSON text.
    pub fn from_raw(raw: &Value) -> CoercedValue {
        match raw {
            Value::Null => CoercedValue::Null,
            Value::Bool(flag) => CoercedValue::Boolean(*flag),
            Value::Number(number) => {
                if let Some(integral) = number.as_i64() {
                    if let Ok(narrow) = i32::try_from(integral) {
                        CoercedValue::Integer(narrow)
                    } else {
                        CoercedValue::Long(integral)
                    }
                } else {
                    CoercedValue::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(text) => CoercedValue::Text(text.clone()),
            Value::Array(elements) => CoercedValue::Collection(elements.iter().map(CoercedValue::from_raw).collect()),
            Value::Object(_) => CoercedValue::Text(raw.to_string()),
        }
    }

    /// Plain textual rendering, used by STRING coercion and by the fail-soft
    /// substitution path.
    pub fn render_text(&self) -> String {
        match self {
            CoercedValue::Null => "null".to_string(),
            CoercedValue::Integer(value) => value.to_string(),
            CoercedValue::Long(value) => value.to_string(),
            CoercedValue::Float(value) => value.to_string(),
            CoercedValue::Decimal(value) => value.to_string(),
            CoercedValue::Boolean(value) => value.to_string(),
            CoercedValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            CoercedValue::DateTime(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
            CoercedValue::Text(value) => value.clone(),
            CoercedValue::Collection(elements) => {
                let rendered: Vec<String> = elements.iter().map(CoercedValue::render_text).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
    }

    /// Whether this value is numeric in any width.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CoercedValue::Integer(_) | CoercedValue::Long(_) | CoercedValue::Float(_) | CoercedValue::Decimal(_)
        )
    }

    /// Widens a numeric value to the widest integral representation,
    /// truncating any fractional part. Returns `None` for non-numeric values
    /// and for decimals outside the `i64` range.
    pub fn as_widened_long(&self) -> Option<i64> {
        use bigdecimal::ToPrimitive;
        match self {
            CoercedValue::Integer(value) => Some(i64::from(*value)),
            CoercedValue::Long(value) => Some(*value),
            CoercedValue::Float(value) => Some(*value as i64),
            CoercedValue::Decimal(value) => value.to_i64(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn from_raw_narrows_integrals_by_width() {
        assert_eq!(CoercedValue::from_raw(&json!(123)), CoercedValue::Integer(123));
        assert_eq!(CoercedValue::from_raw(&json!(-7)), CoercedValue::Integer(-7));
        assert_eq!(
            CoercedValue::from_raw(&json!(4_000_000_000i64)),
            CoercedValue::Long(4_000_000_000)
        );
        assert_eq!(CoercedValue::from_raw(&json!(1.5)), CoercedValue::Float(1.5));
    }

    #[test]
    fn from_raw_binds_containers_structurally() {
        assert_eq!(
            CoercedValue::from_raw(&json!([1, "a"])),
            CoercedValue::Collection(vec![CoercedValue::Integer(1), CoercedValue::Text("a".to_string())])
        );
        assert_eq!(CoercedValue::from_raw(&json!(null)), CoercedValue::Null);
        assert_eq!(
            CoercedValue::from_raw(&json!({"k": 1})),
            CoercedValue::Text("{\"k\":1}".to_string())
        );
    }

    #[test]
    fn render_text_uses_iso_forms_for_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert_eq!(CoercedValue::Date(date).render_text(), "2024-12-31");
        let timestamp = date.and_hms_opt(23, 59, 0).expect("valid time");
        assert_eq!(CoercedValue::DateTime(timestamp).render_text(), "2024-12-31T23:59:00");
    }

    #[test]
    fn render_text_joins_collections() {
        let collection = CoercedValue::Collection(vec![CoercedValue::Integer(1), CoercedValue::Integer(2)]);
        assert_eq!(collection.render_text(), "[1, 2]");
    }

    #[test]
    fn widened_long_truncates_fractions() {
        assert_eq!(CoercedValue::Integer(123).as_widened_long(), Some(123));
        assert_eq!(CoercedValue::Float(123.9).as_widened_long(), Some(123));
        assert_eq!(
            CoercedValue::Decimal(BigDecimal::from_str("42.7").expect("valid decimal")).as_widened_long(),
            Some(42)
        );
        assert_eq!(CoercedValue::Text("123".to_string()).as_widened_long(), None);
    }
}
