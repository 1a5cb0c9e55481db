//! Parameter type inference from example literals.

use serde_json::Value;

use relato_types::ParameterType;

/// Derives a taxonomy member from an example literal.
///
/// This is a total function: any JSON value resolves to exactly one member
/// and unparseable text always lands on [`ParameterType::String`]. JSON
/// scalars are classified by their native type first; text is then matched
/// against the taxonomy wire patterns in priority order (date-time before
/// date, integer before decimal) so the more specific shape wins.
pub fn infer_parameter_type(example: &Value) -> ParameterType {
    match example {
        Value::Null => ParameterType::String,
        Value::Bool(_) => ParameterType::Boolean,
        Value::Number(number) => {
            if let Some(integral) = number.as_i64() {
                if i32::try_from(integral).is_ok() {
                    ParameterType::Integer
                } else {
                    ParameterType::Long
                }
            } else if number.as_u64().is_some() {
                ParameterType::Long
            } else {
                ParameterType::DecimalFloat
            }
        }
        Value::String(text) => infer_from_text(text),
        // Containers carry no scalar shape to classify.
        _ => ParameterType::String,
    }
}

fn infer_from_text(text: &str) -> ParameterType {
    if ParameterType::DateTime.wire_pattern().is_match(text) {
        ParameterType::DateTime
    } else if ParameterType::Date.wire_pattern().is_match(text) {
        ParameterType::Date
    } else if ParameterType::Integer.wire_pattern().is_match(text) {
        ParameterType::Integer
    } else if ParameterType::DecimalFloat.wire_pattern().is_match(text) {
        ParameterType::DecimalFloat
    } else {
        ParameterType::String
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_classify_by_native_type() {
        assert_eq!(infer_parameter_type(&json!(null)), ParameterType::String);
        assert_eq!(infer_parameter_type(&json!(true)), ParameterType::Boolean);
        assert_eq!(infer_parameter_type(&json!(123)), ParameterType::Integer);
        assert_eq!(infer_parameter_type(&json!(4_000_000_000i64)), ParameterType::Long);
        assert_eq!(infer_parameter_type(&json!(12.5)), ParameterType::DecimalFloat);
    }

    #[test]
    fn text_matches_wire_patterns_in_priority_order() {
        assert_eq!(infer_parameter_type(&json!("2024-12-31T10:00:00")), ParameterType::DateTime);
        assert_eq!(infer_parameter_type(&json!("2024-12-31")), ParameterType::Date);
        assert_eq!(infer_parameter_type(&json!("-42")), ParameterType::Integer);
        assert_eq!(infer_parameter_type(&json!("42.5")), ParameterType::DecimalFloat);
        assert_eq!(infer_parameter_type(&json!("anything else")), ParameterType::String);
    }

    #[test]
    fn inference_is_total() {
        // No input shape may panic or fail; containers degrade to STRING.
        for example in [
            json!([1, 2, 3]),
            json!({"nested": true}),
            json!(""),
            json!("1969-07-20T20:17:40Z"),
            json!(f64::MAX),
        ] {
            let _ = infer_parameter_type(&example);
        }
        assert_eq!(infer_parameter_type(&json!([1])), ParameterType::String);
        assert_eq!(infer_parameter_type(&json!({})), ParameterType::String);
        // A zone-suffixed timestamp is not the local wire shape.
        assert_eq!(infer_parameter_type(&json!("1969-07-20T20:17:40Z")), ParameterType::String);
    }
}
