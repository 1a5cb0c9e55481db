//! # Text Processing Utilities
//!
//! Plain-text rendering of JSON values and report code normalization for
//! catalog lookups.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Trailing template extension, stripped before code comparison.
static TEMPLATE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(jasper|jrxml)$").expect("static template extension pattern"));

/// Renders a JSON value as plain text.
///
/// Strings render without surrounding quotes; numbers, booleans, and null use
/// their literal forms; containers fall back to compact JSON. This is the
/// textual rendering used when a literal default or a fail-soft substitution
/// needs a string form of an arbitrary value.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Normalizes a report code for lookup.
///
/// Strips a trailing template extension, trims surrounding whitespace, and
/// folds Latin diacritics so `Relatório` and `relatorio` address the same
/// report.
pub fn normalize_report_code(code: &str) -> String {
    let without_extension = TEMPLATE_EXTENSION.replace(code, "");
    fold_diacritics(without_extension.trim())
}

/// Folds accented Latin characters onto their ASCII base letters.
fn fold_diacritics(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(character: char) -> char {
    match character {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_text_unquotes_strings() {
        assert_eq!(plain_text(&json!("hello")), "hello");
        assert_eq!(plain_text(&json!(123)), "123");
        assert_eq!(plain_text(&json!(1.5)), "1.5");
        assert_eq!(plain_text(&json!(true)), "true");
        assert_eq!(plain_text(&json!(null)), "null");
    }

    #[test]
    fn plain_text_renders_containers_as_compact_json() {
        assert_eq!(plain_text(&json!([1, 2])), "[1,2]");
        assert_eq!(plain_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn normalize_strips_extension_and_whitespace() {
        assert_eq!(normalize_report_code("REL_VENDAS.jasper"), "REL_VENDAS");
        assert_eq!(normalize_report_code("  REL_VENDAS.jrxml "), "REL_VENDAS");
        assert_eq!(normalize_report_code("REL_VENDAS"), "REL_VENDAS");
        // Only a trailing extension is stripped.
        assert_eq!(normalize_report_code("rel.jasper.bak"), "rel.jasper.bak");
    }

    #[test]
    fn normalize_folds_diacritics() {
        assert_eq!(normalize_report_code("Relatório"), "Relatorio");
        assert_eq!(normalize_report_code("PRODUÇÃO"), "PRODUCAO");
    }
}
