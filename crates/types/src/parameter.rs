//! The closed parameter type taxonomy.
//!
//! Every declared report parameter carries exactly one of these types. Each
//! member knows its human display label, an example literal, an optional
//! presentation mask (never consumed by coercion), and the canonical
//! wire-format pattern used by type inference and by the lightweight
//! default-value acceptance test at registration time.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches an integer literal in wire form.
static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("static integer pattern"));

/// Matches a decimal literal with a mandatory fractional part.
static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+\.\d+$").expect("static decimal pattern"));

/// Matches either an integer or a decimal literal.
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("static numeric pattern"));

/// Matches the accepted boolean vocabulary, machine and localized forms.
static BOOLEAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(true|false|1|0|yes|no|sim|nao|não)$").expect("static boolean pattern"));

/// Matches an ISO-8601 local date (`YYYY-MM-DD`).
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// Matches an ISO-8601 local date-time (`YYYY-MM-DDTHH:MM:SS`).
static DATETIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").expect("static datetime pattern"));

/// Matches anything; the string type accepts every literal.
static ANY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s\S]*$").expect("static any pattern"));

/// Closed set of parameter types supported by report declarations.
///
/// The taxonomy is stable: clients enumerate it through [`ParameterType::all`]
/// to build parameter entry forms, and the registration validator rejects any
/// declaration whose type text does not resolve to a member via
/// [`ParameterType::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterType {
    /// Free text.
    String,
    /// Machine-word integer.
    Integer,
    /// Wide integer, the default for identifier-like parameters.
    Long,
    /// Floating-point decimal.
    DecimalFloat,
    /// Exact decimal; never round-trips through floating point.
    DecimalExact,
    /// True or false.
    Boolean,
    /// Calendar date without a time component.
    Date,
    /// Calendar date with a time-of-day component.
    #[serde(rename = "DATETIME")]
    DateTime,
}

impl ParameterType {
    /// Stable enumeration order for the exposed taxonomy listing.
    pub fn all() -> &'static [ParameterType] {
        &[
            ParameterType::String,
            ParameterType::Integer,
            ParameterType::Long,
            ParameterType::DecimalFloat,
            ParameterType::DecimalExact,
            ParameterType::Boolean,
            ParameterType::Date,
            ParameterType::DateTime,
        ]
    }

    /// Canonical wire name, matching the serde representation.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ParameterType::String => "STRING",
            ParameterType::Integer => "INTEGER",
            ParameterType::Long => "LONG",
            ParameterType::DecimalFloat => "DECIMAL_FLOAT",
            ParameterType::DecimalExact => "DECIMAL_EXACT",
            ParameterType::Boolean => "BOOLEAN",
            ParameterType::Date => "DATE",
            ParameterType::DateTime => "DATETIME",
        }
    }

    /// Human display label for client-side form generation.
    pub fn display_label(&self) -> &'static str {
        match self {
            ParameterType::String => "Texto",
            ParameterType::Integer => "Número Inteiro",
            ParameterType::Long => "Número Longo",
            ParameterType::DecimalFloat => "Número Decimal",
            ParameterType::DecimalExact => "Decimal Preciso",
            ParameterType::Boolean => "Sim/Não",
            ParameterType::Date => "Data",
            ParameterType::DateTime => "Data e Hora",
        }
    }

    /// Example literal shown next to the display label.
    pub fn example_literal(&self) -> &'static str {
        match self {
            ParameterType::String => "texto",
            ParameterType::Integer => "123",
            ParameterType::Long => "123456789",
            ParameterType::DecimalFloat => "123.45",
            ParameterType::DecimalExact => "1234.56",
            ParameterType::Boolean => "true",
            ParameterType::Date => "2024-12-31",
            ParameterType::DateTime => "2024-12-31T23:59:00",
        }
    }

    /// Default presentation mask, when the type has one.
    ///
    /// Masks are for client display only; coercion always consumes the ISO
    /// wire formats.
    pub fn format_mask(&self) -> Option<&'static str> {
        match self {
            ParameterType::Date => Some("dd/MM/yyyy"),
            ParameterType::DateTime => Some("dd/MM/yyyy HH:mm"),
            ParameterType::DecimalFloat | ParameterType::DecimalExact => Some("#,##0.00"),
            _ => None,
        }
    }

    /// Canonical wire-format pattern for this type.
    ///
    /// Inference matches example literals against these patterns in taxonomy
    /// priority order; see `relato-registry`'s inferencer for the ordering.
    pub fn wire_pattern(&self) -> &'static Regex {
        match self {
            ParameterType::String => &ANY_PATTERN,
            ParameterType::Integer | ParameterType::Long => &INTEGER_PATTERN,
            ParameterType::DecimalFloat | ParameterType::DecimalExact => &DECIMAL_PATTERN,
            ParameterType::Boolean => &BOOLEAN_PATTERN,
            ParameterType::Date => &DATE_PATTERN,
            ParameterType::DateTime => &DATETIME_PATTERN,
        }
    }

    /// Lightweight syntactic acceptance test for a default value literal.
    ///
    /// This is deliberately cheaper than full coercion: it checks the literal's
    /// shape, not its semantic validity (an out-of-range day still passes and
    /// is handled fail-soft at generation time). Empty literals are accepted
    /// everywhere and treated as absent.
    pub fn accepts_literal(&self, literal: &str) -> bool {
        let trimmed = literal.trim();
        if trimmed.is_empty() {
            return true;
        }
        match self {
            ParameterType::String => true,
            ParameterType::Integer | ParameterType::Long => INTEGER_PATTERN.is_match(trimmed),
            ParameterType::DecimalFloat | ParameterType::DecimalExact => NUMERIC_PATTERN.is_match(trimmed),
            ParameterType::Boolean => BOOLEAN_PATTERN.is_match(trimmed),
            ParameterType::Date => DATE_PATTERN.is_match(trimmed),
            ParameterType::DateTime => DATETIME_PATTERN.is_match(trimmed),
        }
    }

    /// Resolves a type name to a taxonomy member.
    ///
    /// Accepts the canonical wire names plus the engine-facing aliases that
    /// existing declarations and template signatures use (`Integer`, `Long`,
    /// `Double`, `BigDecimal`, `Decimal`, `Boolean`, `Date`, `Timestamp`),
    /// case-insensitively. Returns `None` for anything else so callers can
    /// fall back to inference or reject the declaration.
    pub fn parse(text: &str) -> Option<ParameterType> {
        match text.trim().to_ascii_uppercase().as_str() {
            "STRING" => Some(ParameterType::String),
            "INTEGER" => Some(ParameterType::Integer),
            "LONG" => Some(ParameterType::Long),
            "DECIMAL_FLOAT" | "DOUBLE" => Some(ParameterType::DecimalFloat),
            "DECIMAL_EXACT" | "DECIMAL" | "BIGDECIMAL" => Some(ParameterType::DecimalExact),
            "BOOLEAN" => Some(ParameterType::Boolean),
            "DATE" => Some(ParameterType::Date),
            "DATETIME" | "TIMESTAMP" => Some(ParameterType::DateTime),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.wire_name())
    }
}

/// One taxonomy member as exposed to clients for form generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Canonical wire name.
    pub name: String,
    /// Human display label.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Example literal.
    pub example: String,
    /// Default presentation mask, when the type has one.
    #[serde(rename = "defaultFormat")]
    pub default_format: Option<String>,
}

/// The taxonomy listing served to clients, in stable order.
pub fn taxonomy_listing() -> Vec<TaxonomyEntry> {
    ParameterType::all()
        .iter()
        .map(|parameter_type| TaxonomyEntry {
            name: parameter_type.wire_name().to_string(),
            display_name: parameter_type.display_label().to_string(),
            example: parameter_type.example_literal().to_string(),
            default_format: parameter_type.format_mask().map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names_case_insensitively() {
        assert_eq!(ParameterType::parse("DATE"), Some(ParameterType::Date));
        assert_eq!(ParameterType::parse("date"), Some(ParameterType::Date));
        assert_eq!(ParameterType::parse(" Integer "), Some(ParameterType::Integer));
        assert_eq!(ParameterType::parse("DECIMAL_EXACT"), Some(ParameterType::DecimalExact));
    }

    #[test]
    fn parse_accepts_engine_facing_aliases() {
        assert_eq!(ParameterType::parse("Double"), Some(ParameterType::DecimalFloat));
        assert_eq!(ParameterType::parse("BigDecimal"), Some(ParameterType::DecimalExact));
        assert_eq!(ParameterType::parse("Decimal"), Some(ParameterType::DecimalExact));
        assert_eq!(ParameterType::parse("Timestamp"), Some(ParameterType::DateTime));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(ParameterType::parse("UUID"), None);
        assert_eq!(ParameterType::parse(""), None);
        assert_eq!(ParameterType::parse("2024-01-01"), None);
    }

    #[test]
    fn serde_round_trips_wire_names() {
        for parameter_type in ParameterType::all() {
            let encoded = serde_json::to_string(parameter_type).expect("serialize taxonomy member");
            assert_eq!(encoded, format!("\"{}\"", parameter_type.wire_name()));
            let decoded: ParameterType = serde_json::from_str(&encoded).expect("deserialize taxonomy member");
            assert_eq!(decoded, *parameter_type);
        }
    }

    #[test]
    fn accepts_literal_is_shape_only() {
        assert!(ParameterType::Integer.accepts_literal("-42"));
        assert!(!ParameterType::Integer.accepts_literal("42.5"));
        assert!(ParameterType::DecimalExact.accepts_literal("42"));
        assert!(ParameterType::DecimalExact.accepts_literal("42.5"));
        assert!(ParameterType::Boolean.accepts_literal("SIM"));
        assert!(ParameterType::Boolean.accepts_literal("yes"));
        assert!(!ParameterType::Boolean.accepts_literal("maybe"));
        assert!(ParameterType::Date.accepts_literal("2024-12-31"));
        // Shape check only: an impossible day still passes here.
        assert!(ParameterType::Date.accepts_literal("2024-13-99"));
        assert!(!ParameterType::Date.accepts_literal("31/12/2024"));
        assert!(ParameterType::DateTime.accepts_literal("2024-12-31T23:59:00"));
    }

    #[test]
    fn empty_literal_is_accepted_everywhere() {
        for parameter_type in ParameterType::all() {
            assert!(parameter_type.accepts_literal(""));
            assert!(parameter_type.accepts_literal("   "));
        }
    }

    #[test]
    fn every_member_has_display_metadata() {
        for parameter_type in ParameterType::all() {
            assert!(!parameter_type.display_label().is_empty());
            assert!(!parameter_type.example_literal().is_empty());
        }
    }

    #[test]
    fn taxonomy_listing_covers_the_whole_taxonomy_in_order() {
        let listing = taxonomy_listing();
        assert_eq!(listing.len(), ParameterType::all().len());
        assert_eq!(listing[0].name, "STRING");

        let date_entry = listing.iter().find(|entry| entry.name == "DATE").expect("DATE listed");
        assert_eq!(date_entry.display_name, "Data");
        assert_eq!(date_entry.default_format.as_deref(), Some("dd/MM/yyyy"));

        let encoded = serde_json::to_value(&listing).expect("serialize listing");
        assert_eq!(encoded[0]["displayName"], "Texto");
    }
}
