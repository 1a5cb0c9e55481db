//! Sector classification of report records.
//!
//! Reports without an explicit sector assignment are classified from their
//! code prefix first, then from keyword hints in the name and description,
//! and land in the general bucket when nothing matches.

use indexmap::IndexMap;

use relato_types::ReportRecord;

/// Code prefixes mapped to sectors, checked before keyword hints.
const PREFIX_TABLE: [(&str, &str); 5] = [
    ("log_", "logistica"),
    ("fin_", "financeiro"),
    ("cmp_", "compras"),
    ("com_", "comercial"),
    ("est_", "estoque"),
];

/// Keywords matched against the report name and description.
const KEYWORD_TABLE: [&str; 5] = ["logistica", "financeiro", "compras", "comercial", "estoque"];

/// Fallback sector when nothing matches.
const GENERAL_SECTOR: &str = "geral";

/// Returns the sector a report belongs to.
///
/// An explicit non-blank assignment on the record always wins; otherwise the
/// sector is inferred from the code prefix and keyword hints.
pub fn classify_sector(record: &ReportRecord) -> String {
    if let Some(sector) = &record.sector
        && !sector.trim().is_empty()
    {
        return sector.trim().to_string();
    }
    infer_sector(record).to_string()
}

fn infer_sector(record: &ReportRecord) -> &'static str {
    let code = record.code.to_lowercase();
    for (prefix, sector) in PREFIX_TABLE {
        if code.starts_with(prefix) {
            return sector;
        }
    }

    let name = record.name.to_lowercase();
    let description = record.description.as_deref().unwrap_or("").to_lowercase();
    for keyword in KEYWORD_TABLE {
        if name.contains(keyword) || description.contains(keyword) {
            return keyword;
        }
    }

    GENERAL_SECTOR
}

/// Groups reports by sector, preserving input order within each group.
pub fn group_by_sector<'record>(
    records: impl IntoIterator<Item = &'record ReportRecord>,
) -> IndexMap<String, Vec<&'record ReportRecord>> {
    let mut grouped: IndexMap<String, Vec<&ReportRecord>> = IndexMap::new();
    for record in records {
        grouped.entry(classify_sector(record)).or_default().push(record);
    }
    grouped
}

/// Filters reports belonging to one sector.
pub fn reports_in_sector<'record>(
    records: impl IntoIterator<Item = &'record ReportRecord>,
    sector: &str,
) -> Vec<&'record ReportRecord> {
    records
        .into_iter()
        .filter(|record| classify_sector(record) == sector)
        .collect()
}
