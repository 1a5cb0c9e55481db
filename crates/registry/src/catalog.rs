//! In-memory report catalog.
//!
//! The catalog is the reference [`DefinitionStore`] implementation: it backs
//! the test suites and small embedded deployments, and documents the lookup
//! semantics a relational store is expected to provide (code lookup is
//! normalized and case-insensitive, declarations are keyed by report code
//! plus parameter name).

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use relato_types::{ParameterDeclaration, ReportRecord};
use relato_util::normalize_report_code;

use crate::error::CatalogError;
use crate::intake::normalize_parameter_intake;
use crate::store::DefinitionStore;
use crate::validation::{finalize_declarations, validate_declarations};

/// In-memory registry of report records and their parameter declarations.
#[derive(Debug, Default)]
pub struct ReportCatalog {
    /// Report records keyed by normalized code, in registration order.
    reports: IndexMap<String, ReportRecord>,
    /// Declarations per normalized report code, keyed by parameter name.
    declarations: IndexMap<String, IndexMap<String, ParameterDeclaration>>,
}

impl ReportCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a report together with its parameter intake document.
    ///
    /// The intake is normalized and validated before anything is stored;
    /// a failing declaration aborts the whole registration. Returns the
    /// finalized declarations in intake order.
    pub fn register_report(
        &mut self,
        record: ReportRecord,
        intake: Option<&Value>,
    ) -> Result<Vec<ParameterDeclaration>, CatalogError> {
        let declarations = match intake {
            Some(document) => finalize_declarations(normalize_parameter_intake(document)?)?,
            None => Vec::new(),
        };

        let report_key = normalize_report_code(&record.code);
        debug!(report = %report_key, declarations = declarations.len(), "registering report");
        self.reports.insert(report_key.clone(), record);
        let stored = self.declarations.entry(report_key).or_default();
        for declaration in &declarations {
            stored.insert(declaration.name.clone(), declaration.clone());
        }
        Ok(declarations)
    }

    /// Finds a report by code, tolerating extensions, surrounding whitespace,
    /// diacritics, and case differences.
    pub fn find_by_code(&self, code: &str) -> Option<&ReportRecord> {
        let normalized = normalize_report_code(code);
        self.reports
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&normalized))
            .map(|(_, record)| record)
    }

    /// Finds a report by code first, then by object name.
    pub fn find_by_code_or_name(&self, key: &str) -> Option<&ReportRecord> {
        self.find_by_code(key)
            .or_else(|| self.reports.values().find(|record| record.name.eq_ignore_ascii_case(key)))
    }

    /// All registered reports in registration order.
    pub fn reports(&self) -> impl Iterator<Item = &ReportRecord> {
        self.reports.values()
    }

    /// Removes a report and its declarations. Returns whether it existed.
    pub fn remove_report(&mut self, code: &str) -> bool {
        let normalized = normalize_report_code(code);
        self.declarations.shift_remove(&normalized);
        self.reports.shift_remove(&normalized).is_some()
    }

    /// Assigns the sector of a report addressed by code or name. Returns
    /// false when the report is unknown or the sector is blank.
    pub fn set_report_sector(&mut self, code_or_name: &str, sector: &str) -> bool {
        if sector.trim().is_empty() {
            return false;
        }
        let Some(report_key) = self
            .find_by_code_or_name(code_or_name)
            .map(|record| normalize_report_code(&record.code))
        else {
            return false;
        };
        if let Some(record) = self.reports.get_mut(&report_key) {
            record.sector = Some(sector.trim().to_string());
            return true;
        }
        false
    }

    fn report_key(&self, report: &str) -> Option<String> {
        self.find_by_code_or_name(report).map(|record| normalize_report_code(&record.code))
    }
}

impl DefinitionStore for ReportCatalog {
    fn declarations_for(&self, report: &str) -> anyhow::Result<Vec<ParameterDeclaration>> {
        let Some(report_key) = self.report_key(report) else {
            return Ok(Vec::new());
        };
        Ok(self
            .declarations
            .get(&report_key)
            .map(|stored| stored.values().cloned().collect())
            .unwrap_or_default())
    }

    fn upsert(&mut self, report: &str, declaration: ParameterDeclaration) -> anyhow::Result<ParameterDeclaration> {
        let report_key = self
            .report_key(report)
            .ok_or_else(|| CatalogError::UnknownReport(report.to_string()))?;
        validate_declarations(std::slice::from_ref(&declaration))?;
        debug!(report = %report_key, parameter = %declaration.name, "upserting declaration");
        self.declarations
            .entry(report_key)
            .or_default()
            .insert(declaration.name.clone(), declaration.clone());
        Ok(declaration)
    }

    fn delete(&mut self, report: &str, parameter_name: &str) -> anyhow::Result<bool> {
        let Some(report_key) = self.report_key(report) else {
            return Ok(false);
        };
        Ok(self
            .declarations
            .get_mut(&report_key)
            .and_then(|stored| stored.shift_remove(parameter_name))
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use relato_types::ParameterType;

    use super::*;

    fn sales_report() -> ReportRecord {
        let mut record = ReportRecord::new("REL_VENDAS", "vendas_por_periodo.jasper");
        record.description = Some("Vendas por período".to_string());
        record
    }

    #[test]
    fn register_stores_declarations_in_intake_order() {
        let mut catalog = ReportCatalog::new();
        let declarations = catalog
            .register_report(
                sales_report(),
                Some(&json!([
                    {"nome": "dataInicio", "tipo": "DATE"},
                    {"nome": "dataFim", "tipo": "DATE"}
                ])),
            )
            .expect("register report");
        assert_eq!(declarations.len(), 2);

        let stored = catalog.declarations_for("REL_VENDAS").expect("read declarations");
        let names: Vec<_> = stored.iter().map(|declaration| declaration.name.as_str()).collect();
        assert_eq!(names, vec!["dataInicio", "dataFim"]);
    }

    #[test]
    fn register_rejects_invalid_declarations_before_storing() {
        let mut catalog = ReportCatalog::new();
        let result = catalog.register_report(sales_report(), Some(&json!([{"nome": "x", "tipo": "UUID"}])));
        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert!(catalog.find_by_code("REL_VENDAS").is_none());
    }

    #[test]
    fn code_lookup_normalizes_and_ignores_case() {
        let mut catalog = ReportCatalog::new();
        catalog.register_report(sales_report(), None).expect("register report");

        assert!(catalog.find_by_code("rel_vendas").is_some());
        assert!(catalog.find_by_code(" REL_VENDAS.jasper ").is_some());
        assert!(catalog.find_by_code("REL_COMPRAS").is_none());
    }

    #[test]
    fn lookup_falls_back_to_the_object_name() {
        let mut catalog = ReportCatalog::new();
        catalog.register_report(sales_report(), None).expect("register report");
        assert!(catalog.find_by_code_or_name("vendas_por_periodo.jasper").is_some());
    }

    #[test]
    fn upsert_replaces_by_parameter_name() {
        let mut catalog = ReportCatalog::new();
        catalog
            .register_report(sales_report(), Some(&json!({"dataInicio": "DATE"})))
            .expect("register report");

        let mut replacement = ParameterDeclaration::new("dataInicio", ParameterType::DateTime);
        replacement.required = true;
        catalog.upsert("REL_VENDAS", replacement).expect("upsert declaration");

        let stored = catalog.declarations_for("REL_VENDAS").expect("read declarations");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].parameter_type, ParameterType::DateTime);
        assert!(stored[0].required);
    }

    #[test]
    fn upsert_requires_a_registered_report() {
        let mut catalog = ReportCatalog::new();
        let result = catalog.upsert("REL_FANTASMA", ParameterDeclaration::new("x", ParameterType::String));
        assert!(result.is_err());
    }

    #[test]
    fn delete_reports_whether_a_declaration_existed() {
        let mut catalog = ReportCatalog::new();
        catalog
            .register_report(sales_report(), Some(&json!({"dataInicio": "DATE"})))
            .expect("register report");

        assert!(catalog.delete("REL_VENDAS", "dataInicio").expect("delete existing"));
        assert!(!catalog.delete("REL_VENDAS", "dataInicio").expect("delete absent"));
    }

    #[test]
    fn unknown_reports_have_no_declarations() {
        let catalog = ReportCatalog::new();
        assert!(catalog.declarations_for("REL_FANTASMA").expect("read unknown report").is_empty());
    }

    #[test]
    fn sector_assignment_requires_a_known_report_and_a_sector() {
        let mut catalog = ReportCatalog::new();
        catalog.register_report(sales_report(), None).expect("register report");

        assert!(catalog.set_report_sector("REL_VENDAS", "comercial"));
        assert_eq!(
            catalog.find_by_code("REL_VENDAS").and_then(|record| record.sector.as_deref()),
            Some("comercial")
        );
        assert!(!catalog.set_report_sector("REL_VENDAS", "  "));
        assert!(!catalog.set_report_sector("REL_FANTASMA", "comercial"));
    }
}
