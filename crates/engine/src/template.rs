//! Template engine boundary.
//!
//! The rendering engine is an external collaborator: it owns the compiled
//! template representation, the data connection, and the renderable output.
//! This module defines the trait the generation pipeline drives, the export
//! format selection, and the one-time render configuration that replaces
//! ambient process-global settings.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use relato_types::{CoercedValue, TemplateSignature};

/// Output format for a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Portable Document Format.
    Pdf,
    /// Self-contained HTML.
    Html,
    /// Comma-separated values.
    Csv,
    /// Raw report XML.
    Xml,
    /// Office Open XML workbook.
    Xlsx,
}

impl ExportFormat {
    /// Resolves a format from its case-insensitive name.
    pub fn parse(text: &str) -> Option<ExportFormat> {
        match text.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(ExportFormat::Pdf),
            "html" => Some(ExportFormat::Html),
            "csv" => Some(ExportFormat::Csv),
            "xml" => Some(ExportFormat::Xml),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }

    /// Wire name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Content type of the rendered output.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One-time font and encoding configuration handed to the template engine at
/// process startup.
///
/// Idempotent by construction: the engine adapter applies it once, instead of
/// mutating process-global state on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Default font family for report text.
    pub default_font_name: String,
    /// Font family embedded into PDF output.
    pub pdf_font_name: String,
    /// Character encoding for PDF output.
    pub pdf_encoding: String,
    /// Whether fonts are embedded into the PDF binary.
    pub embed_pdf_fonts: bool,
    /// Whether missing glyphs render as blanks instead of failing the export.
    pub ignore_missing_fonts: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_font_name: "DejaVu Sans".to_string(),
            pdf_font_name: "DejaVu Sans".to_string(),
            pdf_encoding: "UTF-8".to_string(),
            embed_pdf_fonts: true,
            ignore_missing_fonts: true,
        }
    }
}

/// The rendering collaborator the generation pipeline drives.
///
/// Implementations own the compiled template type, the data connection
/// handle, and the renderable output; the pipeline never inspects any of
/// them. Both calls are single synchronous round trips and must be
/// re-entrant: concurrent generation requests share one engine instance.
pub trait TemplateEngine {
    /// Compiled template representation.
    type Template;
    /// Data source connection handed through to the render call.
    type Connection;
    /// Rendered output.
    type Renderable;

    /// Reads the template's own parameter signature, the name-to-type map
    /// the render step enforces.
    fn native_signature(&self, template: &Self::Template) -> anyhow::Result<TemplateSignature>;

    /// Fills the template with the prepared parameter map and exports it in
    /// the requested format.
    fn render(
        &self,
        template: &Self::Template,
        parameters: &IndexMap<String, CoercedValue>,
        connection: &mut Self::Connection,
        format: ExportFormat,
    ) -> anyhow::Result<Self::Renderable>;
}
