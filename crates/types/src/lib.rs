//! Shared type definitions for the Relato report service.
//!
//! This crate holds the data model that every other crate in the workspace
//! consumes: the closed parameter type taxonomy, persisted parameter
//! declarations, the semantic value model produced by coercion, the
//! template-native parameter signature, and registered report metadata.
//!
//! Everything here is plain data with serde support; behavior lives in the
//! `relato-registry` (registration) and `relato-engine` (generation) crates.

pub mod declaration;
pub mod parameter;
pub mod report;
pub mod signature;
pub mod value;

pub use declaration::ParameterDeclaration;
pub use parameter::{ParameterType, TaxonomyEntry, taxonomy_listing};
pub use report::ReportRecord;
pub use signature::{NativeType, TemplateSignature};
pub use value::CoercedValue;
