//! Definition store boundary.

use anyhow::Result;

use relato_types::ParameterDeclaration;

/// Persistence boundary for parameter declarations.
///
/// The generation pipeline only ever reads through this trait; writes happen
/// at registration time and are serialized by the backing store's own
/// transactional boundary. Duplicate names within one report are the store's
/// responsibility to prevent; the engine tolerates them by letting the last
/// declaration win during merge.
///
/// Implementations are expected to be cheap to call — one synchronous round
/// trip per generation request — and must not retain per-request state.
pub trait DefinitionStore {
    /// Returns every declaration persisted for the given report code, in
    /// declaration order.
    fn declarations_for(&self, report: &str) -> Result<Vec<ParameterDeclaration>>;

    /// Inserts or replaces the declaration keyed by (report, name) and
    /// returns the persisted form.
    fn upsert(&mut self, report: &str, declaration: ParameterDeclaration) -> Result<ParameterDeclaration>;

    /// Deletes the declaration keyed by (report, name). Returns whether a
    /// declaration existed.
    fn delete(&mut self, report: &str, parameter_name: &str) -> Result<bool>;
}
