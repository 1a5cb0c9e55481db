//! # Relato Engine
//!
//! The generation-time half of the parameter reconciliation core. Given a
//! report code and a loosely-typed bag of runtime values, the engine merges
//! the caller's values with the stored declarations (defaults and
//! required-ness), coerces everything against the declared taxonomy types,
//! and then aligns the result with the compiled template's own parameter
//! signature before handing the map to the template engine for rendering.
//!
//! ## Pipeline
//!
//! 1. **Bind** — raw JSON values bind into the semantic value model;
//!    identifier-suffixed numerics widen immediately and become final.
//! 2. **Merge** — stored declarations contribute defaults and enforce
//!    required-ness; unknown caller names pass through untouched.
//! 3. **Pass 1** — each value with a stored declaration coerces to its
//!    declared taxonomy type.
//! 4. **Pass 2** — each value named by the template's native signature
//!    re-coerces to the native target type, the one the render step
//!    actually enforces.
//!
//! Coercion is fail-soft: a value that cannot be converted degrades to its
//! plain textual rendering instead of failing the request, and every
//! degradation is recorded on the prepared result and logged.
//!
//! ## Architecture
//!
//! - **`resolve`**: value binding, identifier widening, declaration merge
//! - **`coerce`**: scalar and collection coercion with degradation tracking
//! - **`generate`**: the two-pass pipeline and render orchestration
//! - **`template`**: template engine boundary, export formats, render config

pub mod coerce;
pub mod error;
pub mod generate;
pub mod resolve;
pub mod template;

pub use coerce::{Coercion, coerce_declared, coerce_native};
pub use error::{GenerationError, ResolveError};
pub use generate::{CoercionWarning, GenerationOutcome, PreparedParameters, generate, prepare_parameters};
pub use resolve::{BoundParameters, bind_caller_values, merge_with_declarations};
pub use template::{ExportFormat, RenderConfig, TemplateEngine};
