//! wellpath-report
//!
//! Assembles the ordered, render-ready [`ReportContext`] from intake data,
//! derived metrics and upstream recommendation lists.

pub mod builder;
pub mod copy;
pub mod error;
pub mod normalize;
pub mod payload;

use wellpath_core::models::context::ReportContext;

pub use builder::{ContextBuilder, select_variant};
pub use copy::ReportCopyConfig;
pub use normalize::{normalize_labs, normalize_recommendations};
pub use payload::AssemblyPayload;

use error::ReportError;

/// Build a context with the built-in copy.
pub fn build_context(payload: &AssemblyPayload) -> Result<ReportContext, ReportError> {
    ContextBuilder::new(ReportCopyConfig::default())?.build(payload)
}
