//! CLI library components for the Somnia staging importer.

pub mod logging;
pub mod pipeline;
