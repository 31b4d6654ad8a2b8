//! CLI library components for labscan.

pub mod logging;
pub mod report;
