//! CLI commands
//!
//! Scan Commands (1):
//! - run_scan: Walk a source tree and persist the annotation report

pub mod scan;

pub use scan::{render_report, run_scan, write_report, ReportDestination};
