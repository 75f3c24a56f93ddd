// Secdoc - security annotation extractor
// Module re-exports

pub mod commands;
pub mod error;
pub mod models;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use models::{
    FileFindings, Position, Report, ReportSummary, Requirement, ScanSettings, SecurityControl,
};

pub use error::ScanError;
pub use scanner::{scan_directory, scan_directory_with, FileScanner, Language};
