// Secdoc data models

pub mod position;
pub mod control;
pub mod requirement;
pub mod report;
pub mod settings;

// Re-exports for convenience
pub use position::Position;
pub use control::SecurityControl;
pub use requirement::Requirement;
pub use report::{FileFindings, Report, ReportSummary};
pub use settings::ScanSettings;
