use std::path::PathBuf;

use crate::scanner::constants::DEFAULT_OUTPUT_FILE;
use crate::scanner::Language;

/// Settings for one scan invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Languages whose files are visited; everything else is skipped
    pub languages: Vec<Language>,
    /// Where the CLI writes the JSON report
    pub output_path: PathBuf,
    /// Print the report instead of writing `output_path`
    pub to_stdout: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            languages: vec![Language::Go],
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            to_stdout: false,
        }
    }
}

impl ScanSettings {
    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        if !languages.is_empty() {
            self.languages = languages;
        }
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn is_enabled(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}
