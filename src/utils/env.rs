//! Environment variable management
//!
//! Loads `.env` and reads the scan defaults that can be set from the environment.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::models::ScanSettings;
use crate::scanner::Language;

/// Report output path override
pub const OUTPUT_ENV_VAR: &str = "SECDOC_OUTPUT";

/// Comma separated list of enabled languages, e.g. `go,python`
pub const LANGS_ENV_VAR: &str = "SECDOC_LANGS";

/// Load environment variables from .env file
///
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Read a variable, treating unset and blank the same way
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Output path from SECDOC_OUTPUT, if set
pub fn get_output_path() -> Option<PathBuf> {
    non_empty_var(OUTPUT_ENV_VAR).map(PathBuf::from)
}

/// Languages from SECDOC_LANGS, if set
///
/// # Errors
/// Returns error if the variable names an unsupported language
pub fn get_languages() -> Result<Option<Vec<Language>>> {
    non_empty_var(LANGS_ENV_VAR)
        .map(|list| Language::parse_list(&list))
        .transpose()
        .with_context(|| format!("{} is invalid", LANGS_ENV_VAR))
}

/// Build scan settings from defaults overlaid with the environment
pub fn settings_from_env() -> Result<ScanSettings> {
    let mut settings = ScanSettings::default();

    if let Some(output) = get_output_path() {
        settings = settings.with_output_path(output);
    }
    if let Some(languages) = get_languages()? {
        settings = settings.with_languages(languages);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var(OUTPUT_ENV_VAR);
        env::remove_var(LANGS_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_settings_default_without_env() {
        clear();
        let settings = settings_from_env().unwrap();
        assert_eq!(settings, ScanSettings::default());
    }

    #[test]
    #[serial]
    fn test_output_path_from_env() {
        clear();
        env::set_var(OUTPUT_ENV_VAR, "audit/controls.json");

        let settings = settings_from_env().unwrap();
        assert_eq!(settings.output_path, PathBuf::from("audit/controls.json"));
        clear();
    }

    #[test]
    #[serial]
    fn test_blank_output_path_is_ignored() {
        clear();
        env::set_var(OUTPUT_ENV_VAR, "   ");

        assert!(get_output_path().is_none());
        clear();
    }

    #[test]
    #[serial]
    fn test_languages_from_env() {
        clear();
        env::set_var(LANGS_ENV_VAR, "go,python");

        let settings = settings_from_env().unwrap();
        assert_eq!(settings.languages, vec![Language::Go, Language::Python]);
        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_languages_from_env() {
        clear();
        env::set_var(LANGS_ENV_VAR, "go,fortran");

        let err = settings_from_env().unwrap_err();
        assert!(err.to_string().contains(LANGS_ENV_VAR));
        clear();
    }

    #[test]
    fn test_load_env_doesnt_fail_on_missing_file() {
        // Should not panic or error even if .env doesn't exist
        let result = load_env();
        assert!(result.is_ok());
    }
}
