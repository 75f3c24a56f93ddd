//! Source language detection
//!
//! Maps file extensions to the grammars the comment extractor can parse.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ScanError;

/// Languages whose comments can be scanned for annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Go,
    Python,
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// File extensions (without the dot) owned by this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Go => &["go"],
            Language::Python => &["py"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx"],
        }
    }

    /// Detect language from file extension
    ///
    /// # Returns
    /// * `Some(language)` if the extension maps to a known language
    /// * `None` if the extension is not recognized
    pub fn detect(file_path: &Path) -> Option<Language> {
        let ext = file_path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|language| language.extensions().contains(&ext))
    }

    /// Block comments in this language conventionally prefix each line with `*`
    pub fn decorates_block_comments(&self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }

    /// Parse a comma separated list such as `go,python`
    pub fn parse_list(list: &str) -> Result<Vec<Language>, ScanError> {
        let mut languages = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let language: Language = name.parse()?;
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        Ok(languages)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(ScanError::UnknownLanguage(s.to_string())),
        }
    }
}
