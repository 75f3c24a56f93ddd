//! Scanner constants and configuration
//!
//! Centralized tag names and defaults used across scanner modules

/// Identifying tag of a security-control block
pub const TAG_SECURITY_CONTROL: &str = "@security-control";

/// Identifying tag of a requirement block
pub const TAG_REQUIREMENT: &str = "@requirement";

pub const TAG_DESCRIPTION: &str = "@description:";
pub const TAG_REFERENCES: &str = "@references:";
pub const TAG_VERIFICATION: &str = "@verification:";
pub const TAG_STAKEHOLDER: &str = "@stakeholder:";

/// Report file name used when neither the CLI nor the environment names one
pub const DEFAULT_OUTPUT_FILE: &str = "security-report.json";

/// Tree-sitter node kind shared by every supported grammar for comments
pub const COMMENT_NODE_KIND: &str = "comment";

/// Go file header node kind
pub const GO_PACKAGE_CLAUSE: &str = "package_clause";

/// Go import block node kind; imports precede every other declaration
pub const GO_IMPORT_DECLARATION: &str = "import_declaration";

/// Node kinds allowed directly under a Go `source_file`
pub const GO_TOP_LEVEL_KINDS: &[&str] = &[
    GO_PACKAGE_CLAUSE,
    GO_IMPORT_DECLARATION,
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
    COMMENT_NODE_KIND,
];
