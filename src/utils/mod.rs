//! Utility functions for secdoc
//!
//! Provides environment variable handling and logging setup.

pub mod env;
pub mod logging;

pub use env::{load_env, settings_from_env};
pub use logging::init_logging;
