//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `From`
//! so a configuration problem surfaces unchanged from any stage.

use thiserror::Error;

/// Errors raised by `ct-core`, chiefly configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `ct-core`.
pub type CoreResult<T> = Result<T, CoreError>;
