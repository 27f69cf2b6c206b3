//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CabError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `cab-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CabError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cab-core`.
pub type CabResult<T> = Result<T, CabError>;
