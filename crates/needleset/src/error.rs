//! Error types for the needleset library
//!
//! Needleset uses a unified error type that wraps errors from its
//! components. Construction is the only fallible operation; scanning never
//! errors.

use thiserror::Error;

/// Main error type for needleset operations
#[derive(Error, Debug)]
pub enum NeedlesetError {
    /// Error from automaton construction
    #[error(transparent)]
    Automaton(#[from] needleset_ac::ACError),
}

/// Result type alias for needleset operations
pub type Result<T> = std::result::Result<T, NeedlesetError>;

// Re-export the component error type for users who need it
pub use needleset_ac::ACError;
