//! Needleset - Fast Multi-Pattern Substring Matching
//!
//! Needleset answers one question quickly: given a fixed dictionary of byte
//! patterns, which of them occur in this haystack? It replaces a loop of
//! per-pattern containment checks (or a compiled alternation regex) with a
//! single Aho-Corasick automaton pass that runs in time linear in the
//! haystack length plus the number of hits, independent of dictionary size.
//! Typical uses: user-agent classification, keyword scanning in payloads,
//! multi-needle text filtering.
//!
//! # Quick Start
//!
//! ```rust
//! use needleset::Matcher;
//!
//! let mut matcher = Matcher::new(["Mozilla", "Mac", "Safari"])?;
//!
//! // First hit per pattern, ordered by end offset
//! let hits = matcher.matches(b"Mozilla/5.0 (Macintosh) Safari/537.36");
//! assert_eq!(hits.len(), 3);
//!
//! // Every occurrence of every pattern
//! let all = matcher.matches_all(b"Mac Mac Mac");
//! assert_eq!(all.len(), 3);
//!
//! // Cheap yes/no
//! assert!(matcher.contains(b"something Safari something"));
//! # Ok::<(), needleset::NeedlesetError>(())
//! ```
//!
//! # Key Features
//!
//! - **One pass, many needles**: O(haystack + hits) scanning regardless of
//!   how many patterns the dictionary holds
//! - **Bit-exact over bytes**: no case folding, no Unicode awareness;
//!   embedded NUL bytes are ordinary bytes
//! - **Inclusive end offsets**: each hit reports the pattern index and the
//!   offset of the last matched byte
//! - **Concurrent scanning**: share one matcher behind an `Arc` and scan
//!   from any number of threads with [`Matcher::matches_thread_safe`],
//!   [`Matcher::matches_all`], and [`Matcher::contains`]
//!
//! # Architecture
//!
//! ```text
//! dictionary ──> ACAutomaton (needleset-ac)
//!                  trie + failure links + precomputed output sets
//!                       │
//!                       ▼
//!                Matcher (this crate)
//!                  matches / matches_all / matches_thread_safe / contains
//! ```
//!
//! Construction happens once; the automaton is immutable afterwards.
//! Scanning borrows it read-only, so the only mutable state anywhere is
//! the `matches` scratch, which is why that one entry point takes
//! `&mut self`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for needleset operations
pub mod error;

mod matcher;
mod seen_set;

/// Main error type and result alias
pub use crate::error::{ACError, NeedlesetError, Result};

/// The matcher and its hit type
pub use crate::matcher::{Hit, Matcher};

/// Automaton internals, re-exported for structural audits
pub use needleset_ac::{
    validate_ac_reachability, validate_ac_structure, validate_pattern_references, ACAutomaton,
    ACStats, ACValidationResult,
};

// Version information
/// Library version string
pub const NEEDLESET_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library major version
pub const NEEDLESET_VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Library minor version
pub const NEEDLESET_VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Library patch version
pub const NEEDLESET_VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // Verify version components parse as valid numbers
        assert!(NEEDLESET_VERSION_MAJOR.parse::<u32>().is_ok());
        assert!(NEEDLESET_VERSION_MINOR.parse::<u32>().is_ok());
        assert!(NEEDLESET_VERSION_PATCH.parse::<u32>().is_ok());

        // Verify full version matches format
        let expected = format!(
            "{}.{}.{}",
            NEEDLESET_VERSION_MAJOR, NEEDLESET_VERSION_MINOR, NEEDLESET_VERSION_PATCH
        );
        assert_eq!(NEEDLESET_VERSION, expected);
    }
}
