//! Multi-pattern scanning over a prebuilt automaton
//!
//! The matcher owns an immutable [`ACAutomaton`] plus a reusable seen-set
//! scratch. All scan entry points share one inner loop: advance the
//! automaton one byte at a time and emit the current state's output set;
//! they differ only in the emission filter and in whether the scratch is
//! borrowed mutably or allocated per call.

use crate::error::Result;
use crate::seen_set::SparseSet;
use needleset_ac::{ACAutomaton, ROOT};

/// A reported match: pattern index plus inclusive end offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    /// Zero-based index of the pattern in the dictionary.
    pub pattern: u32,
    /// Zero-based offset, into the scanned haystack, of the LAST byte of
    /// the occurrence. A pattern of length L ending here spans haystack
    /// bytes `end - L + 1 ..= end`. This is not the start offset and not an
    /// exclusive end.
    pub end: u64,
}

/// Multi-pattern substring matcher over a fixed dictionary.
///
/// Built once from an ordered dictionary of byte patterns; each scan then
/// reports which patterns occur in a haystack in time linear in the
/// haystack length plus the number of hits, independent of dictionary size.
///
/// # Example
///
/// ```rust
/// use needleset::{Hit, Matcher};
///
/// let mut matcher = Matcher::new(["Man ", "n Of", "Of S"])?;
/// let hits = matcher.matches(b"The Man Of Steel");
/// assert_eq!(
///     hits,
///     vec![
///         Hit { pattern: 0, end: 7 },
///         Hit { pattern: 1, end: 9 },
///         Hit { pattern: 2, end: 11 },
///     ]
/// );
/// # Ok::<(), needleset::NeedlesetError>(())
/// ```
///
/// # Concurrency
///
/// `Matcher` is `Send + Sync`. Through a shared reference (for example an
/// `Arc<Matcher>`) any number of threads may call [`matches_all`],
/// [`matches_thread_safe`], and [`contains`] concurrently. [`matches`]
/// takes `&mut self` because it reuses scratch state across calls, so the
/// borrow checker keeps it out of concurrent use.
///
/// [`matches`]: Matcher::matches
/// [`matches_all`]: Matcher::matches_all
/// [`matches_thread_safe`]: Matcher::matches_thread_safe
/// [`contains`]: Matcher::contains
#[derive(Debug)]
pub struct Matcher {
    automaton: ACAutomaton,
    /// Per-pattern seen flags reused by `matches`; reset at the start of
    /// every call.
    seen: SparseSet,
}

impl Matcher {
    /// Build a matcher from a dictionary of byte patterns.
    ///
    /// Pattern indices are assigned by position in the dictionary.
    /// Duplicates are permitted and keep their own indices. An empty
    /// dictionary is legal; scans over it yield no hits.
    ///
    /// # Errors
    ///
    /// Construction fails on a zero-length pattern or when the trie would
    /// exhaust the `u32` node index space. See
    /// [`ACError`](crate::error::ACError).
    pub fn new<I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let automaton = ACAutomaton::build(patterns)?;
        let seen = SparseSet::new(automaton.pattern_count());
        Ok(Self { automaton, seen })
    }

    /// Scan `haystack`, reporting at most one hit per pattern: the
    /// earliest-ending occurrence of each.
    ///
    /// Hits are ordered by end offset; at equal offsets, longest pattern
    /// first (the state's own terminals before those inherited along the
    /// failure chain).
    ///
    /// Takes `&mut self`: the per-pattern seen flags are reused across
    /// calls on this matcher. Use [`matches_thread_safe`] when scanning
    /// from multiple threads over one shared matcher.
    ///
    /// [`matches_thread_safe`]: Matcher::matches_thread_safe
    pub fn matches(&mut self, haystack: &[u8]) -> Vec<Hit> {
        let Self { automaton, seen } = self;
        seen.clear();
        scan_first_per_pattern(automaton, seen, haystack)
    }

    /// Scan `haystack`, reporting every occurrence of every pattern.
    ///
    /// A pattern occurring N times produces N hits; duplicate dictionary
    /// entries each produce their own hits. Carries no cross-call state,
    /// so concurrent calls on a shared matcher are safe.
    ///
    /// ```rust
    /// use needleset::Matcher;
    ///
    /// let matcher = Matcher::new(["na"])?;
    /// let hits = matcher.matches_all(b"banana");
    /// assert_eq!(hits.len(), 2);
    /// # Ok::<(), needleset::NeedlesetError>(())
    /// ```
    pub fn matches_all(&self, haystack: &[u8]) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut state = ROOT;
        for (i, &byte) in haystack.iter().enumerate() {
            state = self.automaton.next_state(state, byte);
            for &pattern in self.automaton.outputs(state) {
                hits.push(Hit {
                    pattern,
                    end: i as u64,
                });
            }
        }
        hits
    }

    /// Identical result to [`matches`], without touching any state carried
    /// by the matcher: the seen flags are allocated per call.
    ///
    /// Safe to call concurrently from any number of threads over one
    /// shared matcher.
    ///
    /// [`matches`]: Matcher::matches
    pub fn matches_thread_safe(&self, haystack: &[u8]) -> Vec<Hit> {
        let mut seen = SparseSet::new(self.automaton.pattern_count());
        scan_first_per_pattern(&self.automaton, &mut seen, haystack)
    }

    /// Returns true if any pattern occurs in `haystack`.
    ///
    /// Short-circuits at the first hit. Safe to call concurrently.
    pub fn contains(&self, haystack: &[u8]) -> bool {
        let mut state = ROOT;
        for &byte in haystack {
            state = self.automaton.next_state(state, byte);
            if !self.automaton.outputs(state).is_empty() {
                return true;
            }
        }
        false
    }

    /// Number of patterns in the dictionary.
    pub fn pattern_count(&self) -> usize {
        self.automaton.pattern_count()
    }

    /// Number of automaton nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.automaton.node_count()
    }

    /// The underlying automaton, for structural audits.
    pub fn automaton(&self) -> &ACAutomaton {
        &self.automaton
    }
}

/// Shared inner loop for `matches` and `matches_thread_safe`: emit each
/// pattern's first hit only, tracked through `seen`.
fn scan_first_per_pattern(
    automaton: &ACAutomaton,
    seen: &mut SparseSet,
    haystack: &[u8],
) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut state = ROOT;
    for (i, &byte) in haystack.iter().enumerate() {
        // Once every pattern has been reported, no further hit can be emitted
        if seen.len() == seen.capacity() {
            break;
        }
        state = automaton.next_state(state, byte);
        for &pattern in automaton.outputs(state) {
            if seen.insert(pattern as usize) {
                hits.push(Hit {
                    pattern,
                    end: i as u64,
                });
            }
        }
    }
    hits
}
