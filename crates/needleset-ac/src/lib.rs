//! Aho-Corasick Automaton
//!
//! This module implements the construction of an Aho-Corasick automaton: a
//! keyword trie augmented with failure links and precomputed dictionary-suffix
//! output sets. The automaton is built once from a fixed dictionary of byte
//! patterns and is immutable afterwards; scanning is done by the `needleset`
//! crate on top of the accessors exposed here.
//!
//! # Design
//!
//! Nodes live in a single `Vec<Node>` and are referenced by `u32` index, with
//! node 0 reserved for the root. Each node carries:
//! - its byte transitions, stored with a state-specific encoding,
//! - a failure link to the longest proper suffix that is still a prefix of
//!   some pattern,
//! - the full, ordered set of pattern indices to emit when the node is
//!   visited (own terminals first, then terminals inherited along the
//!   failure chain).

use std::collections::{HashMap, VecDeque};
use std::fmt;

// Validation module for automaton structures
pub mod validation;

// Re-export validation types for convenience
pub use validation::{
    validate_ac_reachability, validate_ac_structure, validate_pattern_references, ACStats,
    ACValidationResult,
};

/// Error type for automaton construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ACError {
    /// Invalid pattern (e.g. zero-length)
    InvalidPattern(String),
    /// Node or pattern index space exhausted
    CapacityExceeded(String),
}

impl fmt::Display for ACError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ACError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            ACError::CapacityExceeded(msg) => write!(f, "Capacity exceeded: {}", msg),
        }
    }
}

impl std::error::Error for ACError {}

/// Index of the root node.
pub const ROOT: u32 = 0;

/// State encoding type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// No transitions (terminal state only)
    Empty = 0,
    /// Single transition - stored inline in the node (most states)
    One = 1,
    /// 2-8 transitions - byte-sorted sparse edge array
    Sparse = 2,
    /// 9+ transitions - dense 256-entry lookup table
    Dense = 3,
}

/// Per-node transition storage, selected by transition count.
#[derive(Debug)]
enum Transitions {
    Empty,
    One { byte: u8, target: u32 },
    /// Sorted by byte for early-exit linear search.
    Sparse(Box<[(u8, u32)]>),
    /// Indexed by byte. 0 means "no transition"; usable as the sentinel
    /// because no goto edge ever targets the root.
    Dense(Box<[u32; 256]>),
}

impl Transitions {
    #[inline]
    fn find(&self, byte: u8) -> Option<u32> {
        match self {
            Transitions::Empty => None,

            Transitions::One { byte: b, target } => {
                if *b == byte {
                    Some(*target)
                } else {
                    None
                }
            }

            Transitions::Sparse(edges) => {
                for &(b, target) in edges.iter() {
                    if b == byte {
                        return Some(target);
                    }
                    if b > byte {
                        return None;
                    }
                }
                None
            }

            Transitions::Dense(table) => {
                let target = table[byte as usize];
                if target != ROOT {
                    Some(target)
                } else {
                    None
                }
            }
        }
    }

    fn kind(&self) -> StateKind {
        match self {
            Transitions::Empty => StateKind::Empty,
            Transitions::One { .. } => StateKind::One,
            Transitions::Sparse(_) => StateKind::Sparse,
            Transitions::Dense(_) => StateKind::Dense,
        }
    }

    /// All (byte, target) edges, in ascending byte order.
    pub(crate) fn entries(&self) -> Vec<(u8, u32)> {
        match self {
            Transitions::Empty => Vec::new(),
            Transitions::One { byte, target } => vec![(*byte, *target)],
            Transitions::Sparse(edges) => edges.to_vec(),
            Transitions::Dense(table) => (0u16..256)
                .filter_map(|b| {
                    let target = table[b as usize];
                    (target != ROOT).then_some((b as u8, target))
                })
                .collect(),
        }
    }
}

/// A frozen automaton state.
#[derive(Debug)]
struct Node {
    transitions: Transitions,
    failure: u32,
    /// Pattern indices emitted when this node is visited: own terminals in
    /// dictionary order, then the failure target's outputs.
    outputs: Box<[u32]>,
}

/// Temporary state structure used during construction
struct BuilderState {
    transitions: HashMap<u8, u32>,
    failure: u32,
    /// Pattern indices that end exactly at this state.
    terminals: Vec<u32>,
    /// Full emission set, filled in during the failure-link pass.
    outputs: Vec<u32>,
}

impl BuilderState {
    fn new() -> Self {
        Self {
            transitions: HashMap::new(),
            failure: ROOT,
            terminals: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// Builder for the Aho-Corasick automaton
///
/// Uses temporary hash-map states during construction, then freezes them
/// into the state-kind encoded representation.
struct ACBuilder {
    states: Vec<BuilderState>,
    pattern_count: usize,
}

impl ACBuilder {
    fn new() -> Self {
        Self {
            states: vec![BuilderState::new()], // Root
            pattern_count: 0,
        }
    }

    /// Add a pattern to the trie.
    ///
    /// Zero-length patterns are rejected: they would register a terminal at
    /// the root and make every scan position a match.
    fn add_pattern(&mut self, pattern: &[u8]) -> Result<u32, ACError> {
        if self.pattern_count == u32::MAX as usize {
            return Err(ACError::CapacityExceeded(format!(
                "pattern index space exhausted at {} patterns",
                self.pattern_count
            )));
        }
        let pattern_id = self.pattern_count as u32;

        if pattern.is_empty() {
            return Err(ACError::InvalidPattern(format!(
                "empty pattern at index {}",
                pattern_id
            )));
        }

        // Build trie path
        let mut current = ROOT;
        for &byte in pattern {
            // Check if transition already exists
            if let Some(&next) = self.states[current as usize].transitions.get(&byte) {
                current = next;
            } else {
                if self.states.len() == u32::MAX as usize {
                    return Err(ACError::CapacityExceeded(format!(
                        "node index space exhausted at {} nodes",
                        self.states.len()
                    )));
                }
                let new_id = self.states.len() as u32;
                self.states.push(BuilderState::new());
                self.states[current as usize].transitions.insert(byte, new_id);
                current = new_id;
            }
        }

        self.states[current as usize].terminals.push(pattern_id);
        self.pattern_count += 1;

        Ok(pattern_id)
    }

    /// Compute failure links breadth-first and merge output sets.
    ///
    /// BFS finalizes shallower states before deeper ones, and a state's
    /// failure target is always strictly shallower, so the failure target's
    /// outputs are complete when the state is reached. A single
    /// `terminals ++ outputs(failure)` concatenation therefore yields the
    /// whole dictionary-suffix set, already in emission order.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        // Depth-1 states fail to root
        let root_children: Vec<u32> = self.states[ROOT as usize]
            .transitions
            .values()
            .copied()
            .collect();

        for child in root_children {
            let state = &mut self.states[child as usize];
            state.failure = ROOT;
            state.outputs = state.terminals.clone();
            queue.push_back(child);
        }

        while let Some(state_id) = queue.pop_front() {
            let transitions: Vec<(u8, u32)> = self.states[state_id as usize]
                .transitions
                .iter()
                .map(|(&byte, &next)| (byte, next))
                .collect();

            for (byte, next_state) in transitions {
                queue.push_back(next_state);

                // Follow failure links looking for a state with a transition
                // on this byte. The walk only visits states shallower than
                // next_state, so it can never land on next_state itself.
                let mut fail = self.states[state_id as usize].failure;
                let failure = loop {
                    if let Some(&target) = self.states[fail as usize].transitions.get(&byte) {
                        break target;
                    }
                    if fail == ROOT {
                        break ROOT;
                    }
                    fail = self.states[fail as usize].failure;
                };
                self.states[next_state as usize].failure = failure;

                let mut outputs = self.states[next_state as usize].terminals.clone();
                outputs.extend_from_slice(&self.states[failure as usize].outputs);
                self.states[next_state as usize].outputs = outputs;
            }
        }
    }

    /// Freeze builder states into the state-kind encoded representation.
    fn finish(self) -> ACAutomaton {
        let pattern_count = self.pattern_count;
        let nodes = self
            .states
            .into_iter()
            .map(|state| {
                let mut edges: Vec<(u8, u32)> = state.transitions.into_iter().collect();
                edges.sort_unstable_by_key(|&(byte, _)| byte);

                let transitions = match edges.len() {
                    0 => Transitions::Empty,
                    1 => Transitions::One {
                        byte: edges[0].0,
                        target: edges[0].1,
                    },
                    2..=8 => Transitions::Sparse(edges.into_boxed_slice()),
                    _ => {
                        let mut table = Box::new([ROOT; 256]);
                        for (byte, target) in edges {
                            table[byte as usize] = target;
                        }
                        Transitions::Dense(table)
                    }
                };

                Node {
                    transitions,
                    failure: state.failure,
                    outputs: state.outputs.into_boxed_slice(),
                }
            })
            .collect();

        ACAutomaton {
            nodes,
            pattern_count,
        }
    }
}

/// Immutable Aho-Corasick automaton over a fixed dictionary.
///
/// Built once with [`ACAutomaton::build`]; afterwards every accessor takes
/// `&self`, so any number of threads may scan over one shared automaton.
#[derive(Debug)]
pub struct ACAutomaton {
    nodes: Vec<Node>,
    pattern_count: usize,
}

impl ACAutomaton {
    /// Build the automaton from a dictionary of byte patterns.
    ///
    /// Pattern indices are assigned by position; duplicates each keep their
    /// own index. An empty dictionary is legal and produces a root-only
    /// automaton that never matches anything.
    ///
    /// # Errors
    ///
    /// [`ACError::InvalidPattern`] if any pattern is zero-length,
    /// [`ACError::CapacityExceeded`] if the trie outgrows the `u32` node
    /// index space.
    pub fn build<I>(patterns: I) -> Result<Self, ACError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut builder = ACBuilder::new();

        for pattern in patterns {
            builder.add_pattern(pattern.as_ref())?;
        }

        builder.build_failure_links();
        Ok(builder.finish())
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of patterns in the dictionary.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Goto transition from `state` on `byte`, if one exists.
    #[inline]
    pub fn find_transition(&self, state: u32, byte: u8) -> Option<u32> {
        self.nodes[state as usize].transitions.find(byte)
    }

    /// Advance one input byte: follow failure links until a state with a
    /// transition on `byte` is found, or stop at the root.
    #[inline]
    pub fn next_state(&self, state: u32, byte: u8) -> u32 {
        let mut current = state;
        loop {
            if let Some(next) = self.find_transition(current, byte) {
                return next;
            }
            if current == ROOT {
                return ROOT;
            }
            current = self.nodes[current as usize].failure;
        }
    }

    /// Pattern indices to emit when `state` is visited.
    ///
    /// Ordered: the state's own terminals in dictionary order, then the
    /// terminals inherited along the failure chain, nearest first.
    #[inline]
    pub fn outputs(&self, state: u32) -> &[u32] {
        &self.nodes[state as usize].outputs
    }

    /// Failure link of `state`. The root fails to itself.
    pub fn failure(&self, state: u32) -> u32 {
        self.nodes[state as usize].failure
    }

    /// Transition encoding chosen for `state`.
    pub fn state_kind(&self, state: u32) -> StateKind {
        self.nodes[state as usize].transitions.kind()
    }

    /// All goto edges of `state`, in ascending byte order.
    pub(crate) fn edges(&self, state: u32) -> Vec<(u8, u32)> {
        self.nodes[state as usize].transitions.entries()
    }
}
