use crate::error::{ConfigurationError, Result};
use crate::incrementer::Incrementer;
use crate::state::{IncrementOptions, SequenceState};

/// Longest source the sequencer will enumerate (10! = 3 628 800 arrangements).
pub const MAX_PERMUTATION_SYMBOLS: usize = 10;

/// Walks every arrangement of a symbol sequence in lexicographic order, cyclically.
///
/// The full table is built once at construction, so a source of `k` distinct
/// symbols costs `k!` strings up front and each `increment` is O(1). The walk
/// starts at the rank of the source arrangement itself.
///
/// # Example
///
/// ```
/// use sequence_increment::{Incrementer, PermutationSequencer};
///
/// let mut perms = PermutationSequencer::new("BAC").unwrap();
/// assert_eq!(perms.increment(), "BAC");
/// assert_eq!(perms.increment(), "BCA");
/// assert_eq!(perms.permutations().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationSequencer {
    /// Sorted, distinct arrangements
    permutations: Vec<String>,

    /// Index of the arrangement most recently returned
    current_index: usize,

    state: SequenceState,
}

impl PermutationSequencer {
    pub fn new(initial: &str) -> Result<Self> {
        Self::with_options(initial, IncrementOptions::default())
    }

    /// Only `increment_on_first_call` applies; arrangements never grow.
    pub fn with_options(initial: &str, options: IncrementOptions) -> Result<Self> {
        let (permutations, current_index) = build_table(initial)?;
        Ok(Self {
            permutations,
            current_index,
            state: SequenceState::new(options),
        })
    }

    /// Discards the table and rebuilds it from a new source, keeping count and phase.
    pub fn reinit(&mut self, initial: &str) -> Result<()> {
        let (permutations, current_index) = build_table(initial)?;
        self.permutations = permutations;
        self.current_index = current_index;
        Ok(())
    }

    pub fn permutations(&self) -> &[String] {
        &self.permutations
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }
}

/// Enumerates, sorts and deduplicates every arrangement, and ranks `initial`.
fn build_table(initial: &str) -> Result<(Vec<String>, usize)> {
    let mut symbols: Vec<char> = initial.chars().collect();
    if symbols.is_empty() {
        return Err(ConfigurationError::EmptyInitialValue);
    }
    if symbols.len() > MAX_PERMUTATION_SYMBOLS {
        return Err(ConfigurationError::TooManySymbols {
            len: symbols.len(),
            max: MAX_PERMUTATION_SYMBOLS,
        });
    }

    let mut permutations = Vec::new();
    permute(&mut symbols, 0, &mut permutations);
    permutations.sort_unstable();
    permutations.dedup();

    // `initial` is one of its own arrangements, so the search always succeeds.
    let current_index = permutations
        .binary_search_by(|p| p.as_str().cmp(initial))
        .unwrap_or(0);

    tracing::debug!(
        source = initial,
        arrangements = permutations.len(),
        rank = current_index,
        "permutation table built"
    );
    Ok((permutations, current_index))
}

/// Swap-based backtracking: fix each candidate at `index`, recurse, swap back.
fn permute(symbols: &mut [char], index: usize, out: &mut Vec<String>) {
    if index + 1 >= symbols.len() {
        out.push(symbols.iter().collect());
        return;
    }
    for i in index..symbols.len() {
        symbols.swap(i, index);
        permute(symbols, index + 1, out);
        symbols.swap(i, index);
    }
}

impl Incrementer for PermutationSequencer {
    fn increment(&mut self) -> String {
        if self.state.begin_call() {
            self.current_index = (self.current_index + 1) % self.permutations.len();
        }
        self.current_value()
    }

    fn current_value(&self) -> String {
        self.permutations[self.current_index].clone()
    }

    fn count(&self) -> usize {
        self.state.count()
    }
}
