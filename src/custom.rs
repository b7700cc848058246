use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::incrementer::Incrementer;
use crate::state::{IncrementOptions, SequenceState};

/// Odometer over a caller-supplied token alphabet.
///
/// The value is held as one alphabet index per position and rebuilt by
/// concatenating the addressed tokens, so tokens of different widths work as
/// long as the starting point is given as an index vector.
///
/// # Example
///
/// ```
/// use sequence_increment::{Alphabet, CustomAlphabetIncrement, IncrementOptions, Incrementer};
///
/// let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
/// let options = IncrementOptions::new().grow_on_overflow(true);
/// let mut inc = CustomAlphabetIncrement::from_value("C", alphabet, options).unwrap();
///
/// assert_eq!(inc.increment(), "C");
/// assert_eq!(inc.increment(), "AA");
/// assert_eq!(inc.increment(), "AB");
/// ```
#[derive(Debug, Clone)]
pub struct CustomAlphabetIncrement {
    alphabet: Alphabet,

    /// One alphabet index per position, most significant first
    positions: Vec<usize>,

    state: SequenceState,
}

impl CustomAlphabetIncrement {
    /// Starts at the first token of the alphabet with default options.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            positions: vec![0],
            state: SequenceState::new(IncrementOptions::default()),
        }
    }

    /// Starts at the single token `index` with default options.
    pub fn from_index(index: usize, alphabet: Alphabet) -> Result<Self> {
        Self::from_positions(vec![index], alphabet, IncrementOptions::default())
    }

    /// Starts at an explicit index vector. Works for any alphabet.
    pub fn from_positions(
        positions: Vec<usize>,
        alphabet: Alphabet,
        options: IncrementOptions,
    ) -> Result<Self> {
        alphabet.check_positions(&positions)?;
        tracing::trace!(?positions, tokens = alphabet.len(), "custom alphabet incrementer created");
        Ok(Self {
            alphabet,
            positions,
            state: SequenceState::new(options),
        })
    }

    /// Starts at a value decoded from a string.
    ///
    /// Only valid for alphabets whose tokens share one width.
    pub fn from_value(value: &str, alphabet: Alphabet, options: IncrementOptions) -> Result<Self> {
        let positions = alphabet.decode(value)?;
        Self::from_positions(positions, alphabet, options)
    }

    /// Replaces the current value with a decoded string, keeping count and phase.
    pub fn reinit_value(&mut self, value: &str) -> Result<()> {
        self.positions = self.alphabet.decode(value)?;
        Ok(())
    }

    /// Replaces the current value with an index vector, keeping count and phase.
    pub fn reinit_positions(&mut self, positions: Vec<usize>) -> Result<()> {
        self.alphabet.check_positions(&positions)?;
        self.positions = positions;
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    fn advance(&mut self) {
        let last = self.alphabet.len() - 1;
        for position in self.positions.iter_mut().rev() {
            if *position == last {
                *position = 0;
            } else {
                *position += 1;
                return;
            }
        }

        if self.state.grow_on_overflow() {
            self.positions.insert(0, 0);
            tracing::debug!(len = self.positions.len(), "sequence grew on overflow");
        } else {
            tracing::trace!(len = self.positions.len(), "sequence wrapped around");
        }
    }
}

impl Incrementer for CustomAlphabetIncrement {
    fn increment(&mut self) -> String {
        if self.state.begin_call() {
            self.advance();
        }
        self.current_value()
    }

    fn current_value(&self) -> String {
        self.alphabet.encode(&self.positions)
    }

    fn count(&self) -> usize {
        self.state.count()
    }
}
