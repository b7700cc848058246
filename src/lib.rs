//! # Sequence Increment - Odometer-Style Value Generators
//!
//! Counters that advance a symbol sequence one step at a time, carrying from the
//! least significant position like an odometer:
//!
//! - [`FixedAlphabetIncrement`] steps digits and ASCII letters (`"A9"` -> `"B0"`),
//!   each position carrying within its own class.
//! - [`CustomAlphabetIncrement`] steps over any ordered list of tokens, including
//!   tokens of different widths.
//! - [`PermutationSequencer`] cycles through every arrangement of a fixed symbol set
//!   in lexicographic order.
//!
//! All three implement [`Incrementer`]. By default the first call returns the
//! initial value as-is and later calls advance it; overflow either wraps to the
//! smallest value of the same length or grows the sequence by one position.
//!
//! The [`progression`] module classifies integer collections as uniform-step
//! arithmetic progressions.
//!
//! ## Example
//!
//! ```
//! use sequence_increment::{FixedAlphabetIncrement, IncrementOptions, Incrementer};
//!
//! let options = IncrementOptions::new().grow_on_overflow(true);
//! let mut inc = FixedAlphabetIncrement::with_options("Y", options).unwrap();
//!
//! let labels: Vec<String> = inc.iter().take(4).collect();
//! assert_eq!(labels, vec!["Y", "Z", "AA", "AB"]);
//! ```
//!
//! Incrementers are plain mutable values meant for a single caller; they do no
//! locking.

mod alphabet;
mod custom;
mod error;
mod fixed;
mod incrementer;
mod iter;
mod permutation;
pub mod progression;
mod state;
mod symbol;


pub use alphabet::Alphabet;
pub use custom::CustomAlphabetIncrement;
pub use error::{ConfigurationError, Result};
pub use fixed::FixedAlphabetIncrement;
pub use incrementer::{
    add_incremented_sequence_to_items, increment_with, incremented_list, Affixes, Incrementer,
    Position,
};
pub use iter::IncrementIter;
pub use permutation::{PermutationSequencer, MAX_PERMUTATION_SYMBOLS};
pub use progression::ListInfos;
pub use state::IncrementOptions;
pub use symbol::SymbolClass;
