//! Error types for incrementer construction.
//!
//! Incrementers never fail once built: every problem with an initial value or
//! an alphabet is reported eagerly by the constructor as a `ConfigurationError`.

use thiserror::Error;

/// Errors raised while configuring an incrementer or its alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The initial value is empty or only whitespace.
    #[error("initial value must not be empty")]
    EmptyInitialValue,

    /// A character of the initial value belongs to no built-in symbol class.
    #[error("unsupported symbol '{symbol}' at position {position}: expected an ASCII digit or letter")]
    UnsupportedSymbol { symbol: char, position: usize },

    /// The custom alphabet has no tokens.
    #[error("alphabet must contain at least one token")]
    EmptyAlphabet,

    /// A custom alphabet token is the empty string.
    #[error("alphabet token at index {index} is empty")]
    EmptyToken { index: usize },

    /// The same token appears twice in a custom alphabet.
    #[error("duplicate alphabet token '{token}'")]
    DuplicateToken { token: String },

    /// A string initial value was given for an alphabet whose tokens differ in width.
    ///
    /// The value cannot be split unambiguously; build from an index vector instead.
    #[error("alphabet tokens have uneven widths, initial value cannot be decoded")]
    UnevenTokenWidth,

    /// The initial value length is not a multiple of the token width.
    #[error("initial value '{value}' is not a multiple of token width {width}")]
    MisalignedValue { value: String, width: usize },

    /// A chunk of the initial value is not an alphabet token.
    #[error("unknown token '{token}' at byte offset {offset}")]
    UnknownToken { token: String, offset: usize },

    /// An index vector entry points past the end of the alphabet.
    #[error("index {index} is out of range for an alphabet of {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },

    /// An index vector with no positions.
    #[error("index vector must contain at least one position")]
    EmptyPositions,

    /// A permutation source too long to enumerate.
    #[error("cannot enumerate permutations of {len} symbols (maximum is {max})")]
    TooManySymbols { len: usize, max: usize },
}

/// A specialized `Result` type for incrementer construction.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ConfigurationError::UnknownToken {
            token: "zz".to_string(),
            offset: 4,
        };
        assert_eq!(err.to_string(), "unknown token 'zz' at byte offset 4");

        let err = ConfigurationError::UnsupportedSymbol {
            symbol: '-',
            position: 2,
        };
        assert!(err.to_string().contains("'-' at position 2"));
    }
}
