use crate::error::{ConfigurationError, Result};
use ahash::AHashMap as HashMap;

/// An ordered cycle of distinct, non-empty tokens.
///
/// Tokens may differ in width (for example roman numerals `"i"`, `"ii"`,
/// `"iii"`). Values can only be decoded from a string when every token has
/// the same width; otherwise the split is ambiguous.
#[derive(Debug, Clone)]
pub struct Alphabet {
    tokens: Vec<String>,

    /// Maps each token to its index in `tokens`
    lookup: HashMap<String, usize>,

    /// Common byte width of all tokens, if uniform
    width: Option<usize>,
}

impl Alphabet {
    /// Builds an alphabet, rejecting empty input, empty tokens and duplicates.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet);
        }

        let mut lookup = HashMap::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(ConfigurationError::EmptyToken { index });
            }
            if lookup.insert(token.clone(), index).is_some() {
                return Err(ConfigurationError::DuplicateToken {
                    token: token.clone(),
                });
            }
        }

        let first_width = tokens[0].len();
        let width = tokens
            .iter()
            .all(|t| t.len() == first_width)
            .then_some(first_width);

        Ok(Self {
            tokens,
            lookup,
            width,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.lookup.get(token).copied()
    }

    /// Byte width shared by every token, or `None` for variable-width alphabets.
    pub fn uniform_width(&self) -> Option<usize> {
        self.width
    }

    /// Splits `value` into fixed-width chunks and maps each to its token index.
    pub fn decode(&self, value: &str) -> Result<Vec<usize>> {
        if value.is_empty() {
            return Err(ConfigurationError::EmptyInitialValue);
        }
        let width = self.width.ok_or(ConfigurationError::UnevenTokenWidth)?;
        if value.len() % width != 0 {
            return Err(ConfigurationError::MisalignedValue {
                value: value.to_string(),
                width,
            });
        }

        (0..value.len())
            .step_by(width)
            .map(|offset| {
                // A chunk that splits a multi-byte character cannot be a token.
                let chunk = value.get(offset..offset + width);
                chunk
                    .and_then(|c| self.index_of(c))
                    .ok_or_else(|| ConfigurationError::UnknownToken {
                        token: chunk.map_or_else(
                            || String::from_utf8_lossy(&value.as_bytes()[offset..offset + width])
                                .into_owned(),
                            str::to_string,
                        ),
                        offset,
                    })
            })
            .collect()
    }

    /// Checks that every index addresses a token.
    pub fn check_positions(&self, positions: &[usize]) -> Result<()> {
        if positions.is_empty() {
            return Err(ConfigurationError::EmptyPositions);
        }
        match positions.iter().find(|&&i| i >= self.tokens.len()) {
            Some(&index) => Err(ConfigurationError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            }),
            None => Ok(()),
        }
    }

    /// Concatenates the tokens addressed by `positions`.
    ///
    /// Positions must already be in range.
    pub fn encode(&self, positions: &[usize]) -> String {
        positions
            .iter()
            .map(|&i| self.tokens[i].as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_width() {
        let alphabet = Alphabet::new(["A1", "A2", "B1"]).unwrap();
        assert_eq!(alphabet.uniform_width(), Some(2));
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.index_of("B1"), Some(2));
        assert_eq!(alphabet.token(1), Some("A2"));
        assert_eq!(alphabet.token(3), None);

        let roman = Alphabet::new(["i", "ii", "iii"]).unwrap();
        assert_eq!(roman.uniform_width(), None);
    }

    #[test]
    fn test_rejects_malformed_alphabets() {
        assert_eq!(
            Alphabet::new(Vec::<String>::new()).unwrap_err(),
            ConfigurationError::EmptyAlphabet
        );
        assert_eq!(
            Alphabet::new(["a", "", "b"]).unwrap_err(),
            ConfigurationError::EmptyToken { index: 1 }
        );
        assert_eq!(
            Alphabet::new(["a", "b", "a"]).unwrap_err(),
            ConfigurationError::DuplicateToken {
                token: "a".to_string()
            }
        );
    }

    #[test]
    fn test_decode() {
        let alphabet = Alphabet::new(["A", "B", "C", "D"]).unwrap();
        assert_eq!(alphabet.decode("CAD").unwrap(), vec![2, 0, 3]);
        assert_eq!(
            alphabet.decode("CXD").unwrap_err(),
            ConfigurationError::UnknownToken {
                token: "X".to_string(),
                offset: 1
            }
        );
        assert_eq!(
            alphabet.decode("").unwrap_err(),
            ConfigurationError::EmptyInitialValue
        );
    }

    #[test]
    fn test_decode_requires_alignment() {
        let alphabet = Alphabet::new(["aa", "bb"]).unwrap();
        assert_eq!(alphabet.decode("aabb").unwrap(), vec![0, 1]);
        assert!(matches!(
            alphabet.decode("aab"),
            Err(ConfigurationError::MisalignedValue { width: 2, .. })
        ));

        let roman = Alphabet::new(["i", "ii"]).unwrap();
        assert_eq!(
            roman.decode("iii").unwrap_err(),
            ConfigurationError::UnevenTokenWidth
        );
    }

    #[test]
    fn test_encode_and_check_positions() {
        let roman = Alphabet::new(["i", "ii", "iii", "iv", "v", "vi"]).unwrap();
        assert_eq!(roman.encode(&[1, 4, 4]), "iivv");
        assert!(roman.check_positions(&[0, 5]).is_ok());
        assert_eq!(
            roman.check_positions(&[0, 6]).unwrap_err(),
            ConfigurationError::IndexOutOfRange { index: 6, len: 6 }
        );
        assert_eq!(
            roman.check_positions(&[]).unwrap_err(),
            ConfigurationError::EmptyPositions
        );
    }
}
