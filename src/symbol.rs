/// Built-in symbol classes of a fixed-alphabet sequence.
///
/// Each class is a contiguous ASCII range with its own carry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    /// `'0'..='9'`
    Digit,
    /// `'a'..='z'`
    Lower,
    /// `'A'..='Z'`
    Upper,
}

impl SymbolClass {
    /// Classifies a single character, or `None` if it is not an ASCII digit or letter.
    pub fn of(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(SymbolClass::Digit),
            'a'..='z' => Some(SymbolClass::Lower),
            'A'..='Z' => Some(SymbolClass::Upper),
            _ => None,
        }
    }

    /// Returns the class shared by every character of `s`, if there is exactly one.
    pub fn of_all(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let class = Self::of(chars.next()?)?;
        chars
            .all(|c| Self::of(c) == Some(class))
            .then_some(class)
    }

    pub fn start(self) -> char {
        match self {
            SymbolClass::Digit => '0',
            SymbolClass::Lower => 'a',
            SymbolClass::Upper => 'A',
        }
    }

    pub fn end(self) -> char {
        match self {
            SymbolClass::Digit => '9',
            SymbolClass::Lower => 'z',
            SymbolClass::Upper => 'Z',
        }
    }

    /// The symbol prepended when a sequence of this class grows.
    ///
    /// Digits grow with `'1'` ("99" becomes "100"); letters with their start.
    pub fn new_leading(self) -> char {
        match self {
            SymbolClass::Digit => '1',
            SymbolClass::Lower | SymbolClass::Upper => self.start(),
        }
    }

    /// Number of symbols in the class.
    pub fn span(self) -> u8 {
        self.end() as u8 - self.start() as u8 + 1
    }
}

/// One position of a fixed-alphabet sequence, stored as an offset into its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Symbol {
    pub class: SymbolClass,
    pub offset: u8,
}

impl Symbol {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        let class = SymbolClass::of(c)?;
        Some(Self {
            class,
            offset: c as u8 - class.start() as u8,
        })
    }

    pub(crate) fn leading(class: SymbolClass) -> Self {
        Self {
            class,
            offset: class.new_leading() as u8 - class.start() as u8,
        }
    }

    pub(crate) fn to_char(self) -> char {
        (self.class.start() as u8 + self.offset) as char
    }

    /// Advances by one within the class. Returns `true` on carry (reset to start).
    pub(crate) fn advance(&mut self) -> bool {
        if self.offset + 1 == self.class.span() {
            self.offset = 0;
            true
        } else {
            self.offset += 1;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(SymbolClass::of('7'), Some(SymbolClass::Digit));
        assert_eq!(SymbolClass::of('q'), Some(SymbolClass::Lower));
        assert_eq!(SymbolClass::of('Q'), Some(SymbolClass::Upper));
        assert_eq!(SymbolClass::of('-'), None);
        assert_eq!(SymbolClass::of('é'), None);
    }

    #[test]
    fn test_unique_class() {
        assert_eq!(SymbolClass::of_all("0042"), Some(SymbolClass::Digit));
        assert_eq!(SymbolClass::of_all("ZZ"), Some(SymbolClass::Upper));
        assert_eq!(SymbolClass::of_all("a1B"), None);
        assert_eq!(SymbolClass::of_all(""), None);
    }

    #[test]
    fn test_symbol_carry() {
        let mut sym = Symbol::from_char('y').expect("lowercase letter");
        assert!(!sym.advance());
        assert_eq!(sym.to_char(), 'z');
        assert!(sym.advance());
        assert_eq!(sym.to_char(), 'a');
    }

    #[test]
    fn test_leading_symbols() {
        assert_eq!(Symbol::leading(SymbolClass::Digit).to_char(), '1');
        assert_eq!(Symbol::leading(SymbolClass::Upper).to_char(), 'A');
        assert_eq!(Symbol::leading(SymbolClass::Lower).to_char(), 'a');
        assert_eq!(SymbolClass::Lower.span(), 26);
        assert_eq!(SymbolClass::Digit.span(), 10);
    }
}
