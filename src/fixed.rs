use crate::error::{ConfigurationError, Result};
use crate::incrementer::Incrementer;
use crate::state::{IncrementOptions, SequenceState};
use crate::symbol::{Symbol, SymbolClass};

/// Odometer over the built-in digit and letter alphabets.
///
/// Every position carries by its own class, so mixed values such as `"a1B"`
/// are legal. Growth on overflow is only possible when the whole initial value
/// belongs to a single class, since that class decides the new leading symbol.
///
/// # Example
///
/// ```
/// use sequence_increment::{FixedAlphabetIncrement, IncrementOptions, Incrementer};
///
/// let options = IncrementOptions::new().grow_on_overflow(true);
/// let mut inc = FixedAlphabetIncrement::with_options("98", options).unwrap();
///
/// assert_eq!(inc.increment(), "98");
/// assert_eq!(inc.increment(), "99");
/// assert_eq!(inc.increment(), "100");
/// ```
#[derive(Debug, Clone)]
pub struct FixedAlphabetIncrement {
    symbols: Vec<Symbol>,
    unique_class: Option<SymbolClass>,
    state: SequenceState,
}

impl FixedAlphabetIncrement {
    /// Creates an incrementer with default options.
    pub fn new(first_value: &str) -> Result<Self> {
        Self::with_options(first_value, IncrementOptions::default())
    }

    pub fn with_options(first_value: &str, options: IncrementOptions) -> Result<Self> {
        let (symbols, unique_class) = parse(first_value)?;
        tracing::trace!(first_value, ?unique_class, "fixed alphabet incrementer created");
        Ok(Self {
            symbols,
            unique_class,
            state: SequenceState::new(options),
        })
    }

    /// Replaces the current value, keeping the call count and phase.
    pub fn reinit(&mut self, first_value: &str) -> Result<()> {
        let (symbols, unique_class) = parse(first_value)?;
        self.symbols = symbols;
        self.unique_class = unique_class;
        Ok(())
    }

    /// The class shared by every symbol of the initial value, if any.
    pub fn unique_class(&self) -> Option<SymbolClass> {
        self.unique_class
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn advance(&mut self) {
        for symbol in self.symbols.iter_mut().rev() {
            if !symbol.advance() {
                return;
            }
        }

        // Carry left the most significant position; every symbol is back at its start.
        match self.unique_class {
            Some(class) if self.state.grow_on_overflow() => {
                self.symbols.insert(0, Symbol::leading(class));
                tracing::debug!(len = self.symbols.len(), "sequence grew on overflow");
            }
            _ => tracing::trace!(len = self.symbols.len(), "sequence wrapped around"),
        }
    }
}

fn parse(first_value: &str) -> Result<(Vec<Symbol>, Option<SymbolClass>)> {
    if first_value.trim().is_empty() {
        return Err(ConfigurationError::EmptyInitialValue);
    }
    let symbols = first_value
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Symbol::from_char(symbol)
                .ok_or(ConfigurationError::UnsupportedSymbol { symbol, position })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((symbols, SymbolClass::of_all(first_value)))
}

impl Incrementer for FixedAlphabetIncrement {
    fn increment(&mut self) -> String {
        if self.state.begin_call() {
            self.advance();
        }
        self.current_value()
    }

    fn current_value(&self) -> String {
        self.symbols.iter().map(|s| s.to_char()).collect()
    }

    fn count(&self) -> usize {
        self.state.count()
    }
}
