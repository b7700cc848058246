use crate::iter::IncrementIter;

/// The capability shared by every incrementer.
///
/// Each call to [`increment`](Incrementer::increment) consumes exactly one
/// state transition: the first call returns the initial value unchanged unless
/// the incrementer was built with `increment_on_first_call`, every later call
/// advances the value.
pub trait Incrementer {
    /// Consumes one transition and returns the resulting value.
    fn increment(&mut self) -> String;

    /// Returns the current value without changing any state.
    fn current_value(&self) -> String;

    /// Number of `increment` calls performed so far.
    fn count(&self) -> usize;

    /// Returns an unbounded iterator of successive values.
    ///
    /// Every item consumes one `increment` call.
    fn iter(&mut self) -> IncrementIter<'_, Self>
    where
        Self: Sized,
    {
        IncrementIter::new(self)
    }
}

/// Decoration wrapped around an incremented value by [`increment_with`].
///
/// The result is `prefix + prefix_separator + value + suffix_separator + suffix + extension`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affixes<'a> {
    pub prefix: &'a str,
    pub prefix_separator: &'a str,
    pub suffix_separator: &'a str,
    pub suffix: &'a str,
    pub extension: &'a str,
}

/// Where [`add_incremented_sequence_to_items`] places the value relative to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// Increments once and wraps the value in `affixes`.
pub fn increment_with<I: Incrementer>(incrementer: &mut I, affixes: &Affixes<'_>) -> String {
    let value = incrementer.increment();
    let mut out = String::with_capacity(
        affixes.prefix.len()
            + affixes.prefix_separator.len()
            + value.len()
            + affixes.suffix_separator.len()
            + affixes.suffix.len()
            + affixes.extension.len(),
    );
    out.push_str(affixes.prefix);
    out.push_str(affixes.prefix_separator);
    out.push_str(&value);
    out.push_str(affixes.suffix_separator);
    out.push_str(affixes.suffix);
    out.push_str(affixes.extension);
    out
}

/// Calls `increment` exactly `n` times and collects the results in call order.
pub fn incremented_list<I: Incrementer>(incrementer: &mut I, n: usize) -> Vec<String> {
    incrementer.iter().take(n).collect()
}

/// Joins one freshly incremented value to each item, before or after it.
///
/// Consumes one increment per item, in item order.
pub fn add_incremented_sequence_to_items<I, S>(
    incrementer: &mut I,
    items: &[S],
    separator: &str,
    position: Position,
) -> Vec<String>
where
    I: Incrementer,
    S: AsRef<str>,
{
    items
        .iter()
        .map(|item| {
            let value = incrementer.increment();
            match position {
                Position::Before => format!("{}{}{}", value, separator, item.as_ref()),
                Position::After => format!("{}{}{}", item.as_ref(), separator, value),
            }
        })
        .collect()
}
