/// Options shared by every incrementer.
///
/// Both flags default to `false`: the first call returns the initial value
/// unchanged, and overflow wraps back to the smallest value of the same length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncrementOptions {
    /// Extend the sequence by one leading symbol when carry leaves the most
    /// significant position.
    pub grow_on_overflow: bool,
    /// Advance on the very first call instead of returning the initial value.
    pub increment_on_first_call: bool,
}

impl IncrementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grow_on_overflow(mut self, grow: bool) -> Self {
        self.grow_on_overflow = grow;
        self
    }

    pub fn increment_on_first_call(mut self, advance: bool) -> Self {
        self.increment_on_first_call = advance;
        self
    }
}

/// Whether the next call hands back the stored value or advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    AwaitingFirstValue,
    Advancing,
}

/// Call counter and first-call state embedded in every incrementer.
#[derive(Debug, Clone)]
pub(crate) struct SequenceState {
    count: usize,
    phase: Phase,
    grow_on_overflow: bool,
}

impl SequenceState {
    pub(crate) fn new(options: IncrementOptions) -> Self {
        Self {
            count: 0,
            phase: if options.increment_on_first_call {
                Phase::Advancing
            } else {
                Phase::AwaitingFirstValue
            },
            grow_on_overflow: options.grow_on_overflow,
        }
    }

    /// Records one call and reports whether the value must advance.
    ///
    /// The phase only ever moves from `AwaitingFirstValue` to `Advancing`.
    pub(crate) fn begin_call(&mut self) -> bool {
        self.count += 1;
        match self.phase {
            Phase::AwaitingFirstValue => {
                self.phase = Phase::Advancing;
                false
            }
            Phase::Advancing => true,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn grow_on_overflow(&self) -> bool {
        self.grow_on_overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes_through() {
        let mut state = SequenceState::new(IncrementOptions::default());
        assert_eq!(state.phase(), Phase::AwaitingFirstValue);
        assert!(!state.begin_call());
        assert!(state.begin_call());
        assert!(state.begin_call());
        assert_eq!(state.count(), 3);
    }

    #[test]
    fn test_increment_on_first_call_starts_advancing() {
        let mut state = SequenceState::new(IncrementOptions::new().increment_on_first_call(true));
        assert_eq!(state.phase(), Phase::Advancing);
        assert!(state.begin_call());
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn test_builder_sets_flags() {
        let options = IncrementOptions::new().grow_on_overflow(true);
        assert!(options.grow_on_overflow);
        assert!(!options.increment_on_first_call);
        assert!(SequenceState::new(options).grow_on_overflow());
    }
}
