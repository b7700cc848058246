use crate::incrementer::Incrementer;

/// Iterator that drives an incrementer, yielding one value per `increment` call.
///
/// It never ends on its own; bound it with `take` or similar.
pub struct IncrementIter<'a, I> {
    incrementer: &'a mut I,
}

impl<'a, I: Incrementer> IncrementIter<'a, I> {
    pub(crate) fn new(incrementer: &'a mut I) -> Self {
        Self { incrementer }
    }
}

impl<'a, I: Incrementer> Iterator for IncrementIter<'a, I> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.incrementer.increment())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
