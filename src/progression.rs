//! Arithmetic-progression detection over integer collections.

/// Summary of a collection examined by [`incremented`].
///
/// `step` is zero whenever the collection is not a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListInfos {
    incremented: bool,
    sorted: bool,
    first_value: i64,
    last_value: i64,
    step: u64,
}

impl ListInfos {
    pub fn incremented(sorted: bool, first_value: i64, last_value: i64, step: u64) -> Self {
        Self {
            incremented: true,
            sorted,
            first_value,
            last_value,
            step,
        }
    }

    pub fn not_incremented(sorted: bool, first_value: i64, last_value: i64) -> Self {
        Self {
            incremented: false,
            sorted,
            first_value,
            last_value,
            step: 0,
        }
    }

    pub fn is_incremented(&self) -> bool {
        self.incremented
    }

    /// Whether the input was weakly ascending in its original order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Smallest value.
    pub fn first_value(&self) -> i64 {
        self.first_value
    }

    /// Largest value.
    pub fn last_value(&self) -> i64 {
        self.last_value
    }

    pub fn step(&self) -> u64 {
        self.step
    }
}

/// Decides whether `values` form a uniform-step progression once sorted.
///
/// Returns `None` for fewer than two values. Duplicates always break the
/// progression. Ordering is reported against the original order, independently
/// of the progression verdict.
pub fn incremented(values: &[i64]) -> Option<ListInfos> {
    if values.len() < 2 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    let ordered = is_weakly_ordered(values);

    if sorted.len() != values.len() {
        return Some(ListInfos::not_incremented(ordered, first, last));
    }

    // Widened so extreme ranges cannot overflow.
    let span = i128::from(last) - i128::from(first);
    let step = span / (sorted.len() as i128 - 1);

    let uniform = sorted
        .windows(2)
        .all(|pair| i128::from(pair[1]) - i128::from(pair[0]) == step);

    if uniform {
        Some(ListInfos::incremented(ordered, first, last, step as u64))
    } else {
        Some(ListInfos::not_incremented(ordered, first, last))
    }
}

/// True if no element is strictly greater than its successor. Plateaus are allowed.
pub fn is_weakly_ordered<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
