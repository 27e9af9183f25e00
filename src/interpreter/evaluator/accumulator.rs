/// Collects the characters of a numeric literal as they are read.
///
/// The literal is re-parsed on every append and the last successful parse is
/// kept, so the value always matches the longest valid prefix of the text read
/// so far: `1.2.3` reads as `1.2` and a lone `.` reads as `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberAccumulator {
    text:  String,
    value: f64,
}

impl NumberAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit or decimal point and refreshes the parsed value.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::evaluator::accumulator::NumberAccumulator;
    ///
    /// let mut acc = NumberAccumulator::new();
    /// for c in "12.5".chars() {
    ///     acc.push(c);
    /// }
    /// assert_eq!(acc.value(), 12.5);
    /// ```
    pub fn push(&mut self, c: char) {
        self.text.push(c);
        if let Ok(value) = self.text.parse::<f64>() {
            self.value = value;
        }
    }

    /// Returns `true` while no literal is being read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the value of the literal read so far.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Hands out the pending literal and resets the accumulator.
    ///
    /// # Returns
    /// - `Some(f64)`: The literal's value, if one was being read.
    /// - `None`: If the accumulator was empty.
    pub fn take(&mut self) -> Option<f64> {
        if self.text.is_empty() {
            return None;
        }
        let value = self.value;
        self.text.clear();
        self.value = 0.0;
        Some(value)
    }
}
