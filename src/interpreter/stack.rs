use crate::error::StackError;

/// A LIFO stack with an optional capacity ceiling.
///
/// Without a ceiling the stack grows on demand. With one, a push onto a full
/// stack fails with [`StackError::Overflow`] instead of growing.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items:    Vec<T>,
    capacity: Option<usize>,
}

impl<T: Copy> Stack<T> {
    /// Creates an empty stack.
    ///
    /// # Parameters
    /// - `capacity`: The maximum number of elements, or `None` for unbounded
    ///   growth.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        let items = capacity.map_or_else(Vec::new, |limit| Vec::with_capacity(limit.min(1024)));
        Self { items, capacity }
    }

    /// Pushes a value onto the stack.
    ///
    /// # Errors
    /// Returns `StackError::Overflow` if the stack already holds `capacity`
    /// elements.
    ///
    /// # Example
    /// ```
    /// use opcalc::{error::StackError, interpreter::stack::Stack};
    ///
    /// let mut stack = Stack::new(Some(1));
    /// assert!(stack.push(1.0).is_ok());
    /// assert_eq!(stack.push(2.0), Err(StackError::Overflow { capacity: 1 }));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if let Some(capacity) = self.capacity
           && self.items.len() >= capacity
        {
            return Err(StackError::Overflow { capacity });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// Returns `StackError::Underflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    /// Returns `StackError::Underflow` if the stack is empty.
    pub fn peek(&self) -> Result<T, StackError> {
        self.items.last().copied().ok_or(StackError::Underflow)
    }

    /// Returns the number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity ceiling, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
