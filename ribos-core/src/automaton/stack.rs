/// LIFO store of stack symbols owned by a single simulation.
///
/// Symbols are kept bottom first. [`push_sequence`](Stack::push_sequence)
/// appends a sequence in order, so its first element ends up lowest and its
/// last element becomes the top, and [`to_sequence`](Stack::to_sequence)
/// reads the stack back bottom-to-top. Symbols pushed one after another in
/// separate transitions therefore read out in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<S> {
    items: Vec<S>,
}

impl<S: Clone> Stack<S> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A stack holding only the bottom marker.
    pub fn with_bottom(bottom: S) -> Self {
        Self {
            items: vec![bottom],
        }
    }

    /// Pushes `symbols` in order; the last one becomes the top. An empty slice is a no-op.
    pub fn push_sequence(&mut self, symbols: &[S]) {
        self.items.extend_from_slice(symbols);
    }

    /// Removes and returns the top, or `None` when the stack is empty.
    pub fn pop_top(&mut self) -> Option<S> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&S> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Contents from bottom to top.
    pub fn to_sequence(&self) -> Vec<S> {
        self.items.clone()
    }

    pub fn into_sequence(self) -> Vec<S> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<char> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_with_bottom() {
        let stack = Stack::with_bottom('Z');
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&'Z'));
    }

    #[test]
    fn test_push_sequence_last_symbol_on_top() {
        let mut stack = Stack::with_bottom('Z');
        stack.push_sequence(&['M', 'Z']);
        assert_eq!(stack.peek(), Some(&'Z'));
        assert_eq!(stack.to_sequence(), vec!['Z', 'M', 'Z']);
    }

    #[test]
    fn test_push_empty_sequence_is_noop() {
        let mut stack = Stack::with_bottom('Z');
        stack.push_sequence(&[]);
        assert_eq!(stack.to_sequence(), vec!['Z']);
    }

    #[test]
    fn test_pop_top_until_empty() {
        let mut stack = Stack::with_bottom('Z');
        stack.push_sequence(&['A']);
        assert_eq!(stack.pop_top(), Some('A'));
        assert_eq!(stack.pop_top(), Some('Z'));
        assert_eq!(stack.pop_top(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_successive_pushes_read_in_production_order() {
        // Mimics a translator replacing the marker with `[residue, marker]` each step.
        let mut stack = Stack::with_bottom('Z');
        for residue in ['M', 'F', 'L'] {
            stack.pop_top();
            stack.push_sequence(&[residue, 'Z']);
        }
        stack.pop_top();
        assert_eq!(stack.into_sequence(), vec!['M', 'F', 'L']);
    }
}
