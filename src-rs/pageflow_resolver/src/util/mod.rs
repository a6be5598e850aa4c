//! Utilities shared by the resolvers.

/// The chain of step imports currently being expanded.
///
/// Used to detect an import that leads back to a step already on the chain.
#[derive(Debug, Clone, Default)]
pub struct ImportStack {
    import_names: Vec<String>,
}

impl ImportStack {
    /// Creates a new empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            import_names: vec![],
        }
    }

    /// Pushes an import name onto the top of the stack.
    pub fn push(&mut self, import_name: impl Into<String>) {
        self.import_names.push(import_name.into());
    }

    /// Removes and returns the top import name from the stack.
    pub fn pop(&mut self) -> Option<String> {
        self.import_names.pop()
    }

    /// Returns whether `import_name` is already being expanded.
    #[must_use]
    pub fn contains(&self, import_name: &str) -> bool {
        self.import_names.iter().any(|name| name == import_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pushed_names() {
        let mut stack = ImportStack::new();
        stack.push("one");
        stack.push("two");

        assert!(stack.contains("one"));
        assert!(stack.contains("two"));
        assert!(!stack.contains("three"));
    }

    #[test]
    fn popped_names_are_forgotten() {
        let mut stack = ImportStack::new();
        stack.push("one");

        assert!(stack.contains("one"));
        assert_eq!(stack.pop(), Some("one".to_string()));
        assert!(!stack.contains("one"));
    }
}
