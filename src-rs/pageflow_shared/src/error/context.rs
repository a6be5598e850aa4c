use std::fmt;

use indexmap::IndexMap;

/// A single piece of location information attached to an error.
///
/// Errors raised deep inside the resolver know *what* went wrong but not
/// *where*. As an error travels outward, each enclosing component attaches
/// the piece of location information that only it knows: the statement
/// resolver knows the offending source fragment, the step loop knows the
/// step name, and the test resolver knows the test name.
///
/// # Examples
///
/// ```rust
/// use pageflow_shared::error::{Context, ContextKey};
///
/// let context = Context::StepName("log in".to_string());
///
/// assert_eq!(context.key(), ContextKey::StepName);
/// assert_eq!(context.value(), "log in");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// The name (path) of the test being resolved.
    TestName(String),
    /// The name of the step being resolved.
    StepName(String),
    /// The original source text of the statement being resolved.
    Content(String),
}

impl Context {
    /// Returns the key this context entry is stored under.
    #[must_use]
    pub const fn key(&self) -> ContextKey {
        match self {
            Self::TestName(_) => ContextKey::TestName,
            Self::StepName(_) => ContextKey::StepName,
            Self::Content(_) => ContextKey::Content,
        }
    }

    /// Returns the value of this context entry.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::TestName(value) | Self::StepName(value) | Self::Content(value) => value,
        }
    }

    /// Consumes the entry, returning its value.
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::TestName(value) | Self::StepName(value) | Self::Content(value) => value,
        }
    }

    fn from_entry(key: ContextKey, value: &str) -> Self {
        let value = value.to_string();
        match key {
            ContextKey::TestName => Self::TestName(value),
            ContextKey::StepName => Self::StepName(value),
            ContextKey::Content => Self::Content(value),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.value())
    }
}

/// The key of a [`Context`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    /// See [`Context::TestName`].
    TestName,
    /// See [`Context::StepName`].
    StepName,
    /// See [`Context::Content`].
    Content,
}

impl ContextKey {
    /// Returns the machine-readable name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestName => "test_name",
            Self::StepName => "step_name",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TestName => "test",
            Self::StepName => "step",
            Self::Content => "content",
        };
        f.write_str(label)
    }
}

/// The context bundle carried by an error.
///
/// Entries are kept in the order they were attached, which is innermost
/// first. Each key is stored at most once; attaching a key that is already
/// present leaves the existing entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext(IndexMap<ContextKey, String>);

impl ErrorContext {
    /// Creates an empty context bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a context entry unless its key is already present.
    pub fn apply(&mut self, context: Context) {
        let key = context.key();
        self.0.entry(key).or_insert_with(|| context.into_value());
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: ContextKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Returns whether no context has been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of attached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the attached entries, innermost first.
    pub fn iter(&self) -> impl Iterator<Item = Context> + '_ {
        self.0
            .iter()
            .map(|(key, value)| Context::from_entry(*key, value))
    }
}

impl FromIterator<Context> for ErrorContext {
    fn from_iter<I: IntoIterator<Item = Context>>(iter: I) -> Self {
        let mut context = Self::new();
        for entry in iter {
            context.apply(entry);
        }
        context
    }
}
