//! Actions and assertions.
//!
//! A statement carries up to two resolvable components: an *identifier*
//! (the element the statement examines or acts upon) and a *value* (the data
//! the statement supplies or compares against). Which components a statement
//! carries is decided once, by its kind, rather than probed at runtime.

/// The shape of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// An action performed on an element, such as `click $".button"`.
    Interaction {
        /// The action verb (`click`, `submit`, `wait-for`)
        verb: String,
        /// The element acted upon
        identifier: String,
    },
    /// An action that enters a value into an element, such as
    /// `set $".input" to "value"`.
    Input {
        /// The element receiving the value
        identifier: String,
        /// The value entered
        value: String,
    },
    /// A pause, such as `wait 30`.
    Wait {
        /// The duration, which may itself be a reference
        duration: String,
    },
    /// An action without arguments, such as `reload`.
    NoArguments {
        /// The action verb (`reload`, `back`, `forward`)
        verb: String,
    },
}

/// A browser action within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    source: String,
    kind: ActionKind,
}

impl Action {
    /// Creates an action from its source text and parsed shape.
    pub fn new(source: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// Creates an interaction action.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageflow_model::Action;
    ///
    /// let action = Action::interaction("click $\".button\"", "click", "$\".button\"");
    /// assert_eq!(action.identifier(), Some("$\".button\""));
    /// assert_eq!(action.value(), None);
    /// ```
    pub fn interaction(
        source: impl Into<String>,
        verb: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self::new(
            source,
            ActionKind::Interaction {
                verb: verb.into(),
                identifier: identifier.into(),
            },
        )
    }

    /// Creates an input action.
    pub fn input(
        source: impl Into<String>,
        identifier: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            source,
            ActionKind::Input {
                identifier: identifier.into(),
                value: value.into(),
            },
        )
    }

    /// Creates a wait action.
    pub fn wait(source: impl Into<String>, duration: impl Into<String>) -> Self {
        Self::new(
            source,
            ActionKind::Wait {
                duration: duration.into(),
            },
        )
    }

    /// Creates an action that takes no arguments.
    pub fn no_arguments(source: impl Into<String>, verb: impl Into<String>) -> Self {
        Self::new(source, ActionKind::NoArguments { verb: verb.into() })
    }

    /// Returns the original source text of the action.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shape of the action.
    #[must_use]
    pub const fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Returns the identifier component, if this kind of action has one.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Interaction { identifier, .. } | ActionKind::Input { identifier, .. } => {
                Some(identifier)
            }
            ActionKind::Wait { .. } | ActionKind::NoArguments { .. } => None,
        }
    }

    /// Returns the value component, if this kind of action has one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Input { value, .. } => Some(value),
            ActionKind::Wait { duration } => Some(duration),
            ActionKind::Interaction { .. } | ActionKind::NoArguments { .. } => None,
        }
    }
}

/// The shape of an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionKind {
    /// `<identifier> exists` or `<identifier> not-exists`
    Exists {
        /// The examined element or property
        identifier: String,
        /// Whether this is the `not-exists` form
        negated: bool,
    },
    /// `<identifier> <operator> <value>`, such as `$".title" is "Home"`
    Comparison {
        /// The examined element or property
        identifier: String,
        /// The comparison operator (`is`, `is-not`, `includes`, ...)
        operator: String,
        /// The expected value
        value: String,
    },
}

/// An assertion within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    source: String,
    kind: AssertionKind,
}

impl Assertion {
    /// Creates an assertion from its source text and parsed shape.
    pub fn new(source: impl Into<String>, kind: AssertionKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// Creates an `exists` assertion.
    pub fn exists(source: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::new(
            source,
            AssertionKind::Exists {
                identifier: identifier.into(),
                negated: false,
            },
        )
    }

    /// Creates a `not-exists` assertion.
    pub fn not_exists(source: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::new(
            source,
            AssertionKind::Exists {
                identifier: identifier.into(),
                negated: true,
            },
        )
    }

    /// Creates a comparison assertion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageflow_model::Assertion;
    ///
    /// let assertion = Assertion::comparison("$page.title is \"Home\"", "$page.title", "is", "\"Home\"");
    /// assert_eq!(assertion.identifier(), "$page.title");
    /// assert_eq!(assertion.value(), Some("\"Home\""));
    /// ```
    pub fn comparison(
        source: impl Into<String>,
        identifier: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            source,
            AssertionKind::Comparison {
                identifier: identifier.into(),
                operator: operator.into(),
                value: value.into(),
            },
        )
    }

    /// Returns the original source text of the assertion.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the shape of the assertion.
    #[must_use]
    pub const fn kind(&self) -> &AssertionKind {
        &self.kind
    }

    /// Returns the identifier component. Every assertion has one.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match &self.kind {
            AssertionKind::Exists { identifier, .. }
            | AssertionKind::Comparison { identifier, .. } => identifier,
        }
    }

    /// Returns the value component, if this kind of assertion has one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            AssertionKind::Comparison { value, .. } => Some(value),
            AssertionKind::Exists { .. } => None,
        }
    }
}

/// A statement whose components have been replaced by reference-free values.
///
/// The original statement is kept so that its source text and its nature
/// (action or assertion) survive resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatement {
    original: Box<Statement>,
    identifier: Option<String>,
    value: Option<String>,
}

impl ResolvedStatement {
    /// Wraps `original` with its final identifier and value components.
    #[must_use]
    pub fn new(original: Statement, identifier: Option<String>, value: Option<String>) -> Self {
        Self {
            original: Box::new(original),
            identifier,
            value,
        }
    }

    /// Returns the statement this one was resolved from.
    #[must_use]
    pub fn original(&self) -> &Statement {
        &self.original
    }

    /// Returns the resolved identifier component.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Returns the resolved value component.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// An action or an assertion, possibly already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// An unresolved action
    Action(Action),
    /// An unresolved assertion
    Assertion(Assertion),
    /// A statement produced by reference resolution
    Resolved(ResolvedStatement),
}

impl Statement {
    /// Returns the original source text of the statement.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Action(action) => action.source(),
            Self::Assertion(assertion) => assertion.source(),
            Self::Resolved(resolved) => resolved.original().source(),
        }
    }

    /// Returns the identifier component, if the statement carries one.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Action(action) => action.identifier(),
            Self::Assertion(assertion) => Some(assertion.identifier()),
            Self::Resolved(resolved) => resolved.identifier(),
        }
    }

    /// Returns the value component, if the statement carries one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Action(action) => action.value(),
            Self::Assertion(assertion) => assertion.value(),
            Self::Resolved(resolved) => resolved.value(),
        }
    }

    /// Returns whether the statement is (or was resolved from) an action.
    #[must_use]
    pub fn is_action(&self) -> bool {
        match self {
            Self::Action(_) => true,
            Self::Assertion(_) => false,
            Self::Resolved(resolved) => resolved.original().is_action(),
        }
    }
}

impl From<Action> for Statement {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Assertion> for Statement {
    fn from(assertion: Assertion) -> Self {
        Self::Assertion(assertion)
    }
}

impl From<ResolvedStatement> for Statement {
    fn from(resolved: ResolvedStatement) -> Self {
        Self::Resolved(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_follow_action_kind() {
        let wait = Action::wait("wait 1", "1");
        assert_eq!(wait.identifier(), None);
        assert_eq!(wait.value(), Some("1"));

        let reload = Action::no_arguments("reload", "reload");
        assert_eq!(reload.identifier(), None);
        assert_eq!(reload.value(), None);
    }

    #[test]
    fn exists_assertion_has_no_value() {
        let assertion = Assertion::not_exists("$\".modal\" not-exists", "$\".modal\"");

        assert_eq!(assertion.identifier(), "$\".modal\"");
        assert_eq!(assertion.value(), None);
    }

    #[test]
    fn resolved_statement_keeps_source_and_nature() {
        let original = Statement::from(Action::interaction(
            "click $elements.button",
            "click",
            "$elements.button",
        ));
        let resolved = Statement::from(ResolvedStatement::new(
            original,
            Some("$\".button\"".to_string()),
            None,
        ));

        assert_eq!(resolved.source(), "click $elements.button");
        assert_eq!(resolved.identifier(), Some("$\".button\""));
        assert!(resolved.is_action());
    }
}
