//! Error types for reference resolution.
//!
//! Every failure is a [`ResolutionError`]: a [`ResolutionErrorKind`] saying
//! what went wrong, plus an [`ErrorContext`] saying where. Resolvers attach
//! context on the way out with [`ResolutionError::with_context`]; the kind
//! and its message never change once the error is created.

use std::fmt;

use pageflow_provider::UnknownItemError;
use pageflow_shared::error::{AsPageflowError, Context, ErrorContext};

/// What went wrong while resolving references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    /// An element reference named an element the step does not declare.
    UnknownElement {
        /// The element name that was referenced
        element: String,
    },
    /// A page element reference named an element the page does not declare,
    /// or a page identifier named a parent that cannot be resolved.
    UnknownPageElement {
        /// The import name of the page
        page: String,
        /// The element name that was referenced
        element: String,
    },
    /// A provider did not have the requested page, step, or data set.
    UnknownItem(UnknownItemError),
    /// A step import chain leads back to a step already being imported.
    CircularStepImport {
        /// The import name that was revisited
        import_name: String,
    },
}

impl fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement { element } => write!(f, "Unknown element \"{element}\""),
            Self::UnknownPageElement { page, element } => {
                write!(f, "Unknown page element \"{element}\" in page \"{page}\"")
            }
            Self::UnknownItem(error) => error.fmt(f),
            Self::CircularStepImport { import_name } => {
                write!(f, "Circular step import \"{import_name}\"")
            }
        }
    }
}

/// An error produced while resolving a test, together with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionError {
    kind: ResolutionErrorKind,
    context: ErrorContext,
}

impl ResolutionError {
    /// Creates a new error of the given kind with no context.
    #[must_use]
    pub fn new(kind: ResolutionErrorKind) -> Self {
        Self {
            kind,
            context: ErrorContext::new(),
        }
    }

    /// Creates a new error for an element the step does not declare.
    #[must_use]
    pub fn unknown_element(element: impl Into<String>) -> Self {
        Self::new(ResolutionErrorKind::UnknownElement {
            element: element.into(),
        })
    }

    /// Creates a new error for an element the page does not declare.
    #[must_use]
    pub fn unknown_page_element(page: impl Into<String>, element: impl Into<String>) -> Self {
        Self::new(ResolutionErrorKind::UnknownPageElement {
            page: page.into(),
            element: element.into(),
        })
    }

    /// Creates a new error for a step import cycle.
    #[must_use]
    pub fn circular_step_import(import_name: impl Into<String>) -> Self {
        Self::new(ResolutionErrorKind::CircularStepImport {
            import_name: import_name.into(),
        })
    }

    /// Returns what went wrong.
    #[must_use]
    pub const fn kind(&self) -> &ResolutionErrorKind {
        &self.kind
    }

    /// Returns where it went wrong.
    #[must_use]
    pub const fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Returns this error with one more context entry attached.
    ///
    /// An entry whose key is already present is ignored, so the innermost
    /// boundary that knows a piece of context is the one that records it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageflow_resolver::error::ResolutionError;
    /// use pageflow_shared::error::{Context, ContextKey};
    ///
    /// let error = ResolutionError::unknown_element("button")
    ///     .with_context(Context::StepName("submit".to_string()))
    ///     .with_context(Context::TestName("login.yml".to_string()));
    ///
    /// assert_eq!(error.to_string(), "Unknown element \"button\"");
    /// assert_eq!(error.context().get(ContextKey::StepName), Some("submit"));
    /// ```
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context.apply(context);
        self
    }
}

impl From<ResolutionErrorKind> for ResolutionError {
    fn from(kind: ResolutionErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<UnknownItemError> for ResolutionError {
    fn from(error: UnknownItemError) -> Self {
        Self::new(ResolutionErrorKind::UnknownItem(error))
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ResolutionError {}

impl AsPageflowError for ResolutionError {
    fn message(&self) -> String {
        self.kind.to_string()
    }

    fn context(&self) -> Vec<Context> {
        self.context.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pageflow_shared::error::{ContextKey, PageflowError};

    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            ResolutionError::unknown_element("button").to_string(),
            "Unknown element \"button\""
        );
        assert_eq!(
            ResolutionError::unknown_page_element("login", "form").to_string(),
            "Unknown page element \"form\" in page \"login\""
        );
        assert_eq!(
            ResolutionError::circular_step_import("start").to_string(),
            "Circular step import \"start\""
        );
        assert_eq!(
            ResolutionError::from(UnknownItemError::step("start")).to_string(),
            "Unknown step \"start\""
        );
    }

    #[test]
    fn context_does_not_change_the_message() {
        let error = ResolutionError::unknown_element("button")
            .with_context(Context::Content("click $elements.button".to_string()));

        assert_eq!(error.to_string(), "Unknown element \"button\"");
        assert_eq!(
            error.context().get(ContextKey::Content),
            Some("click $elements.button")
        );
    }

    #[test]
    fn innermost_context_is_kept() {
        let error = ResolutionError::unknown_element("button")
            .with_context(Context::StepName("inner".to_string()))
            .with_context(Context::StepName("outer".to_string()));

        assert_eq!(error.context().get(ContextKey::StepName), Some("inner"));
        assert_eq!(error.context().len(), 1);
    }

    #[test]
    fn converts_to_pageflow_error() {
        let error = ResolutionError::unknown_page_element("login", "form")
            .with_context(Context::StepName("open".to_string()))
            .with_context(Context::TestName("login.yml".to_string()));

        let error = PageflowError::from_error(&error);

        assert_eq!(
            error.to_string(),
            "test: login.yml, step: open: Unknown page element \"form\" in page \"login\""
        );
    }
}
