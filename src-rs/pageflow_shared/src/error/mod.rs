//! Errors for the pageflow browser-test language

mod context;
mod traits;

use std::fmt;

pub use context::{Context, ContextKey, ErrorContext};
pub use traits::AsPageflowError;

/// Unified error representation for pageflow
///
/// This struct represents errors in a format suitable for display to users:
/// a human-readable message and the context bundle that locates the failure
/// within a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageflowError {
    /// Human-readable error message
    message: String,
    /// Context entries, innermost first
    context: Vec<Context>,
}

impl PageflowError {
    /// Creates a new `PageflowError` from an error that implements `AsPageflowError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pageflow_shared::error::{AsPageflowError, Context, PageflowError};
    ///
    /// struct MissingThing;
    ///
    /// impl AsPageflowError for MissingThing {
    ///     fn message(&self) -> String {
    ///         "Unknown element \"thing\"".to_string()
    ///     }
    ///
    ///     fn context(&self) -> Vec<Context> {
    ///         vec![Context::TestName("test.yml".to_string())]
    ///     }
    /// }
    ///
    /// let error = PageflowError::from_error(&MissingThing);
    /// assert_eq!(error.message(), "Unknown element \"thing\"");
    /// assert_eq!(error.context().len(), 1);
    /// ```
    pub fn from_error(error: &impl AsPageflowError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context entries, innermost first
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for PageflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // report outermost first: test, then step, then the fragment
        let location = self
            .context
            .iter()
            .rev()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        if location.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", location.join(", "), self.message)
        }
    }
}
