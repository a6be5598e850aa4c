use crate::error::Context;

/// Trait for types that can be converted to pageflow error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and the location context collected while the error
/// propagated. Consumers use it to report "test X, step Y, fragment Z:
/// unknown element E" without re-deriving location information.
pub trait AsPageflowError {
    /// Returns the primary error message.
    ///
    /// The message is part of the compatibility surface and must not be
    /// altered by context attachment.
    fn message(&self) -> String;

    /// Returns the context entries attached to the error, innermost first.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
