//! Lookup providers for the pageflow browser-test language
//!
//! A provider answers "give me the item called `name`" for one kind of item
//! (pages, steps, data-set collections, or element identifiers), either with
//! the item or with an [`UnknownItemError`] naming what was asked for.
//!
//! The resolver consumes providers only through the traits defined here.
//! [`ItemCollection`] is a map-backed implementation suitable for callers that
//! already hold every item in memory.

mod collection;
mod error;

use indexmap::IndexMap;
use pageflow_model::{DataSetCollection, Page, Step};

pub use crate::collection::{DataSets, ItemCollection, Pages, Steps};
pub use crate::error::{ItemKind, UnknownItemError};

/// Looks up page definitions by import name.
pub trait PageProvider {
    /// Returns the page imported as `import_name`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownItemError`] of kind [`ItemKind::Page`] if no such
    /// page exists.
    fn find_page(&self, import_name: &str) -> Result<&Page, UnknownItemError>;
}

/// Looks up reusable steps by import name.
pub trait StepProvider {
    /// Returns the step imported as `import_name`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownItemError`] of kind [`ItemKind::Step`] if no such
    /// step exists.
    fn find_step(&self, import_name: &str) -> Result<&Step, UnknownItemError>;
}

/// Looks up data-set collections by import name.
pub trait DataSetProvider {
    /// Returns the data-set collection imported as `import_name`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownItemError`] of kind [`ItemKind::DataSet`] if no
    /// such collection exists.
    fn find_data_set_collection(
        &self,
        import_name: &str,
    ) -> Result<&DataSetCollection, UnknownItemError>;
}

/// Looks up element identifiers by element name, within a single step.
pub trait IdentifierProvider {
    /// Returns the identifier of the element called `name`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownItemError`] of kind [`ItemKind::Identifier`] if no
    /// such element exists.
    fn find_identifier(&self, name: &str) -> Result<&str, UnknownItemError>;
}

/// An identifier provider that knows no identifiers.
///
/// Used where only page-scoped references are permitted, such as when a
/// step's own identifier map is being resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIdentifiers;

impl IdentifierProvider for NoIdentifiers {
    fn find_identifier(&self, name: &str) -> Result<&str, UnknownItemError> {
        Err(UnknownItemError::identifier(name))
    }
}

impl IdentifierProvider for IndexMap<String, String> {
    fn find_identifier(&self, name: &str) -> Result<&str, UnknownItemError> {
        self.get(name)
            .map(String::as_str)
            .ok_or_else(|| UnknownItemError::identifier(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_identifiers_finds_nothing() {
        let result = NoIdentifiers.find_identifier("button");

        assert_eq!(result, Err(UnknownItemError::identifier("button")));
    }

    #[test]
    fn identifier_map_finds_declared_identifiers() {
        let identifiers: IndexMap<String, String> =
            [("button".to_string(), "$\".button\"".to_string())]
                .into_iter()
                .collect();

        assert_eq!(identifiers.find_identifier("button"), Ok("$\".button\""));
        assert_eq!(
            identifiers.find_identifier("link"),
            Err(UnknownItemError::identifier("link"))
        );
    }
}
