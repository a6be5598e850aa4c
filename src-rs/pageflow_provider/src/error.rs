use std::fmt;

use pageflow_shared::error::AsPageflowError;

/// The kind of item a provider looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A page definition
    Page,
    /// A reusable step
    Step,
    /// A data-set collection
    DataSet,
    /// A step-local element identifier
    Identifier,
}

impl ItemKind {
    /// Returns the human-readable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Step => "step",
            Self::DataSet => "data set",
            Self::Identifier => "identifier",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider was asked for an item it does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItemError {
    kind: ItemKind,
    name: String,
}

impl UnknownItemError {
    /// Creates a new error for the item of the given kind and name.
    #[must_use]
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Creates a new error for an unknown page.
    #[must_use]
    pub fn page(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Page, name)
    }

    /// Creates a new error for an unknown step.
    #[must_use]
    pub fn step(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Step, name)
    }

    /// Creates a new error for an unknown data-set collection.
    #[must_use]
    pub fn data_set(name: impl Into<String>) -> Self {
        Self::new(ItemKind::DataSet, name)
    }

    /// Creates a new error for an unknown identifier.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Identifier, name)
    }

    /// Returns the kind of item that was requested.
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the name that was requested.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} \"{}\"", self.kind, self.name)
    }
}

impl std::error::Error for UnknownItemError {}

impl AsPageflowError for UnknownItemError {
    fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_kind_and_item() {
        assert_eq!(
            UnknownItemError::page("login").to_string(),
            "Unknown page \"login\""
        );
        assert_eq!(
            UnknownItemError::data_set("users").to_string(),
            "Unknown data set \"users\""
        );
    }
}
