//! Steps: ordered groups of actions and assertions.

use indexmap::IndexMap;

use crate::{DataSetCollection, Statement};

/// Element name to identifier string, as declared by a step.
pub type IdentifierMap = IndexMap<String, String>;

/// A step within a test.
///
/// A step may inherit the actions and assertions of another step (its
/// *import*) and may be parameterised by an external data-set collection
/// (its *data import*). A step still carrying either name is *pending* and
/// must have its imports expanded before its references are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    actions: Vec<Statement>,
    assertions: Vec<Statement>,
    import_name: Option<String>,
    data_import_name: Option<String>,
    identifiers: IdentifierMap,
    data: Option<DataSetCollection>,
}

impl Step {
    /// Creates a step with no imports, identifiers, or data.
    #[must_use]
    pub fn new(actions: Vec<Statement>, assertions: Vec<Statement>) -> Self {
        Self {
            actions,
            assertions,
            ..Self::default()
        }
    }

    /// Returns the actions, in execution order.
    #[must_use]
    pub fn actions(&self) -> &[Statement] {
        &self.actions
    }

    /// Returns the assertions, in execution order.
    #[must_use]
    pub fn assertions(&self) -> &[Statement] {
        &self.assertions
    }

    /// Returns the name of the step this step inherits from.
    #[must_use]
    pub fn import_name(&self) -> Option<&str> {
        self.import_name.as_deref()
    }

    /// Returns the name of the data-set collection this step is parameterised by.
    #[must_use]
    pub fn data_import_name(&self) -> Option<&str> {
        self.data_import_name.as_deref()
    }

    /// Returns the step-local element identifiers.
    #[must_use]
    pub const fn identifiers(&self) -> &IdentifierMap {
        &self.identifiers
    }

    /// Returns the attached data-set collection.
    #[must_use]
    pub const fn data(&self) -> Option<&DataSetCollection> {
        self.data.as_ref()
    }

    /// Returns whether the step still has an import or data import to expand.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.import_name.is_some() || self.data_import_name.is_some()
    }

    /// Returns this step importing the named step.
    #[must_use]
    pub fn with_import_name(self, import_name: impl Into<String>) -> Self {
        Self {
            import_name: Some(import_name.into()),
            ..self
        }
    }

    /// Returns this step without its step import.
    #[must_use]
    pub fn without_import_name(self) -> Self {
        Self {
            import_name: None,
            ..self
        }
    }

    /// Returns this step importing the named data-set collection.
    #[must_use]
    pub fn with_data_import_name(self, data_import_name: impl Into<String>) -> Self {
        Self {
            data_import_name: Some(data_import_name.into()),
            ..self
        }
    }

    /// Returns this step without its data import.
    #[must_use]
    pub fn without_data_import_name(self) -> Self {
        Self {
            data_import_name: None,
            ..self
        }
    }

    /// Returns this step with its identifiers replaced.
    #[must_use]
    pub fn with_identifiers(self, identifiers: IdentifierMap) -> Self {
        Self {
            identifiers,
            ..self
        }
    }

    /// Returns this step with the given data attached.
    #[must_use]
    pub fn with_data(self, data: DataSetCollection) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Returns this step with its actions replaced.
    #[must_use]
    pub fn with_actions(self, actions: Vec<Statement>) -> Self {
        Self { actions, ..self }
    }

    /// Returns this step with its assertions replaced.
    #[must_use]
    pub fn with_assertions(self, assertions: Vec<Statement>) -> Self {
        Self { assertions, ..self }
    }

    /// Returns this step with `actions` placed before its own actions.
    #[must_use]
    pub fn with_prepended_actions(self, actions: &[Statement]) -> Self {
        let actions = actions.iter().cloned().chain(self.actions).collect();
        Self { actions, ..self }
    }

    /// Returns this step with `assertions` placed before its own assertions.
    #[must_use]
    pub fn with_prepended_assertions(self, assertions: &[Statement]) -> Self {
        let assertions = assertions.iter().cloned().chain(self.assertions).collect();
        Self { assertions, ..self }
    }
}
