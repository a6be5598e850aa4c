//! Resolution of the references within a step

use std::borrow::Cow;

use pageflow_model::{IdentifierMap, Statement, Step};
use pageflow_provider::{IdentifierProvider, NoIdentifiers, PageProvider};
use pageflow_shared::error::Context;
use tracing::{debug, instrument};

use crate::{
    error::ResolutionError,
    resolver::{StatementResolver, resolve_element},
};

/// Resolves the identifiers, actions, and assertions of a step.
#[derive(Debug, Clone, Default)]
pub struct StepResolver {
    statement_resolver: StatementResolver,
}

impl StepResolver {
    /// Creates a step resolver that resolves statements with `statement_resolver`.
    #[must_use]
    pub const fn new(statement_resolver: StatementResolver) -> Self {
        Self { statement_resolver }
    }

    /// Resolves the references within `step`.
    ///
    /// The step's own identifiers are resolved first, against pages only.
    /// Its actions and then its assertions are resolved against pages and
    /// those identifiers.
    ///
    /// A pending step (one with an import or a data import still to expand)
    /// is returned unchanged, as is a step with nothing to resolve.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving the step. An error
    /// raised by an action or assertion carries that statement's source text
    /// as content.
    #[instrument(skip_all)]
    pub fn resolve<'a>(
        &self,
        step: &'a Step,
        pages: &dyn PageProvider,
    ) -> Result<Cow<'a, Step>, ResolutionError> {
        if step.is_pending() {
            debug!("step has unexpanded imports, leaving it unresolved");
            return Ok(Cow::Borrowed(step));
        }

        let identifiers = resolve_identifiers(step.identifiers(), pages)?;
        let identifier_provider = identifiers.as_ref().unwrap_or_else(|| step.identifiers());

        let actions = self.resolve_statements(step.actions(), pages, identifier_provider)?;
        let assertions = self.resolve_statements(step.assertions(), pages, identifier_provider)?;

        if identifiers.is_none() && actions.is_none() && assertions.is_none() {
            return Ok(Cow::Borrowed(step));
        }

        let resolved = step
            .clone()
            .with_identifiers(identifiers.unwrap_or_else(|| step.identifiers().clone()))
            .with_actions(actions.unwrap_or_else(|| step.actions().to_vec()))
            .with_assertions(assertions.unwrap_or_else(|| step.assertions().to_vec()));

        Ok(Cow::Owned(resolved))
    }

    /// Returns `None` if no statement changes.
    fn resolve_statements(
        &self,
        statements: &[Statement],
        pages: &dyn PageProvider,
        identifiers: &dyn IdentifierProvider,
    ) -> Result<Option<Vec<Statement>>, ResolutionError> {
        let resolved = statements
            .iter()
            .map(|statement| {
                self.statement_resolver
                    .resolve(statement, pages, identifiers)
                    .map_err(|error| {
                        error.with_context(Context::Content(statement.source().to_string()))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if resolved.iter().all(|statement| matches!(statement, Cow::Borrowed(_))) {
            return Ok(None);
        }

        Ok(Some(resolved.into_iter().map(Cow::into_owned).collect()))
    }
}

/// Resolves a step's identifier map against pages only.
///
/// Returns `None` if no identifier changes.
fn resolve_identifiers(
    identifiers: &IdentifierMap,
    pages: &dyn PageProvider,
) -> Result<Option<IdentifierMap>, ResolutionError> {
    let mut changed = false;
    let mut resolved = IdentifierMap::with_capacity(identifiers.len());

    for (name, identifier) in identifiers {
        let identifier = resolve_element(identifier, pages, &NoIdentifiers)?;
        changed |= matches!(identifier, Cow::Owned(_));
        resolved.insert(name.clone(), identifier.into_owned());
    }

    Ok(changed.then_some(resolved))
}
