//! Resolution of a single action or assertion

use std::borrow::Cow;

use pageflow_model::{ResolvedStatement, Statement};
use pageflow_provider::{IdentifierProvider, PageProvider};
use tracing::trace;

use crate::{
    error::ResolutionError,
    reference::is_page_property,
    resolver::{resolve_element, resolve_imported_url},
};

/// Resolves one statement component (an identifier or a value).
///
/// Returns `Ok(None)` if the component does not change.
pub type ComponentResolver = fn(
    &str,
    &dyn PageProvider,
    &dyn IdentifierProvider,
) -> Result<Option<String>, ResolutionError>;

/// Resolves element, attribute, and page element references in a component.
///
/// # Errors
///
/// Returns any error from [`resolve_element`].
pub fn element_component(
    component: &str,
    pages: &dyn PageProvider,
    identifiers: &dyn IdentifierProvider,
) -> Result<Option<String>, ResolutionError> {
    let resolved = resolve_element(component, pages, identifiers)?;
    Ok(changed(component, resolved))
}

/// Resolves a page URL reference in a component into a quoted literal.
///
/// Properties of the page under test (`$page.url`, `$page.title`) are left
/// alone.
///
/// # Errors
///
/// Returns any error from [`resolve_imported_url`].
pub fn url_component(
    component: &str,
    pages: &dyn PageProvider,
    _identifiers: &dyn IdentifierProvider,
) -> Result<Option<String>, ResolutionError> {
    if is_page_property(component) {
        return Ok(None);
    }

    let resolved = resolve_imported_url(component, pages)?;
    Ok(changed(component, resolved).map(|url| format!("\"{url}\"")))
}

fn changed(component: &str, resolved: Cow<'_, str>) -> Option<String> {
    (resolved != component).then(|| resolved.into_owned())
}

/// Resolves the identifier and value of actions and assertions.
///
/// Each component resolver is applied to the original component in turn; if
/// more than one changes it, the last one wins.
#[derive(Debug, Clone)]
pub struct StatementResolver {
    component_resolvers: Vec<ComponentResolver>,
}

impl StatementResolver {
    /// Creates a resolver that applies `component_resolvers` in order.
    #[must_use]
    pub const fn new(component_resolvers: Vec<ComponentResolver>) -> Self {
        Self {
            component_resolvers,
        }
    }

    /// Resolves the components of `statement`.
    ///
    /// Returns the statement itself if no component changes, or a
    /// [`Statement::Resolved`] wrapping it otherwise.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a component resolver.
    pub fn resolve<'a>(
        &self,
        statement: &'a Statement,
        pages: &dyn PageProvider,
        identifiers: &dyn IdentifierProvider,
    ) -> Result<Cow<'a, Statement>, ResolutionError> {
        let mut identifier = None;
        let mut value = None;

        for component_resolver in &self.component_resolvers {
            if let Some(component) = statement.identifier()
                && let Some(resolved) = component_resolver(component, pages, identifiers)?
            {
                identifier = Some(resolved);
            }

            if let Some(component) = statement.value()
                && let Some(resolved) = component_resolver(component, pages, identifiers)?
            {
                value = Some(resolved);
            }
        }

        if identifier.is_none() && value.is_none() {
            return Ok(Cow::Borrowed(statement));
        }

        trace!(
            source = statement.source(),
            ?identifier,
            ?value,
            "resolved statement"
        );

        let identifier = identifier.or_else(|| statement.identifier().map(ToString::to_string));
        let value = value.or_else(|| statement.value().map(ToString::to_string));

        Ok(Cow::Owned(Statement::Resolved(ResolvedStatement::new(
            statement.clone(),
            identifier,
            value,
        ))))
    }
}

impl Default for StatementResolver {
    fn default() -> Self {
        Self::new(vec![element_component, url_component])
    }
}
