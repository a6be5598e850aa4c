//! Element, attribute, and page element reference resolution

use std::borrow::Cow;

use pageflow_provider::{IdentifierProvider, PageProvider};

use crate::{error::ResolutionError, reference::Reference, resolver::resolve_page};

const ATTRIBUTE_SEPARATOR: char = '.';

/// Resolves an element, attribute, or page element reference.
///
/// Element and attribute references are looked up in `identifiers`; page
/// element references are looked up in the referenced page. Any other value
/// is returned as is.
///
/// # Errors
///
/// - an unknown element error if `identifiers` has no such element
/// - an unknown page element error if the page has no such element
/// - an unknown item error if the referenced page does not exist
pub fn resolve_element<'a>(
    value: &'a str,
    pages: &dyn PageProvider,
    identifiers: &dyn IdentifierProvider,
) -> Result<Cow<'a, str>, ResolutionError> {
    match Reference::classify(value) {
        Reference::Element { name } => {
            let identifier = find_identifier(name, identifiers)?;
            Ok(Cow::Owned(identifier.to_string()))
        }
        Reference::Attribute { name, attribute } => {
            let identifier = find_identifier(name, identifiers)?;
            Ok(Cow::Owned(with_attribute(identifier, attribute)))
        }
        Reference::PageElement { .. } => resolve_page_element(value, pages),
        Reference::PageUrl { .. } | Reference::Literal => Ok(Cow::Borrowed(value)),
    }
}

/// Resolves a page element reference, `$<page>.elements.<name>[.<attribute>]`.
///
/// The page's own parent references are resolved before the element is
/// looked up. Any other value is returned as is.
///
/// # Errors
///
/// - an unknown item error if the page does not exist
/// - an unknown page element error if the page does not declare the element
///   or if one of its parent references cannot be resolved
pub fn resolve_page_element<'a>(
    value: &'a str,
    pages: &dyn PageProvider,
) -> Result<Cow<'a, str>, ResolutionError> {
    let Reference::PageElement {
        page: import_name,
        name,
        attribute,
    } = Reference::classify(value)
    else {
        return Ok(Cow::Borrowed(value));
    };

    let page = pages.find_page(import_name)?;
    let page = resolve_page(page)?;

    let identifier = page
        .identifier(name)
        .ok_or_else(|| ResolutionError::unknown_page_element(import_name, name))?;

    Ok(Cow::Owned(attribute.map_or_else(
        || identifier.to_string(),
        |attribute| with_attribute(identifier, attribute),
    )))
}

fn find_identifier<'a>(
    name: &str,
    identifiers: &'a dyn IdentifierProvider,
) -> Result<&'a str, ResolutionError> {
    identifiers
        .find_identifier(name)
        .map_err(|_| ResolutionError::unknown_element(name))
}

fn with_attribute(identifier: &str, attribute: &str) -> String {
    format!("{identifier}{ATTRIBUTE_SEPARATOR}{attribute}")
}
