//! Page URL reference resolution

use std::borrow::Cow;

use pageflow_model::Configuration;
use pageflow_provider::PageProvider;
use tracing::trace;

use crate::{
    error::ResolutionError,
    reference::{Reference, configuration_url_page},
};

/// Resolves a page URL reference, `$<page>.url`, to the page's URL.
///
/// Any other value is returned as is.
///
/// # Errors
///
/// Returns an unknown item error if the referenced page does not exist.
pub fn resolve_imported_url<'a>(
    value: &'a str,
    pages: &dyn PageProvider,
) -> Result<Cow<'a, str>, ResolutionError> {
    let Reference::PageUrl { page } = Reference::classify(value) else {
        return Ok(Cow::Borrowed(value));
    };

    let url = pages.find_page(page)?.url();
    trace!(page, url, "resolved page url");

    Ok(Cow::Owned(url.to_string()))
}

/// Resolves the start URL of a test configuration.
///
/// The URL may be a page URL reference with or without its leading `$`. The
/// browsers are kept as they are.
///
/// # Errors
///
/// Returns an unknown item error if the referenced page does not exist.
pub fn resolve_configuration<'a>(
    configuration: &'a Configuration,
    pages: &dyn PageProvider,
) -> Result<Cow<'a, Configuration>, ResolutionError> {
    let Some(page) = configuration_url_page(configuration.url()) else {
        return Ok(Cow::Borrowed(configuration));
    };

    let url = pages.find_page(page)?.url();

    Ok(Cow::Owned(configuration.clone().with_url(url)))
}
