//! Fixed-point resolution of parent references within a page

use std::borrow::Cow;

use indexmap::IndexMap;
use pageflow_model::Page;
use tracing::trace;

use crate::{
    error::ResolutionError,
    reference::{parent_reference, parent_reference_name, parent_reference_names},
};

/// Resolves every `{{ <name> }}` parent reference in a page's identifiers.
///
/// Each scan substitutes, into every unresolved identifier, the value of each
/// of its parents that is itself resolved. Scans repeat until nothing is left
/// unresolved or a scan changes nothing, so a page of `n` identifiers takes
/// at most `n` scans. Declaration order does not matter, so a child may be
/// declared before its parent.
///
/// Returns the page unchanged if no identifier has a parent reference.
///
/// # Errors
///
/// Returns an unknown page element error naming the first parent left in the
/// first identifier still unresolved, if a parent is missing or the parents
/// form a cycle.
pub fn resolve_page(page: &Page) -> Result<Cow<'_, Page>, ResolutionError> {
    if count_unresolved(page.identifiers()) == 0 {
        return Ok(Cow::Borrowed(page));
    }

    let (identifiers, scans) = resolve_to_fixed_point(page.identifiers());

    trace!(page = page.import_name(), scans, "resolved page identifiers");

    if let Some(parent_name) = identifiers
        .values()
        .find_map(|identifier| parent_reference_name(identifier))
    {
        return Err(ResolutionError::unknown_page_element(
            page.import_name(),
            parent_name,
        ));
    }

    Ok(Cow::Owned(page.clone().with_identifiers(identifiers)))
}

/// Scans until every identifier is resolved or a scan changes nothing.
///
/// Returns the identifiers and the number of scans performed.
fn resolve_to_fixed_point(
    identifiers: &IndexMap<String, String>,
) -> (IndexMap<String, String>, usize) {
    let mut identifiers = identifiers.clone();
    let mut scans = 0;

    loop {
        let scanned = resolve_scan(&identifiers);
        scans += 1;
        debug_assert!(scans <= identifiers.len());

        let unresolved = count_unresolved(&scanned);
        trace!(scans, unresolved, "page identifier scan");

        if unresolved == 0 || scanned == identifiers {
            return (scanned, scans);
        }

        identifiers = scanned;
    }
}

/// Performs one scan, reading only the identifiers as they were before it.
fn resolve_scan(identifiers: &IndexMap<String, String>) -> IndexMap<String, String> {
    identifiers
        .iter()
        .map(|(name, identifier)| (name.clone(), resolve_from_parents(identifier, identifiers)))
        .collect()
}

/// Substitutes every parent of `identifier` that is already resolved.
fn resolve_from_parents(identifier: &str, identifiers: &IndexMap<String, String>) -> String {
    parent_reference_names(identifier).fold(identifier.to_string(), |resolved, parent_name| {
        if let Some(parent_identifier) = identifiers.get(parent_name)
            && parent_reference_name(parent_identifier).is_none()
        {
            resolved.replace(&parent_reference(parent_name), parent_identifier)
        } else {
            resolved
        }
    })
}

fn count_unresolved(identifiers: &IndexMap<String, String>) -> usize {
    identifiers
        .values()
        .filter(|identifier| parent_reference_name(identifier).is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ResolutionErrorKind, test::construct::page};

    fn identifiers_of(page: &Page) -> Vec<(&str, &str)> {
        page.identifiers()
            .iter()
            .map(|(name, identifier)| (name.as_str(), identifier.as_str()))
            .collect()
    }

    #[test]
    fn empty_page_is_unchanged() {
        let page = page("import_name", "", &[]);

        let resolved = resolve_page(&page).expect("page should resolve");

        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn page_without_parent_references_is_unchanged() {
        let page = page("import_name", "", &[("form", "$\".form\"")]);

        let resolved = resolve_page(&page).expect("page should resolve");

        assert!(matches!(resolved, Cow::Borrowed(borrowed) if std::ptr::eq(borrowed, &page)));
    }

    #[test]
    fn direct_parent_reference() {
        let page = page(
            "import_name",
            "",
            &[
                ("form", "$\".form\""),
                ("form_container", "{{ form }} >> $\".container\""),
            ],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(
            identifiers_of(&resolved),
            [
                ("form", "$\".form\""),
                ("form_container", "$\".form\" >> $\".container\""),
            ]
        );
    }

    #[test]
    fn indirect_parent_reference_in_declaration_order() {
        let page = page(
            "import_name",
            "",
            &[
                ("form", "$\".form\""),
                ("form_container", "{{ form }} >> $\".container\""),
                ("form_input", "{{ form_container }} >> $\".input\""),
            ],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(
            identifiers_of(&resolved),
            [
                ("form", "$\".form\""),
                ("form_container", "$\".form\" >> $\".container\""),
                ("form_input", "$\".form\" >> $\".container\" >> $\".input\""),
            ]
        );
    }

    #[test]
    fn indirect_parent_reference_out_of_order() {
        let page = page(
            "import_name",
            "",
            &[
                ("form_input", "{{ form_container }} >> $\".input\""),
                ("form_container", "{{ form }} >> $\".container\""),
                ("form", "$\".form\""),
            ],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(
            resolved.identifier("form_input"),
            Some("$\".form\" >> $\".container\" >> $\".input\"")
        );
        assert_eq!(
            resolved.identifier("form_container"),
            Some("$\".form\" >> $\".container\"")
        );
    }

    #[test]
    fn missing_parent_is_reported_by_parent_name() {
        let page = page(
            "import_name",
            "",
            &[
                ("form", "$\".form\""),
                ("unresolvable", "{{ missing }} >> $\".button\""),
            ],
        );

        let result = resolve_page(&page);

        let Err(error) = result else {
            panic!("expected unresolvable parent to fail");
        };
        assert_eq!(
            error.kind(),
            &ResolutionErrorKind::UnknownPageElement {
                page: "import_name".to_string(),
                element: "missing".to_string(),
            }
        );
    }

    #[test]
    fn self_reference_is_unresolvable() {
        let page = page("import_name", "", &[("loop", "{{ loop }} >> $\".item\"")]);

        let Err(error) = resolve_page(&page) else {
            panic!("expected self reference to fail");
        };
        assert_eq!(
            error.to_string(),
            "Unknown page element \"loop\" in page \"import_name\""
        );
    }

    #[test]
    fn identifier_with_two_parents() {
        let page = page(
            "import_name",
            "",
            &[
                ("combined", "{{ form }} >> {{ input }}"),
                ("form", "$\".form\""),
                ("input", "$\".input\""),
            ],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(
            resolved.identifier("combined"),
            Some("$\".form\" >> $\".input\"")
        );
    }

    #[test]
    fn identifier_with_parents_resolved_in_different_scans() {
        let page = page(
            "import_name",
            "",
            &[
                ("combined", "{{ form }} >> {{ input }}"),
                ("input", "{{ form }} >> $\".input\""),
                ("form", "$\".form\""),
            ],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(
            resolved.identifier("combined"),
            Some("$\".form\" >> $\".form\" >> $\".input\"")
        );
    }

    #[test]
    fn missing_second_parent_is_reported() {
        let page = page(
            "import_name",
            "",
            &[
                ("form", "$\".form\""),
                ("combined", "{{ form }} >> {{ missing }}"),
            ],
        );

        let Err(error) = resolve_page(&page) else {
            panic!("expected missing parent to fail");
        };
        assert_eq!(
            error.kind(),
            &ResolutionErrorKind::UnknownPageElement {
                page: "import_name".to_string(),
                element: "missing".to_string(),
            }
        );
    }

    fn reversed_chain(depth: usize) -> IndexMap<String, String> {
        (0..depth)
            .rev()
            .map(|level| {
                let identifier = if level == 0 {
                    "$\".root\"".to_string()
                } else {
                    format!("{{{{ level_{} }}}} >> $\".child\"", level - 1)
                };
                (format!("level_{level}"), identifier)
            })
            .collect()
    }

    #[test]
    fn reversed_chain_takes_fewer_scans_than_identifiers() {
        let identifiers = reversed_chain(6);

        let (resolved, scans) = resolve_to_fixed_point(&identifiers);

        assert_eq!(scans, 5);
        assert_eq!(count_unresolved(&resolved), 0);
        assert_eq!(
            resolved.get("level_2").map(String::as_str),
            Some("$\".root\" >> $\".child\" >> $\".child\"")
        );
    }

    #[test]
    fn unresolvable_chain_stops_within_one_scan_per_identifier() {
        let mut identifiers = reversed_chain(5);
        identifiers.insert("level_0".to_string(), "{{ missing }}".to_string());

        let (resolved, scans) = resolve_to_fixed_point(&identifiers);

        assert!(scans <= identifiers.len());
        assert_eq!(count_unresolved(&resolved), identifiers.len());
    }

    #[test]
    fn resolution_keeps_url_and_import_name() {
        let page = page(
            "login",
            "http://example.com/login",
            &[("form", "$\".form\""), ("input", "{{ form }} >> $\".input\"")],
        );

        let resolved = resolve_page(&page).expect("page should resolve");

        assert_eq!(resolved.import_name(), "login");
        assert_eq!(resolved.url(), "http://example.com/login");
    }
}
