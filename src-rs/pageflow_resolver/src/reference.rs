//! Recognition of reference syntax inside string values.
//!
//! | Form | Pattern |
//! |---|---|
//! | Element | `$elements.<name>` |
//! | Attribute | `$elements.<name>.<attribute>` |
//! | Page element | `$<page>.elements.<name>[.<attribute>]` |
//! | Page URL | `$<page>.url` |
//!
//! Names, page import names, and attribute names are one or more ASCII
//! letters, digits, `_` or `-`. Any other string is a literal.
//!
//! Page identifiers use a separate, page-scoped form to refer to a sibling
//! identifier: `{{ <name> }}`.

const ELEMENTS_SEGMENT: &str = "elements";
const URL_SEGMENT: &str = "url";

/// Properties of the page under test. These are never treated as references
/// to an imported page's URL.
pub const PAGE_PROPERTIES: [&str; 2] = ["$page.url", "$page.title"];

/// The classification of a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// `$elements.<name>`
    Element {
        /// The element name
        name: &'a str,
    },
    /// `$elements.<name>.<attribute>`
    Attribute {
        /// The element name
        name: &'a str,
        /// The attribute name
        attribute: &'a str,
    },
    /// `$<page>.elements.<name>[.<attribute>]`
    PageElement {
        /// The page import name
        page: &'a str,
        /// The element name
        name: &'a str,
        /// The attribute name, if any
        attribute: Option<&'a str>,
    },
    /// `$<page>.url`
    PageUrl {
        /// The page import name
        page: &'a str,
    },
    /// Anything else.
    Literal,
}

impl<'a> Reference<'a> {
    /// Classifies `value`.
    ///
    /// Local element forms are recognised before page-scoped forms, so
    /// `$elements.elements.name` is an attribute reference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageflow_resolver::reference::Reference;
    ///
    /// assert_eq!(
    ///     Reference::classify("$elements.button.href"),
    ///     Reference::Attribute { name: "button", attribute: "href" },
    /// );
    /// assert_eq!(
    ///     Reference::classify("$login.url"),
    ///     Reference::PageUrl { page: "login" },
    /// );
    /// assert_eq!(Reference::classify("$\".button\""), Reference::Literal);
    /// ```
    #[must_use]
    pub fn classify(value: &'a str) -> Self {
        let Some(body) = value.strip_prefix('$') else {
            return Self::Literal;
        };

        let segments = body.split('.').collect::<Vec<_>>();
        if !segments.iter().all(|segment| is_segment(segment)) {
            return Self::Literal;
        }

        match *segments.as_slice() {
            [ELEMENTS_SEGMENT, name] => Self::Element { name },
            [ELEMENTS_SEGMENT, name, attribute] => Self::Attribute { name, attribute },
            [page, ELEMENTS_SEGMENT, name] => Self::PageElement {
                page,
                name,
                attribute: None,
            },
            [page, ELEMENTS_SEGMENT, name, attribute] => Self::PageElement {
                page,
                name,
                attribute: Some(attribute),
            },
            [page, URL_SEGMENT] => Self::PageUrl { page },
            _ => Self::Literal,
        }
    }

    /// Returns whether the value is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal)
    }
}

/// Returns whether `value` names a property of the page under test.
#[must_use]
pub fn is_page_property(value: &str) -> bool {
    PAGE_PROPERTIES.contains(&value)
}

/// Returns the import name of the page referenced by a test configuration
/// URL, if the URL is a page URL reference.
///
/// A configuration URL may omit the leading `$`.
#[must_use]
pub fn configuration_url_page(url: &str) -> Option<&str> {
    let url = url.strip_prefix('$').unwrap_or(url);

    let (page, property) = url.split_once('.')?;
    (property == URL_SEGMENT && is_segment(page)).then_some(page)
}

/// Returns the name in the first `{{ <name> }}` parent reference within a
/// page identifier.
///
/// A parent name may contain anything but `}` and `$`.
///
/// # Example
///
/// ```rust
/// use pageflow_resolver::reference::parent_reference_name;
///
/// assert_eq!(parent_reference_name("{{ form }} >> $\".input\""), Some("form"));
/// assert_eq!(parent_reference_name("$\".form\" >> $\".input\""), None);
/// ```
#[must_use]
pub fn parent_reference_name(identifier: &str) -> Option<&str> {
    parent_reference_names(identifier).next()
}

/// Returns the names in every `{{ <name> }}` parent reference within a page
/// identifier, in order of appearance.
pub fn parent_reference_names(identifier: &str) -> impl Iterator<Item = &str> {
    identifier
        .match_indices("{{ ")
        .filter_map(move |(start, opening)| {
            parent_name_at(&identifier[start + opening.len()..])
        })
}

/// Returns the `{{ <name> }}` token that refers to the parent called `name`.
#[must_use]
pub fn parent_reference(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}

fn parent_name_at(rest: &str) -> Option<&str> {
    let end = rest.find(['}', '$'])?;
    let (candidate, tail) = rest.split_at(end);

    let name = candidate.strip_suffix(' ')?;
    (!name.is_empty() && tail.starts_with("}}")).then_some(name)
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
