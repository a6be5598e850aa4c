//! Page definitions.

use indexmap::IndexMap;

/// A page definition imported by a test.
///
/// A page has a literal URL and an ordered mapping of element names to
/// identifier strings. An identifier may refer to a sibling element of the
/// same page through a parent reference (`{{ form }} >> $".input"`); such
/// references are settled by the resolver, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    import_name: String,
    url: String,
    identifiers: IndexMap<String, String>,
}

impl Page {
    /// Creates a new page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageflow_model::Page;
    ///
    /// let page = Page::new("login", "http://example.com/login", [("form", "$\".form\"")]);
    ///
    /// assert_eq!(page.identifier("form"), Some("$\".form\""));
    /// assert_eq!(page.identifier("missing"), None);
    /// ```
    pub fn new<K, V>(
        import_name: impl Into<String>,
        url: impl Into<String>,
        identifiers: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            import_name: import_name.into(),
            url: url.into(),
            identifiers: identifiers
                .into_iter()
                .map(|(name, identifier)| (name.into(), identifier.into()))
                .collect(),
        }
    }

    /// Returns the name the page is imported under.
    #[must_use]
    pub fn import_name(&self) -> &str {
        &self.import_name
    }

    /// Returns the page URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the element identifiers, in declaration order.
    #[must_use]
    pub const fn identifiers(&self) -> &IndexMap<String, String> {
        &self.identifiers
    }

    /// Returns the identifier of the named element.
    #[must_use]
    pub fn identifier(&self, element_name: &str) -> Option<&str> {
        self.identifiers.get(element_name).map(String::as_str)
    }

    /// Returns this page with its identifiers replaced.
    #[must_use]
    pub fn with_identifiers(self, identifiers: IndexMap<String, String>) -> Self {
        Self {
            identifiers,
            ..self
        }
    }
}
