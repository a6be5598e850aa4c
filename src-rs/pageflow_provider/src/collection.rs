use indexmap::IndexMap;
use pageflow_model::{DataSetCollection, Page, Step};

use crate::{
    DataSetProvider, ItemKind, PageProvider, StepProvider, UnknownItemError,
};

/// Pages keyed by import name.
pub type Pages = ItemCollection<Page>;
/// Reusable steps keyed by import name.
pub type Steps = ItemCollection<Step>;
/// Data-set collections keyed by import name.
pub type DataSets = ItemCollection<DataSetCollection>;

/// A map-backed provider holding every item in memory.
///
/// # Example
///
/// ```rust
/// use pageflow_model::Page;
/// use pageflow_provider::{PageProvider, Pages};
///
/// let pages = Pages::new([("login", Page::new("login", "http://example.com", [("form", ".form")]))]);
///
/// assert!(pages.find_page("login").is_ok());
/// assert!(pages.find_page("home").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCollection<T> {
    items: IndexMap<String, T>,
}

impl<T> ItemCollection<T> {
    /// Creates a collection from named items.
    #[must_use]
    pub fn new<K: Into<String>>(items: impl IntoIterator<Item = (K, T)>) -> Self {
        items.into_iter().collect()
    }

    /// Returns the named item.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.get(name)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, kind: ItemKind, name: &str) -> Result<&T, UnknownItemError> {
        self.items
            .get(name)
            .ok_or_else(|| UnknownItemError::new(kind, name))
    }
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for ItemCollection<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(name, item)| (name.into(), item))
                .collect(),
        }
    }
}

impl PageProvider for Pages {
    fn find_page(&self, import_name: &str) -> Result<&Page, UnknownItemError> {
        self.find(ItemKind::Page, import_name)
    }
}

impl StepProvider for Steps {
    fn find_step(&self, import_name: &str) -> Result<&Step, UnknownItemError> {
        self.find(ItemKind::Step, import_name)
    }
}

impl DataSetProvider for DataSets {
    fn find_data_set_collection(
        &self,
        import_name: &str,
    ) -> Result<&DataSetCollection, UnknownItemError> {
        self.find(ItemKind::DataSet, import_name)
    }
}
