//! Data sets used to parameterise steps.

use indexmap::IndexMap;

/// A single data set: parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet(IndexMap<String, String>);

impl DataSet {
    /// Creates a data set from name/value pairs.
    pub fn new<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the value of the named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the parameter names, in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A named, ordered collection of data sets.
///
/// A step attached to a collection runs once per data set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSetCollection(IndexMap<String, DataSet>);

impl DataSetCollection {
    /// Creates a collection from named data sets.
    pub fn new<K: Into<String>>(data_sets: impl IntoIterator<Item = (K, DataSet)>) -> Self {
        Self(
            data_sets
                .into_iter()
                .map(|(name, data_set)| (name.into(), data_set))
                .collect(),
        )
    }

    /// Returns the named data set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataSet> {
        self.0.get(name)
    }

    /// Returns the number of data sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the collection holds no data sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the data sets, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataSet)> {
        self.0.iter().map(|(name, data_set)| (name.as_str(), data_set))
    }
}
