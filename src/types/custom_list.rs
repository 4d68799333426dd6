use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence where duplicates are permitted and insertion
/// order is significant.
///
/// Bulk operations (`combine`, `remove`) never mutate in place: each
/// returns a fresh `CustomList`, so the customized type is preserved
/// through every transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomList<T> {
    items: Vec<T>,
}

impl<T> CustomList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the first element, if any
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add an element to the end
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterator over all elements
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Check whether a value occurs at least once
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for CustomList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for CustomList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for CustomList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CustomList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for CustomList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
