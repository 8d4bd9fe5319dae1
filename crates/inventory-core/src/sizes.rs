//! Common-size resolution across the products of a bundle.

use std::collections::HashSet;

/// Anything that carries a size name.
///
/// Sizes are compared by name only, so two records with different ids but
/// the same name count as the same size.
pub trait NamedSize {
    fn size_name(&self) -> &str;
}

impl NamedSize for String {
    fn size_name(&self) -> &str {
        self
    }
}

impl NamedSize for str {
    fn size_name(&self) -> &str {
        self
    }
}

impl<T: NamedSize + ?Sized> NamedSize for &T {
    fn size_name(&self) -> &str {
        (*self).size_name()
    }
}

/// Intersect per-product size lists by name.
///
/// Empty lists place no constraint and are skipped. The result keeps the
/// entries and order of the first non-empty list.
pub fn intersect_sizes<T: NamedSize + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let mut qualifying = lists.iter().filter(|list| !list.is_empty());

    let Some(first) = qualifying.next() else {
        return Vec::new();
    };

    let others: Vec<HashSet<&str>> = qualifying
        .map(|list| list.iter().map(|size| size.size_name()).collect())
        .collect();

    first
        .iter()
        .filter(|size| others.iter().all(|names| names.contains(size.size_name())))
        .cloned()
        .collect()
}
