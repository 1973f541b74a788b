//! Tag frequency map

use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};

/// Tag -> occurrence count, iterated in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequencyMap {
    counts: BTreeMap<String, usize>,
}

impl TagFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `tag`
    pub fn record(&mut self, tag: &str) {
        match self.counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(tag.to_string(), 1);
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<usize> {
        self.counts.get(tag).copied()
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total_occurrences(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(tag, count)| (tag.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a TagFrequencyMap {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for TagFrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.counts.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_from_zero() {
        let mut map = TagFrequencyMap::new();
        map.record("cat");
        map.record("cat");
        map.record("mat");

        assert_eq!(map.get("cat"), Some(2));
        assert_eq!(map.get("mat"), Some(1));
        assert_eq!(map.get("dog"), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.total_occurrences(), 3);
    }

    #[test]
    fn test_iteration_is_lexicographic() {
        let mut map = TagFrequencyMap::new();
        for tag in ["sat", "cat", "ran", "mat", "cat"] {
            map.record(tag);
        }

        let tags: Vec<&str> = map.tags().collect();
        assert_eq!(tags, vec!["cat", "mat", "ran", "sat"]);

        let pairs: Vec<(&str, usize)> = map.iter().collect();
        assert_eq!(pairs[0], ("cat", 2));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut map = TagFrequencyMap::new();
        map.record("zebra");
        map.record("apple");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"apple":1,"zebra":1}"#);
    }
}
