//! Headers Management Module
//!
//! [`HeaderSet`] is the mapping of extra header names to values written after
//! the fixed `Host` and `Connection` lines of a CONNECT request. It keeps names
//! exactly as supplied (no case folding, no validation) and iterates in
//! insertion order so a given construction sequence always serializes to the
//! same bytes.

use ::http::HeaderMap;
use hashbrown::HashMap;

/// Insertion-ordered header mapping with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
    /// name -> position in `entries`
    index: HashMap<String, usize>,
}

impl HeaderSet {
    /// Creates a new, empty `HeaderSet`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a header. An existing name keeps its position and gets the new
    /// value; the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Sets a header, consuming the set and returning it.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Removes a header by exact name, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.index.remove(name)?;
        let (_, value) = self.entries.remove(pos);

        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        Some(value)
    }

    /// Looks up a header by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Looks up a header ignoring ASCII case, first match in insertion order.
    #[must_use]
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn pair(entry: &(String, String)) -> (&str, &str) {
            (entry.0.as_str(), entry.1.as_str())
        }
        self.entries
            .iter()
            .map(pair as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

impl<K, V> Extend<(K, V)> for HeaderSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = HeaderSet::new();
        set.extend(iter);
        set
    }
}

impl From<&HeaderMap> for HeaderSet {
    /// Names arrive lowercased from `http`; repeated names keep the last value.
    /// Values carrying obs-text bytes are decoded as ISO-8859-1, one char per
    /// byte, so they serialize back to the same bytes.
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| {
                let value = match value.to_str() {
                    Ok(v) => v.to_owned(),
                    Err(_) => value.as_bytes().iter().map(|&b| char::from(b)).collect(),
                };
                (name.as_str().to_owned(), value)
            })
            .collect()
    }
}
