//! Search (query string) data: parsing with repeated-key folding and
//! deterministic re-serialisation.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::encoding::{decode_component, encode_component};

/// Value bound to a search key.
///
/// A key seen once maps to `One`; a repeated key folds into `Many`, keeping
/// the order in which the values were encountered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum SearchValue {
    One(String),
    Many(Vec<String>),
}

impl SearchValue {
    /// The scalar value, if this is not a sequence.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SearchValue::One(v) => Some(v.as_str()),
            SearchValue::Many(_) => None,
        }
    }

    /// All values in order (a scalar is a one-element slice).
    pub fn values(&self) -> &[String] {
        match self {
            SearchValue::One(v) => std::slice::from_ref(v),
            SearchValue::Many(vs) => vs.as_slice(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            SearchValue::One(first) => {
                let first = std::mem::take(first);
                *self = SearchValue::Many(vec![first, value]);
            }
            SearchValue::Many(vs) => vs.push(value),
        }
    }
}

impl From<String> for SearchValue {
    fn from(v: String) -> Self {
        SearchValue::One(v)
    }
}

impl From<&str> for SearchValue {
    fn from(v: &str) -> Self {
        SearchValue::One(v.to_string())
    }
}

impl From<&String> for SearchValue {
    fn from(v: &String) -> Self {
        SearchValue::One(v.clone())
    }
}

macro_rules! search_value_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SearchValue {
                fn from(v: $t) -> Self {
                    SearchValue::One(v.to_string())
                }
            }
        )*
    };
}

search_value_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool);

impl<T: ToString> From<Vec<T>> for SearchValue {
    fn from(vs: Vec<T>) -> Self {
        SearchValue::Many(vs.iter().map(ToString::to_string).collect())
    }
}

/// Insertion-ordered mapping from search key to [`SearchValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchData {
    entries: Vec<(String, SearchValue)>,
}

impl SearchData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw search string, with or without the leading `?`.
    ///
    /// Pairs are split on `&`, then on the first `=`. Keys and values are
    /// percent-decoded (`+` as space). A pair without `=` yields an empty
    /// value. Empty pairs (`a=1&&b=2`) are skipped.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut data = Self::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            data.append(decode_component(key), decode_component(value));
        }
        data
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SearchValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SearchValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Binds `key` to `value`, replacing any previous value in place.
    /// New keys go to the end. Returns the replaced value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SearchValue>,
    ) -> Option<SearchValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Adds one more value for `key`, folding into a sequence if the key exists.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => slot.push(value),
            None => self.entries.push((key, SearchValue::One(value))),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<SearchValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Merges `other` into `self` with [`insert`](Self::insert) semantics.
    pub fn extend_from(&mut self, other: SearchData) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }

    /// Serialises to `key=value&...` without the leading `?`.
    ///
    /// Sequences emit the key once per element; an empty sequence emits nothing.
    pub fn to_query(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            let key = encode_component(key);
            for v in value.values() {
                if !out.is_empty() {
                    out.push('&');
                }
                out.push_str(&key);
                out.push('=');
                out.push_str(&encode_component(v));
            }
        }
        out
    }

    /// Serialises to a search string: `?` + query, or `""` when nothing is emitted.
    pub fn to_search(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SearchData
where
    K: Into<String>,
    V: Into<SearchValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (k, v) in iter {
            data.insert(k, v);
        }
        data
    }
}

impl IntoIterator for SearchData {
    type Item = (String, SearchValue);
    type IntoIter = std::vec::IntoIter<(String, SearchValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for SearchData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
