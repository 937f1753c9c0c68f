use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Attribute name to value mapping for one country. No schema is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountryRecord(BTreeMap<String, Value>);

impl CountryRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    /// Builder-style insert, handy for fixtures.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl From<BTreeMap<String, Value>> for CountryRecord {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for CountryRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a CountryRecord {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for CountryRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<Value>>::deserialize(deserializer)?;
        Ok(Self(raw.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect()))
    }
}

/// Read-only snapshot of every country, ordered by country name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(BTreeMap<String, CountryRecord>);

impl Dataset {
    #[must_use]
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.0.get(country)
    }

    pub fn insert(&mut self, country: impl Into<String>, record: CountryRecord) {
        self.0.insert(country.into(), record);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, CountryRecord> {
        self.0.iter()
    }

    pub fn records(&self) -> btree_map::Values<'_, String, CountryRecord> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CountryRecord)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, CountryRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = (&'a String, &'a CountryRecord);
    type IntoIter = btree_map::Iter<'a, String, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
