use crate::builtin::BUILTIN;
use crate::error::TableError;
use crate::summary::{NO_STREET_TERMS, SUMMARY_DEPTH};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN_TABLE: LazyLock<StreetTermTable> = LazyLock::new(|| {
    let entries = BUILTIN.iter().map(|(language, street, abbreviations)| {
        (Cow::Borrowed(*language), StreetTerms::from_static(street, abbreviations))
    });
    StreetTermTable { entries: entries.collect() }
});

/// Street vocabulary of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetTerms {
    /// Full street-type words, most common first.
    pub street: Vec<Cow<'static, str>>,
    /// Abbreviations in the same order as `street` (lists may differ in length).
    #[serde(default)]
    pub abbreviations: Vec<Cow<'static, str>>,
}

impl StreetTerms {
    #[must_use]
    pub fn new<S>(street: impl IntoIterator<Item = S>, abbreviations: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self {
            street: street.into_iter().map(Into::into).collect(),
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
        }
    }

    fn from_static(street: &[&'static str], abbreviations: &[&'static str]) -> Self {
        Self::new(street.iter().copied(), abbreviations.iter().copied())
    }

    /// `"<t1>, <t2>, <t3> (<a1>, <a2>, <a3>)"` using at most [`SUMMARY_DEPTH`] of each.
    #[must_use]
    pub fn short_form(&self) -> String {
        format!("{} ({})", head(&self.street), head(&self.abbreviations))
    }
}

fn head(items: &[Cow<'static, str>]) -> String {
    let taken: Vec<&str> = items.iter().take(SUMMARY_DEPTH).map(AsRef::as_ref).collect();
    taken.join(", ")
}

/// Language name to [`StreetTerms`]. Language names are matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, StreetTerms>")]
pub struct StreetTermTable {
    entries: BTreeMap<Cow<'static, str>, StreetTerms>,
}

impl StreetTermTable {
    /// The vocabulary shipped with GeoHint.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Builds a table from externally supplied entries.
    ///
    /// # Errors
    /// Fails on a blank language name, a language without street terms,
    /// or a language listed twice.
    pub fn from_entries<L>(entries: impl IntoIterator<Item = (L, StreetTerms)>) -> Result<Self, TableError>
    where
        L: Into<Cow<'static, str>>,
    {
        let mut table = BTreeMap::new();
        for (language, terms) in entries {
            let language = language.into();
            if language.trim().is_empty() {
                return Err(TableError::MissingLanguage { context: None });
            }
            if terms.street.is_empty() {
                return Err(TableError::NoTerms { language: language.into_owned(), context: None });
            }
            if table.contains_key(&language) {
                return Err(TableError::Duplicate { language: language.into_owned(), context: None });
            }
            table.insert(language, terms);
        }

        debug!(languages = table.len(), "Street term table built");
        Ok(Self { entries: table })
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&StreetTerms> {
        self.entries.get(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StreetTerms)> {
        self.entries.iter().map(|(language, terms)| (language.as_ref(), terms))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for the recognised languages, in the order given, each at most once.
    pub fn terms_for<'a, 'l>(
        &'a self,
        languages: impl IntoIterator<Item = &'l str>,
    ) -> Vec<(&'a str, &'a StreetTerms)> {
        let mut found: Vec<(&str, &StreetTerms)> = Vec::new();
        for language in languages {
            let Some((name, terms)) = self.entries.get_key_value(language) else {
                continue;
            };
            if !found.iter().any(|(seen, _)| *seen == name.as_ref()) {
                found.push((name.as_ref(), terms));
            }
        }
        found
    }

    /// The street-terms display line for `languages`.
    ///
    /// Per recognised language `"<Language>: <terms> (<abbreviations>)"`,
    /// joined by `" | "`, or exactly [`NO_STREET_TERMS`] when none match.
    pub fn summary<'l>(&self, languages: impl IntoIterator<Item = &'l str>) -> String {
        let parts: Vec<String> = self
            .terms_for(languages)
            .into_iter()
            .map(|(language, terms)| format!("{language}: {}", terms.short_form()))
            .collect();

        if parts.is_empty() { NO_STREET_TERMS.to_owned() } else { parts.join(" | ") }
    }
}

impl TryFrom<BTreeMap<String, StreetTerms>> for StreetTermTable {
    type Error = TableError;

    fn try_from(raw: BTreeMap<String, StreetTerms>) -> Result<Self, Self::Error> {
        Self::from_entries(raw)
    }
}
