use geohint_domain::CountryRecord;
use geohint_streets::languages_of;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Which languages use a given character (`'ß'` → German, `'ñ'` → Spanish, …).
///
/// Supplied with the dataset; selecting characters narrows the map to
/// countries speaking a language that uses all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CharLanguageTable(BTreeMap<char, BTreeSet<String>>);

impl CharLanguageTable {
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&BTreeSet<String>> {
        self.0.get(&ch)
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.keys().copied()
    }

    /// Number of languages using `ch`; lower means more telling.
    #[must_use]
    pub fn specificity(&self, ch: char) -> usize {
        self.get(ch).map_or(0, BTreeSet::len)
    }

    /// Languages using every character in `chars`. An empty selection, or a
    /// character the table does not know, gives the empty set.
    #[must_use]
    pub fn languages_using_all(&self, chars: &[char]) -> BTreeSet<&str> {
        let mut sets = chars.iter().map(|ch| self.get(*ch));
        let Some(Some(first)) = sets.next() else {
            return BTreeSet::new();
        };

        let mut common: BTreeSet<&str> = first.iter().map(String::as_str).collect();
        for set in sets {
            match set {
                Some(set) => common.retain(|lang| set.contains(*lang)),
                None => return BTreeSet::new(),
            }
        }
        common
    }
}

impl<L: Into<String>> FromIterator<(char, Vec<L>)> for CharLanguageTable {
    fn from_iter<I: IntoIterator<Item = (char, Vec<L>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(ch, langs)| (ch, langs.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// `true` when the record lists at least one of `languages`.
#[must_use]
pub fn record_uses_any(record: &CountryRecord, languages: &BTreeSet<&str>) -> bool {
    record
        .get("language")
        .is_some_and(|value| languages_of(value).iter().any(|lang| languages.contains(lang)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CharLanguageTable {
        [
            ('ä', vec!["German", "Finnish", "Swedish", "Estonian"]),
            ('õ', vec!["Estonian", "Portuguese"]),
            ('ß', vec!["German"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn intersection_of_selected_characters() {
        let table = table();
        assert_eq!(table.languages_using_all(&['ä', 'õ']), BTreeSet::from(["Estonian"]));
        assert_eq!(table.languages_using_all(&['ß']), BTreeSet::from(["German"]));
        assert!(table.languages_using_all(&['ß', 'õ']).is_empty());
        assert!(table.languages_using_all(&[]).is_empty());
        assert!(table.languages_using_all(&['ä', 'ж']).is_empty());
        assert_eq!(table.specificity('ä'), 4);
    }

    #[test]
    fn records_match_on_any_language() {
        let record = CountryRecord::new().with("language", vec!["Swedish", "Finnish"]);
        let wanted = BTreeSet::from(["Finnish"]);
        assert!(record_uses_any(&record, &wanted));
        assert!(!record_uses_any(&CountryRecord::new(), &wanted));
        assert!(!record_uses_any(&record, &BTreeSet::new()));
    }
}
