use geohint_domain::{CountryRecord, Value};

/// Walks `segments` left to right, stopping at the first missing key or
/// non-record value.
#[must_use]
pub fn walk<'r, S: AsRef<str>>(record: &'r CountryRecord, segments: &[S]) -> Option<&'r Value> {
    let (first, rest) = segments.split_first()?;
    let start = record.get(first.as_ref())?;
    walk_value(start, rest)
}

/// [`walk`] starting from an arbitrary value; anything but a nested record
/// yields `None` as soon as a key is needed.
#[must_use]
pub fn walk_value<'v, S: AsRef<str>>(value: &'v Value, segments: &[S]) -> Option<&'v Value> {
    segments.iter().try_fold(value, |current, key| current.get(key.as_ref()))
}
