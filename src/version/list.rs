//! Sorting collections of versions

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::version::types::Version;

/// A list of versions with a deterministic ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList(Vec<Version>);

impl VersionList {
    pub fn new(versions: Vec<Version>) -> Self {
        Self(versions)
    }

    /// Sort by precedence; ties are broken by the byte order of the original
    /// text (or the canonical rendering when the original is empty).
    ///
    /// Invalid entries come first, ordered by their original text.
    pub fn sort_ascending(&mut self) {
        self.0.sort_by(compare_with_tiebreak);
    }

    /// Highest-precedence valid entry.
    pub fn latest(&self) -> Option<&Version> {
        self.0
            .iter()
            .filter(|v| v.is_valid())
            .max_by(|a, b| compare_with_tiebreak(a, b))
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

fn compare_with_tiebreak(a: &Version, b: &Version) -> Ordering {
    a.compare(b)
        .then_with(|| sort_key(a).as_bytes().cmp(sort_key(b).as_bytes()))
}

fn sort_key(version: &Version) -> std::borrow::Cow<'_, str> {
    if version.original().is_empty() {
        version.canonical().into()
    } else {
        version.original().into()
    }
}

impl Deref for VersionList {
    type Target = Vec<Version>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VersionList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for VersionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Version::parse).collect()
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(list: &VersionList) -> Vec<&str> {
        list.iter().map(Version::original).collect()
    }

    #[test]
    fn sort_ascending_puts_invalid_first_then_precedence() {
        let mut list: VersionList = ["1.2.3", "bad", "v1-pre", "1.0.0-rc.1", "1.0.0", "abc"]
            .into_iter()
            .collect();

        list.sort_ascending();

        assert_eq!(
            originals(&list),
            vec!["abc", "bad", "v1-pre", "1.0.0-rc.1", "1.0.0", "1.2.3"]
        );
    }

    #[test]
    fn sort_ascending_breaks_ties_by_original_text() {
        let mut list: VersionList = ["v1.2.3", "1.2.3+b", "1.2.3+a", "1.2.3", "V1.2.3"]
            .into_iter()
            .collect();

        list.sort_ascending();

        assert_eq!(
            originals(&list),
            vec!["1.2.3", "1.2.3+a", "1.2.3+b", "V1.2.3", "v1.2.3"]
        );
    }

    #[test]
    fn sort_ascending_uses_canonical_for_empty_original() {
        let mut unnamed = Version::parse("1.0.0");
        unnamed.original.clear();
        let mut list = VersionList::new(vec![unnamed, Version::parse("1.0.0")]);

        list.sort_ascending();

        // "" sorts as "v1.0.0", after "1.0.0"
        assert_eq!(originals(&list), vec!["1.0.0", ""]);
    }

    #[test]
    fn latest_skips_invalid() {
        let list: VersionList = ["1.0.0", "zzz", "2.0.0-rc.1", "1.9.9"].into_iter().collect();
        assert_eq!(list.latest().map(Version::original), Some("2.0.0-rc.1"));

        let list: VersionList = ["zzz"].into_iter().collect();
        assert_eq!(list.latest(), None);
    }
}
