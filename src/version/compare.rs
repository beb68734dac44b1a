//! SemVer precedence

use std::cmp::Ordering;

use crate::version::scanner::is_numeric;
use crate::version::types::Version;

impl Version {
    /// Compare by SemVer precedence.
    ///
    /// Build metadata is ignored and a release ranks above any prerelease of
    /// the same core. Invalid values rank below every valid value and equal to
    /// each other.
    pub fn compare(&self, other: &Version) -> Ordering {
        match (self.valid, other.valid) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {}
        }

        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.has_prerelease(), other.has_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => compare_prerelease(&self.prerelease, &other.prerelease),
            })
    }

    /// The greater of two values; `self` wins ties.
    pub fn max(self, other: Version) -> Version {
        if self.compare(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    pub fn is_greater(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn is_lower(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Equal precedence (build metadata and marker ignored).
    pub fn is_equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

/// Compare two prerelease strings (without the leading `-`).
///
/// An empty string means "no prerelease" and ranks highest. Identifiers are
/// compared pairwise: numeric ones numerically and below alphanumeric ones,
/// alphanumeric ones by ASCII order. A shorter run of equal identifiers ranks
/// lower.
pub fn compare_prerelease(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Greater;
    }
    if b.is_empty() {
        return Ordering::Less;
    }

    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => return compare_identifier(x.as_bytes(), y.as_bytes()),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_identifier(x: &[u8], y: &[u8]) -> Ordering {
    match (is_numeric(x), is_numeric(y)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // no leading zeros, so a shorter digit run is a smaller number
        (true, true) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (false, false) => x.cmp(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alpha", "alpha", Ordering::Equal)]
    #[case("", "alpha", Ordering::Greater)]
    #[case("alpha", "", Ordering::Less)]
    #[case("alpha", "alpha.1", Ordering::Less)]
    #[case("alpha.1", "alpha.beta", Ordering::Less)]
    #[case("alpha.beta", "beta", Ordering::Less)]
    #[case("beta.2", "beta.11", Ordering::Less)]
    #[case("beta.11", "beta.2", Ordering::Greater)]
    #[case("rc.1", "beta.11", Ordering::Greater)]
    #[case("1", "a", Ordering::Less)]
    #[case("a", "1", Ordering::Greater)]
    #[case("456", "456a", Ordering::Less)]
    #[case("123", "124", Ordering::Less)]
    #[case("Z", "a", Ordering::Less)] // ASCII order
    #[case("a-b", "a", Ordering::Greater)]
    fn compare_prerelease_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_prerelease(a, b), expected);
        assert_eq!(compare_prerelease(b, a), expected.reverse());
    }

    #[rstest]
    #[case("1.2.3", "1.2.3", Ordering::Equal)]
    #[case("v1.2.3", "1.2.3", Ordering::Equal)]
    #[case("1.2.3+foo", "1.2.3+bar", Ordering::Equal)]
    #[case("1", "1.0.0", Ordering::Equal)]
    #[case("1.2.3", "1.2.4", Ordering::Less)]
    #[case("1.3.0", "1.2.9", Ordering::Greater)]
    #[case("2.0.0", "1.99.99", Ordering::Greater)]
    #[case("1.2.4", "1.2.4-rc.1", Ordering::Greater)]
    #[case("1.2.4-rc.1", "1.2.4", Ordering::Less)]
    #[case("bad", "0.0.0", Ordering::Less)]
    #[case("1.2.3", "v1-pre", Ordering::Greater)]
    #[case("bad", "worse", Ordering::Equal)]
    fn compare_returns_expected(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(Version::parse(a).compare(&Version::parse(b)), expected);
    }

    #[test]
    fn prerelease_precedence_chain_is_ascending() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ]
        .map(Version::parse);

        for pair in chain.windows(2) {
            assert!(pair[0].is_lower(&pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn comparison_helpers_agree_with_compare() {
        let release = Version::parse("1.2.4");
        let prerelease = Version::parse("1.2.4-rc.1");
        let with_build = Version::parse("1.2.4+meta");

        assert!(release.is_greater(&prerelease));
        assert!(prerelease.is_lower(&release));
        assert!(release.is_equal(&with_build));
        assert_eq!(prerelease.clone().max(release.clone()), release);
        assert_eq!(release.clone().max(with_build), release);
    }
}
