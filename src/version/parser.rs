//! Single-pass version parser
//!
//! Accepts SemVer 2.0.0 with two deviations:
//! - an optional leading `v`/`V`
//! - the shorthands `MAJOR` and `MAJOR.MINOR`, zero-filled to a full core
//!
//! Prerelease and build metadata are only allowed after a full `MAJOR.MINOR.PATCH`.

use tracing::debug;

use crate::version::error::{Component, ParseError};
use crate::version::flags::Flags;
use crate::version::scanner::{scan_dotted_run, scan_unsigned_int};
use crate::version::types::Version;

/// Parse `input`, returning an invalid [`Version`] when it is malformed.
pub fn parse(input: &str) -> Version {
    try_parse(input).unwrap_or_else(|e| {
        debug!("Rejected version '{}': {}", input, e);
        Version::invalid(input)
    })
}

/// Parse `input`, reporting why it is malformed.
pub fn try_parse(input: &str) -> Result<Version, ParseError> {
    let text = input.as_bytes();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut flags = Flags::empty();
    let mut i = 0;

    if matches!(text[0], b'v' | b'V') {
        if text.len() == 1 {
            return Err(ParseError::MarkerOnly);
        }
        flags |= Flags::MARKER;
        i = 1;
    }

    let (major, next) =
        scan_unsigned_int(text, i).ok_or(ParseError::InvalidNumber(Component::Major))?;
    flags |= Flags::MAJOR;
    i = next;

    let (mut minor, mut patch) = (0, 0);

    if text.get(i) == Some(&b'.') {
        (minor, i) = scan_unsigned_int(text, i + 1)
            .ok_or(ParseError::InvalidNumber(Component::Minor))?;
        flags |= Flags::MINOR;

        if text.get(i) == Some(&b'.') {
            (patch, i) = scan_unsigned_int(text, i + 1)
                .ok_or(ParseError::InvalidNumber(Component::Patch))?;
            flags |= Flags::PATCH;
        }
    }

    if matches!(text.get(i), Some(b'-' | b'+')) && !flags.contains(Flags::PATCH) {
        return Err(ParseError::ShorthandSuffix);
    }

    let mut prerelease = "";
    if text.get(i) == Some(&b'-') {
        let (bounds, next) =
            scan_dotted_run(text, i + 1, Some(b'+'), true).ok_or(ParseError::InvalidPrerelease)?;
        prerelease = &input[bounds];
        flags |= Flags::PRERELEASE;
        i = next;
    }

    let mut build = "";
    if text.get(i) == Some(&b'+') {
        let (bounds, next) =
            scan_dotted_run(text, i + 1, None, false).ok_or(ParseError::InvalidBuild)?;
        build = &input[bounds];
        flags |= Flags::BUILD;
        i = next;
    }

    if i != text.len() {
        return Err(ParseError::TrailingInput(i));
    }

    Ok(Version::from_parts(
        input.to_string(),
        [major, minor, patch],
        prerelease.to_string(),
        build.to_string(),
        flags,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", [1, 2, 3], "", "")]
    #[case("v1.2.3", [1, 2, 3], "", "")]
    #[case("V10.20.30", [10, 20, 30], "", "")]
    #[case("1", [1, 0, 0], "", "")]
    #[case("v1.2", [1, 2, 0], "", "")]
    #[case("1.2.3-rc.1+build.5", [1, 2, 3], "rc.1", "build.5")]
    #[case("1.2.3+meta", [1, 2, 3], "", "meta")]
    #[case("1.2.3--", [1, 2, 3], "-", "")]
    #[case("1.0.0-0A.is.legal", [1, 0, 0], "0A.is.legal", "")]
    #[case("1.0.0+0.build.1-rc.10000aaa-kk-0.1", [1, 0, 0], "", "0.build.1-rc.10000aaa-kk-0.1")]
    fn parse_valid_input_populates_fields(
        #[case] input: &str,
        #[case] core: [u64; 3],
        #[case] prerelease: &str,
        #[case] build: &str,
    ) {
        let version = parse(input);

        assert!(version.is_valid());
        assert_eq!(version.original(), input);
        assert_eq!([version.major(), version.minor(), version.patch()], core);
        assert_eq!(version.prerelease(), prerelease);
        assert_eq!(version.build(), build);
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("v", ParseError::MarkerOnly)]
    #[case("V", ParseError::MarkerOnly)]
    #[case("bad", ParseError::InvalidNumber(Component::Major))]
    #[case("01.1.1", ParseError::InvalidNumber(Component::Major))]
    #[case("1.01.1", ParseError::InvalidNumber(Component::Minor))]
    #[case("1.1.01", ParseError::InvalidNumber(Component::Patch))]
    #[case("1.", ParseError::InvalidNumber(Component::Minor))]
    #[case("v1-pre", ParseError::ShorthandSuffix)]
    #[case("1.2+meta", ParseError::ShorthandSuffix)]
    #[case("1.2-RC-SNAPSHOT", ParseError::ShorthandSuffix)]
    #[case("1.2.3-0123", ParseError::InvalidPrerelease)]
    #[case("1.0.0-alpha..1", ParseError::InvalidPrerelease)]
    #[case("1.0.0-alpha_beta", ParseError::InvalidPrerelease)]
    #[case("1.1.2+.123", ParseError::InvalidBuild)]
    #[case("9.8.7+meta+meta", ParseError::InvalidBuild)]
    #[case("1.2.3.DEV", ParseError::TrailingInput(5))]
    #[case("v1.2.3 ", ParseError::TrailingInput(6))]
    fn try_parse_rejects_malformed_input(#[case] input: &str, #[case] expected: ParseError) {
        assert_eq!(try_parse(input), Err(expected));
    }

    #[test]
    fn parse_invalid_input_keeps_only_original() {
        let version = parse("v1-pre");

        assert!(!version.is_valid());
        assert_eq!(version.original(), "v1-pre");
        assert_eq!([version.major(), version.minor(), version.patch()], [0, 0, 0]);
        assert_eq!(version.prerelease(), "");
        assert_eq!(version.flags(), Flags::empty());
    }

    #[test]
    fn parse_records_presence_flags() {
        assert_eq!(parse("v1").flags(), Flags::MARKER | Flags::MAJOR);
        assert_eq!(parse("1.2").flags(), Flags::MAJOR | Flags::MINOR);
        assert_eq!(
            parse("1.2.3-pre+meta").flags(),
            Flags::CORE | Flags::PRERELEASE | Flags::BUILD
        );
    }

    #[test]
    fn parse_rejects_component_overflow() {
        assert!(parse("9999999999999999.99999999999.9999999999").is_valid());
        assert!(!parse("99999999999999999999.0.0").is_valid());
        assert!(!parse(&format!("1.{}.0", u64::MAX)).is_valid());
    }
}
