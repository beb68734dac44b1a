//! The parsed version value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::ParseError;
use crate::version::flags::Flags;
use crate::version::parser;
use crate::version::render::RenderFlags;

/// A version parsed from text.
///
/// An invalid value only carries [`Version::original`]; every other field is
/// zeroed. Values are never modified in place: mutators such as
/// [`Version::bump_patch`] return a new `Version`.
///
/// Derived equality is structural. Use [`Version::compare`] for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub(crate) original: String,
    pub(crate) prerelease: String,
    pub(crate) build: String,
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) flags: Flags,
    pub(crate) valid: bool,
}

impl Version {
    /// Parse `input`. Never fails; check [`Version::is_valid`].
    pub fn parse(input: &str) -> Self {
        parser::parse(input)
    }

    pub(crate) fn invalid(original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn from_parts(
        original: String,
        [major, minor, patch]: [u64; 3],
        prerelease: String,
        build: String,
        flags: Flags,
    ) -> Self {
        Self {
            original,
            prerelease,
            build,
            major,
            minor,
            patch,
            flags,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The text this value was parsed from, or its full rendering after a mutation.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers without the leading `-`.
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata without the leading `+`.
    pub fn build(&self) -> &str {
        &self.build
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn has_marker(&self) -> bool {
        self.flags.contains(Flags::MARKER)
    }

    pub fn has_major(&self) -> bool {
        self.flags.contains(Flags::MAJOR)
    }

    pub fn has_minor(&self) -> bool {
        self.flags.contains(Flags::MINOR)
    }

    pub fn has_patch(&self) -> bool {
        self.flags.contains(Flags::PATCH)
    }

    pub fn has_prerelease(&self) -> bool {
        self.flags.contains(Flags::PRERELEASE)
    }

    pub fn has_build(&self) -> bool {
        self.flags.contains(Flags::BUILD)
    }

    /// Neither prerelease nor build metadata present.
    pub fn is_release(&self) -> bool {
        !self.flags.intersects(Flags::PRERELEASE | Flags::BUILD)
    }

    /// Convert to a [`semver::Version`]. Returns `None` for an invalid value.
    ///
    /// The marker is dropped; shorthand components are zero-filled.
    pub fn to_semver(&self) -> Option<semver::Version> {
        if !self.valid {
            return None;
        }
        semver::Version::parse(&self.bare()).ok()
    }
}

impl fmt::Display for Version {
    /// Renders with the original marker style and every present component.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderFlags::DEFAULT))
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::try_parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render(RenderFlags::DEFAULT))
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
