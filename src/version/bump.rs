//! Value-returning mutators
//!
//! Each mutator takes a valid receiver and returns a new [`Version`] whose
//! `original` is re-rendered from its fields, keeping the receiver's marker
//! style. The receiver is never modified.

use crate::version::error::{Component, VersionError};
use crate::version::flags::Flags;
use crate::version::scanner::{MAX_COMPONENT, is_numeric, is_valid_dotted};
use crate::version::types::Version;

pub const DEFAULT_PRERELEASE_BASE: &str = "rc";

impl Version {
    /// `MAJOR.MINOR.PATCH+1`, prerelease and build cleared.
    pub fn bump_patch(&self) -> Result<Version, VersionError> {
        let patch = increment(self.checked()?.patch, Component::Patch)?;
        Ok(self.released(self.major, self.minor, patch))
    }

    /// `MAJOR.MINOR+1.0`, prerelease and build cleared.
    pub fn bump_minor(&self) -> Result<Version, VersionError> {
        let minor = increment(self.checked()?.minor, Component::Minor)?;
        Ok(self.released(self.major, minor, 0))
    }

    /// `MAJOR+1.0.0`, prerelease and build cleared.
    pub fn bump_major(&self) -> Result<Version, VersionError> {
        let major = increment(self.checked()?.major, Component::Major)?;
        Ok(self.released(major, 0, 0))
    }

    /// Replace the prerelease (given without the leading `-`).
    ///
    /// A shorthand receiver is promoted to a full core. An empty `prerelease`
    /// removes it.
    pub fn with_prerelease(&self, prerelease: &str) -> Result<Version, VersionError> {
        self.checked()?;
        if !prerelease.is_empty() && !is_valid_dotted(prerelease, true) {
            return Err(VersionError::InvalidPrerelease(prerelease.to_string()));
        }

        let mut next = self.promoted();
        next.prerelease = prerelease.to_string();
        next.flags.set(Flags::PRERELEASE, !prerelease.is_empty());
        Ok(next.rerendered())
    }

    /// Replace the build metadata (given without the leading `+`).
    ///
    /// A shorthand receiver is promoted to a full core. An empty `build`
    /// removes it.
    pub fn with_build(&self, build: &str) -> Result<Version, VersionError> {
        self.checked()?;
        if !build.is_empty() && !is_valid_dotted(build, false) {
            return Err(VersionError::InvalidBuild(build.to_string()));
        }

        let mut next = self.promoted();
        next.build = build.to_string();
        next.flags.set(Flags::BUILD, !build.is_empty());
        Ok(next.rerendered())
    }

    pub fn strip_prerelease(&self) -> Result<Version, VersionError> {
        let mut next = self.checked()?.clone();
        next.prerelease.clear();
        next.flags.remove(Flags::PRERELEASE);
        Ok(next.rerendered())
    }

    pub fn strip_build(&self) -> Result<Version, VersionError> {
        let mut next = self.checked()?.clone();
        next.build.clear();
        next.flags.remove(Flags::BUILD);
        Ok(next.rerendered())
    }

    /// Advance the prerelease counter.
    ///
    /// - no prerelease: `<base>.1` (`base` defaults to `rc` when empty)
    /// - numeric last identifier: incremented (`rc.9` -> `rc.10`)
    /// - otherwise: `.1` appended (`beta` -> `beta.1`)
    ///
    /// Build metadata is dropped.
    pub fn next_prerelease(&self, base: &str) -> Result<Version, VersionError> {
        self.checked()?;

        let prerelease = if self.prerelease.is_empty() {
            let base = if base.is_empty() {
                DEFAULT_PRERELEASE_BASE
            } else {
                base
            };
            format!("{base}.1")
        } else {
            match self.prerelease.rsplit_once('.') {
                Some((head, last)) if is_numeric(last.as_bytes()) => {
                    format!("{head}.{}", increment_decimal(last))
                }
                None if is_numeric(self.prerelease.as_bytes()) => {
                    increment_decimal(&self.prerelease)
                }
                _ => format!("{}.1", self.prerelease),
            }
        };

        if !is_valid_dotted(&prerelease, true) {
            return Err(VersionError::InvalidPrerelease(prerelease));
        }

        let mut next = self.promoted();
        next.prerelease = prerelease;
        next.flags.insert(Flags::PRERELEASE);
        next.build.clear();
        next.flags.remove(Flags::BUILD);
        Ok(next.rerendered())
    }

    fn checked(&self) -> Result<&Version, VersionError> {
        if self.valid {
            Ok(self)
        } else {
            Err(VersionError::InvalidReceiver {
                original: self.original.clone(),
            })
        }
    }

    fn promoted(&self) -> Version {
        let mut next = self.clone();
        if !next.flags.contains(Flags::MINOR) {
            next.minor = 0;
        }
        if !next.flags.contains(Flags::PATCH) {
            next.patch = 0;
        }
        next.flags.insert(Flags::CORE);
        next
    }

    fn released(&self, major: u64, minor: u64, patch: u64) -> Version {
        let mut next = self.clone();
        next.major = major;
        next.minor = minor;
        next.patch = patch;
        next.prerelease.clear();
        next.build.clear();
        next.flags.insert(Flags::CORE);
        next.flags.remove(Flags::PRERELEASE | Flags::BUILD);
        next.rerendered()
    }

    fn rerendered(mut self) -> Version {
        self.original = self.full(false);
        self
    }
}

fn increment(value: u64, component: Component) -> Result<u64, VersionError> {
    value
        .checked_add(1)
        .filter(|&n| n <= MAX_COMPONENT)
        .ok_or(VersionError::Overflow(component))
}

/// Add one to a string of ASCII digits, growing it on carry-out.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    bytes.into_iter().map(char::from).collect()
}
