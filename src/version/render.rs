//! Flag-driven rendering of a [`Version`]
//!
//! Every textual form is produced by [`Version::render`] from a set of
//! [`RenderFlags`]. When neither `MARKER` nor `NO_MARKER` is given, the marker
//! style of the original input is preserved (`v`, `V`, or none).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::version::flags::Flags;
use crate::version::types::Version;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u16 {
        /// Always emit a lowercase `v`
        const MARKER = 1 << 0;
        /// Never emit a marker
        const NO_MARKER = 1 << 1;

        const MAJOR = 1 << 2;
        const MINOR = 1 << 3;
        const PATCH = 1 << 4;

        /// Emit `-PRERELEASE` when present
        const PRERELEASE = 1 << 5;
        /// Emit `+BUILD` when present
        const BUILD = 1 << 6;

        /// `MAJOR.MINOR.PATCH`
        const RELEASE = Self::MAJOR.bits() | Self::MINOR.bits() | Self::PATCH.bits();
        /// `vMAJOR.MINOR.PATCH[-PRERELEASE]`
        const CANONICAL = Self::MARKER.bits() | Self::RELEASE.bits() | Self::PRERELEASE.bits();
        /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
        const BARE = Self::NO_MARKER.bits()
            | Self::RELEASE.bits()
            | Self::PRERELEASE.bits()
            | Self::BUILD.bits();
        /// Original marker style, everything present
        const DEFAULT = Self::RELEASE.bits() | Self::PRERELEASE.bits() | Self::BUILD.bits();
    }
}

/// Named output forms, selectable from the CLI and config.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// vMAJOR.MINOR.PATCH[-PRERELEASE]
    #[default]
    Canonical,
    /// Original marker, prerelease and build
    Full,
    /// MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]
    Bare,
    /// vMAJOR
    Major,
    /// vMAJOR.MINOR
    MajorMinor,
    /// vMAJOR.MINOR.PATCH
    Release,
}

impl RenderMode {
    pub fn flags(self) -> RenderFlags {
        match self {
            RenderMode::Canonical => RenderFlags::CANONICAL,
            RenderMode::Full => RenderFlags::DEFAULT,
            RenderMode::Bare => RenderFlags::BARE,
            RenderMode::Major => RenderFlags::MARKER | RenderFlags::MAJOR,
            RenderMode::MajorMinor => {
                RenderFlags::MARKER | RenderFlags::MAJOR | RenderFlags::MINOR
            }
            RenderMode::Release => RenderFlags::MARKER | RenderFlags::RELEASE,
        }
    }
}

impl Version {
    /// Render according to `flags`. Returns an empty string for an invalid value.
    ///
    /// Requested MINOR/PATCH are zero-filled when they were absent from the
    /// input. Requesting PATCH implies MINOR and MAJOR so the output keeps its
    /// shape. Prerelease and build are never invented.
    pub fn render(&self, flags: RenderFlags) -> String {
        if !self.valid {
            return String::new();
        }

        let marker = if flags.contains(RenderFlags::MARKER) {
            Some('v')
        } else if flags.contains(RenderFlags::NO_MARKER) {
            None
        } else if self.has_marker() {
            self.original.chars().next()
        } else {
            None
        };

        let with_patch = flags.contains(RenderFlags::PATCH);
        let with_minor = with_patch || flags.contains(RenderFlags::MINOR);
        let with_major = with_minor || flags.contains(RenderFlags::MAJOR);

        let minor = if self.flags.contains(Flags::MINOR) { self.minor } else { 0 };
        let patch = if self.flags.contains(Flags::PATCH) { self.patch } else { 0 };

        let with_prerelease = flags.contains(RenderFlags::PRERELEASE)
            && self.has_prerelease()
            && !self.prerelease.is_empty();
        let with_build =
            flags.contains(RenderFlags::BUILD) && self.has_build() && !self.build.is_empty();

        let mut out = String::with_capacity(self.original.len() + 8);
        if let Some(c) = marker {
            out.push(c);
        }
        if with_major {
            out.push_str(&self.major.to_string());
        }
        if with_minor {
            out.push('.');
            out.push_str(&minor.to_string());
        }
        if with_patch {
            out.push('.');
            out.push_str(&patch.to_string());
        }
        if with_prerelease {
            out.push('-');
            out.push_str(&self.prerelease);
        }
        if with_build {
            out.push('+');
            out.push_str(&self.build);
        }
        out
    }

    pub fn render_mode(&self, mode: RenderMode) -> String {
        self.render(mode.flags())
    }

    /// `vMAJOR.MINOR.PATCH[-PRERELEASE]`, build stripped.
    pub fn canonical(&self) -> String {
        self.render(RenderFlags::CANONICAL)
    }

    /// Everything present. With `force_marker` a lowercase `v` is always
    /// emitted; otherwise the original marker style is kept.
    pub fn full(&self, force_marker: bool) -> String {
        let mut flags = RenderFlags::DEFAULT;
        if force_marker {
            flags |= RenderFlags::MARKER;
        }
        self.render(flags)
    }

    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` without a marker.
    pub fn bare(&self) -> String {
        self.render(RenderFlags::BARE)
    }

    pub fn major_str(&self) -> String {
        self.render_mode(RenderMode::Major)
    }

    pub fn major_minor_str(&self) -> String {
        self.render_mode(RenderMode::MajorMinor)
    }

    pub fn release_str(&self) -> String {
        self.render_mode(RenderMode::Release)
    }
}
