//! Presence flags recorded at parse time

use bitflags::bitflags;

bitflags! {
    /// Which components were explicitly present in the input (vs. zero-filled).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Input had a leading `v`/`V`
        const MARKER = 1 << 0;
        /// Always set for a valid version
        const MAJOR = 1 << 1;
        const MINOR = 1 << 2;
        const PATCH = 1 << 3;
        const PRERELEASE = 1 << 4;
        const BUILD = 1 << 5;

        const CORE = Self::MAJOR.bits() | Self::MINOR.bits() | Self::PATCH.bits();
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}
