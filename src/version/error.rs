use thiserror::Error;

/// Why an input was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty version string")]
    Empty,

    #[error("version marker without a number")]
    MarkerOnly,

    #[error("invalid {0} component")]
    InvalidNumber(Component),

    #[error("prerelease and build metadata require MAJOR.MINOR.PATCH")]
    ShorthandSuffix,

    #[error("invalid prerelease")]
    InvalidPrerelease,

    #[error("invalid build metadata")]
    InvalidBuild,

    #[error("unexpected trailing input at byte {0}")]
    TrailingInput(usize),
}

/// Numeric core component, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        })
    }
}

/// Why a mutation could not produce a new version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version: {original:?}")]
    InvalidReceiver { original: String },

    #[error("invalid prerelease: {0:?}")]
    InvalidPrerelease(String),

    #[error("invalid build metadata: {0:?}")]
    InvalidBuild(String),

    #[error("{0} component overflow")]
    Overflow(Component),
}
