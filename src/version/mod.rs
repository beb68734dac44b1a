//! Semantic version values: parsing, precedence, mutation and rendering
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Scanner   │────▶│   Parser    │────▶│   Version   │
//! │ (bytes/ints)│     │ (one pass)  │     │   (value)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                       │
//!        │            ┌──────────────┬───────────┼───────────┐
//!        │            ▼              ▼           ▼           ▼
//!        │     ┌────────────┐ ┌────────────┐ ┌────────┐ ┌────────┐
//!        └─────│    Bump    │ │  Compare   │ │ Render │ │  List  │
//!              │ (mutators) │ │(precedence)│ │ (text) │ │ (sort) │
//!              └────────────┘ └────────────┘ └────────┘ └────────┘
//! ```
//!
//! # Modules
//!
//! - [`scanner`]: allocation-free recognizers for numbers and identifier runs
//! - [`parser`]: single-pass parser with `v` marker and shorthand support
//! - [`types`]: the [`Version`] value and its presence accessors
//! - [`flags`]: presence flags recorded at parse time
//! - [`compare`]: SemVer precedence and prerelease ordering
//! - [`render`]: flag-driven text output
//! - [`bump`]: value-returning mutators
//! - [`list`]: sorting with a deterministic tie-break
//! - [`error`]: parse and mutation errors

pub mod bump;
pub mod compare;
pub mod error;
pub mod flags;
pub mod list;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod types;

pub use compare::compare_prerelease;
pub use error::{Component, ParseError, VersionError};
pub use flags::Flags;
pub use list::VersionList;
pub use parser::{parse, try_parse};
pub use render::{RenderFlags, RenderMode};
pub use types::Version;
