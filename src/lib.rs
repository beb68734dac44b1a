//! Parse, compare, bump and render semantic version tags.
//!
//! ```
//! use semtag::version::{RenderMode, Version};
//!
//! let tag = Version::parse("1.2");
//! assert_eq!(tag.canonical(), "v1.2.0");
//!
//! let next = Version::parse("v1.2.3-rc.9").next_prerelease("rc").unwrap();
//! assert_eq!(next.render_mode(RenderMode::Full), "v1.2.3-rc.10");
//! ```

pub mod cli;
pub mod config;
pub mod version;
