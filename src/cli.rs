//! Command-line front end

use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SemtagConfig;
use crate::version::{RenderMode, Version, VersionList, try_parse};

#[derive(Debug, Parser)]
#[command(name = "semtag")]
#[command(version, about = "Parse, compare, bump and render semantic version tags")]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/semtag/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Output form, overriding the config
    #[arg(long, global = true, value_enum)]
    pub mode: Option<RenderMode>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate versions and print them; exits non-zero if any is invalid
    Parse {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print -1, 0 or 1 by SemVer precedence
    Compare { left: String, right: String },
    /// Sort versions (arguments, or stdin lines when none are given)
    Sort {
        versions: Vec<String>,
        #[arg(long)]
        reverse: bool,
    },
    /// Increment a core component, clearing prerelease and build
    Bump {
        #[arg(value_enum)]
        part: Part,
        version: String,
    },
    /// Advance the prerelease counter
    Pre {
        version: String,
        /// Base used when there is no prerelease yet
        #[arg(long)]
        base: Option<String>,
    },
    /// Replace or strip prerelease and build metadata
    Set {
        version: String,
        #[arg(long, conflicts_with = "strip_pre")]
        pre: Option<String>,
        #[arg(long, conflicts_with = "strip_build")]
        build: Option<String>,
        #[arg(long)]
        strip_pre: bool,
        #[arg(long)]
        strip_build: bool,
    },
    /// Render a version in the selected --mode
    Render { version: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

/// Machine-readable description of one input.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

impl VersionReport {
    fn new(input: &str, mode: RenderMode) -> Self {
        match try_parse(input) {
            Ok(version) => Self {
                input: input.to_string(),
                valid: true,
                error: None,
                rendered: Some(version.render_mode(mode)),
                major: Some(version.major()),
                minor: Some(version.minor()),
                patch: Some(version.patch()),
                prerelease: version
                    .has_prerelease()
                    .then(|| version.prerelease().to_string()),
                build: version.has_build().then(|| version.build().to_string()),
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                error: Some(e.to_string()),
                rendered: None,
                major: None,
                minor: None,
                patch: None,
                prerelease: None,
                build: None,
            },
        }
    }
}

/// Output settings after merging CLI flags over the config.
#[derive(Debug, Clone)]
struct Output {
    mode: RenderMode,
    json: bool,
    base: String,
}

impl Output {
    fn new(cli: &Cli, config: &SemtagConfig) -> Self {
        Self {
            mode: cli.mode.unwrap_or(config.output.mode),
            json: cli.json || config.output.json,
            base: config.prerelease.base.clone(),
        }
    }

    fn write_version(&self, out: &mut impl Write, version: &Version) -> anyhow::Result<()> {
        if self.json {
            let report = VersionReport::new(version.original(), self.mode);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", version.render_mode(self.mode))?;
        }
        Ok(())
    }
}

/// Run `cli`, reading stdin-style input from `input` and writing to `out`.
///
/// Returns `false` when the command ran but found invalid versions.
pub fn run(
    cli: &Cli,
    config: &SemtagConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let output = Output::new(cli, config);
    debug!("Running {:?} with {:?}", cli.command, output);

    match &cli.command {
        Command::Parse { versions } => {
            let mut all_valid = true;
            for text in versions {
                let report = VersionReport::new(text, output.mode);
                all_valid &= report.valid;
                if output.json {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else if let Some(rendered) = &report.rendered {
                    writeln!(out, "{rendered}")?;
                } else {
                    let reason = report.error.as_deref().unwrap_or("invalid");
                    warn!("Invalid version '{}': {}", text, reason);
                    writeln!(out, "invalid: {text}: {reason}")?;
                }
            }
            Ok(all_valid)
        }
        Command::Compare { left, right } => {
            let ordering = Version::parse(left).compare(&Version::parse(right));
            let value = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            if output.json {
                writeln!(out, "{}", serde_json::json!({ "ordering": value }))?;
            } else {
                writeln!(out, "{value}")?;
            }
            Ok(true)
        }
        Command::Sort { versions, reverse } => {
            let lines = if versions.is_empty() {
                read_lines(input)?
            } else {
                versions.clone()
            };

            let mut list: VersionList = lines.iter().map(String::as_str).collect();
            list.sort_ascending();
            if *reverse {
                list.reverse();
            }

            if output.json {
                let reports: Vec<_> = list
                    .iter()
                    .map(|v| VersionReport::new(v.original(), output.mode))
                    .collect();
                writeln!(out, "{}", serde_json::to_string(&reports)?)?;
            } else {
                for version in list.iter() {
                    writeln!(out, "{}", version.original())?;
                }
            }
            Ok(true)
        }
        Command::Bump { part, version } => {
            let version = parse_valid(version)?;
            let bumped = match part {
                Part::Major => version.bump_major(),
                Part::Minor => version.bump_minor(),
                Part::Patch => version.bump_patch(),
            }?;
            output.write_version(out, &bumped)?;
            Ok(true)
        }
        Command::Pre { version, base } => {
            let base = base.as_deref().unwrap_or(&output.base);
            let next = parse_valid(version)?.next_prerelease(base)?;
            output.write_version(out, &next)?;
            Ok(true)
        }
        Command::Set {
            version,
            pre,
            build,
            strip_pre,
            strip_build,
        } => {
            let mut version = parse_valid(version)?;
            if *strip_pre {
                version = version.strip_prerelease()?;
            }
            if *strip_build {
                version = version.strip_build()?;
            }
            if let Some(pre) = pre {
                version = version.with_prerelease(pre)?;
            }
            if let Some(build) = build {
                version = version.with_build(build)?;
            }
            output.write_version(out, &version)?;
            Ok(true)
        }
        Command::Render { version } => {
            let version = parse_valid(version)?;
            output.write_version(out, &version)?;
            Ok(true)
        }
    }
}

fn parse_valid(text: &str) -> anyhow::Result<Version> {
    try_parse(text).with_context(|| format!("Invalid version '{text}'"))
}

fn read_lines(input: &mut impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    if lines.is_empty() {
        bail!("No versions given");
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_args(args: &[&str], stdin: &str) -> (anyhow::Result<bool>, String) {
        let cli = Cli::try_parse_from(std::iter::once("semtag").chain(args.iter().copied()))
            .unwrap();
        let mut input = stdin.as_bytes();
        let mut out = Vec::new();
        let result = run(&cli, &SemtagConfig::default(), &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case(&["parse", "1.2"], "v1.2.0\n")]
    #[case(&["parse", "--mode", "full", "V1.2.3+meta"], "V1.2.3+meta\n")]
    #[case(&["compare", "1.2.3", "1.2.3-rc.1"], "1\n")]
    #[case(&["compare", "1.2.3+a", "v1.2.3+b"], "0\n")]
    #[case(&["compare", "bad", "0.0.1"], "-1\n")]
    #[case(&["bump", "minor", "1.2.3-rc.1"], "v1.3.0\n")]
    #[case(&["pre", "1.2.3-rc.9"], "v1.2.3-rc.10\n")]
    #[case(&["pre", "1.2.3", "--base", "beta"], "v1.2.3-beta.1\n")]
    #[case(&["set", "1", "--pre", "alpha.1", "--build", "b.5", "--mode", "bare"], "1.0.0-alpha.1+b.5\n")]
    #[case(&["set", "1.2.3-rc.1+meta", "--strip-pre", "--mode", "full"], "1.2.3+meta\n")]
    #[case(&["render", "--mode", "major-minor", "v3.4.5"], "v3.4\n")]
    fn run_prints_expected(#[case] args: &[&str], #[case] expected: &str) {
        let (result, out) = run_args(args, "");

        assert!(result.unwrap());
        assert_eq!(out, expected);
    }

    #[test]
    fn parse_reports_invalid_inputs() {
        let (result, out) = run_args(&["parse", "1.2.3", "v1-pre"], "");

        assert!(!result.unwrap());
        assert_eq!(
            out,
            "v1.2.3\ninvalid: v1-pre: prerelease and build metadata require MAJOR.MINOR.PATCH\n"
        );
    }

    #[test]
    fn parse_json_includes_components() {
        let (_, out) = run_args(&["parse", "--json", "1.2.3-rc.1+b"], "");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "input": "1.2.3-rc.1+b",
                "valid": true,
                "rendered": "v1.2.3-rc.1",
                "major": 1,
                "minor": 2,
                "patch": 3,
                "prerelease": "rc.1",
                "build": "b"
            })
        );
    }

    #[test]
    fn sort_reads_stdin_when_no_arguments() {
        let (result, out) = run_args(&["sort"], "1.10.0\nbad\n\n1.2.0\n1.2.0-rc.1\n");

        assert!(result.unwrap());
        assert_eq!(out, "bad\n1.2.0-rc.1\n1.2.0\n1.10.0\n");
    }

    #[test]
    fn sort_reverse_prints_descending() {
        let (_, out) = run_args(&["sort", "--reverse", "1.0.0", "2.0.0", "1.5.0"], "");
        assert_eq!(out, "2.0.0\n1.5.0\n1.0.0\n");
    }

    #[test]
    fn sort_fails_on_empty_stdin() {
        let (result, _) = run_args(&["sort"], "\n");
        assert!(result.is_err());
    }

    #[rstest]
    #[case(&["bump", "patch", "1.2-pre"])]
    #[case(&["set", "1.2.3", "--pre", "01"])]
    #[case(&["render", ""])]
    fn run_fails_on_invalid_arguments(#[case] args: &[&str]) {
        let (result, _) = run_args(args, "");
        assert!(result.is_err());
    }

    #[test]
    fn config_supplies_mode_and_base() {
        let cli = Cli::try_parse_from(["semtag", "pre", "2.0.0"]).unwrap();
        let mut config = SemtagConfig::default();
        config.output.mode = RenderMode::Bare;
        config.prerelease.base = "alpha".to_string();
        let mut out = Vec::new();

        run(&cli, &config, &mut "".as_bytes(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "2.0.0-alpha.1\n");
    }
}
