//! Flutter toolchain version alignment.
//! Optional pre-step before project creation: compares the installed
//! Flutter version against the requested one and drives `fvm` or the
//! `flutter` channel commands to switch. Everything here runs through
//! external processes; project creation never depends on the outcome.

use crate::error::{Error, Result};
use crate::prompt::confirm;
use log::{debug, warn};
use regex::Regex;
use std::process::Command;

/// Release channels the `flutter channel` command understands
const CHANNELS: [&str; 3] = ["stable", "beta", "master"];

/// Installed toolchain version as reported by `flutter --version`.
#[derive(Debug, PartialEq)]
pub struct ToolchainVersion {
    pub version: String,
    pub channel: String,
}

/// Parses `flutter --version` output into a ToolchainVersion.
///
/// # Returns
/// * `Option<ToolchainVersion>` - None when the output carries no
///   recognizable version or channel token
pub fn parse_version_output(output: &str) -> Option<ToolchainVersion> {
    let version = Regex::new(r"Flutter (\S+)").unwrap().captures(output)?[1].to_string();
    let channel = Regex::new(r"channel (\S+)").unwrap().captures(output)?[1].to_string();
    Some(ToolchainVersion { version, channel })
}

/// Queries the installed toolchain via `flutter --version`.
fn installed_version() -> Result<ToolchainVersion> {
    let output = Command::new("flutter")
        .arg("--version")
        .output()
        .map_err(Error::IoError)?;

    if !output.status.success() {
        return Err(Error::ToolchainError(format!(
            "'flutter --version' failed with status: {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_version_output(&stdout).ok_or_else(|| {
        Error::ToolchainError("could not parse 'flutter --version' output".to_string())
    })
}

/// Runs an external toolchain command, inheriting stdout and stderr.
fn run_command(program: &str, args: &[&str]) -> Result<()> {
    debug!("Running '{} {}'", program, args.join(" "));

    let status = Command::new(program).args(args).status().map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::ToolchainError(format!(
            "'{} {}' failed with status: {}",
            program,
            args.join(" "),
            status
        )));
    }
    Ok(())
}

/// Aligns the installed Flutter toolchain with `requested`, a semantic
/// version or a channel name.
///
/// # Behavior
/// - No-op when the installed toolchain already matches
/// - Asks for confirmation before switching, since the switch mutates
///   the global toolchain; `skip_version_check` suppresses the prompt
/// - Channel names go through `flutter channel` plus `flutter upgrade`;
///   versions go through `fvm use`
pub fn switch_version(requested: &str, skip_version_check: bool) -> Result<()> {
    let installed = installed_version()?;
    let is_channel = CHANNELS.contains(&requested);

    let matches = if is_channel {
        installed.channel == requested
    } else {
        installed.version == requested
    };
    if matches {
        println!(
            "Flutter {} (channel {}) already active.",
            installed.version, installed.channel
        );
        return Ok(());
    }

    let confirmed = confirm(
        skip_version_check,
        format!(
            "Switch the active Flutter toolchain from {} (channel {}) to {}?",
            installed.version, installed.channel, requested
        ),
    )?;
    if !confirmed {
        warn!(
            "Keeping Flutter {} (channel {}).",
            installed.version, installed.channel
        );
        return Ok(());
    }

    if is_channel {
        run_command("flutter", &["channel", requested])?;
        run_command("flutter", &["upgrade"])?;
    } else {
        run_command("fvm", &["use", requested])?;
    }

    println!("Flutter toolchain switched to {}.", requested);
    Ok(())
}
