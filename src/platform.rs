use crate::error::{PortCheckError, Result};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Host operating systems with a known port listing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Win32,
}

/// Which table layout the listing command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Unix,
    Windows,
}

pub const SUPPORTED_PLATFORMS: &str = "macOS (darwin), Linux, Windows (win32)";

impl Platform {
    /// Detects the platform this binary was built for.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a Rust `target_os` name onto a platform identifier.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Platform::Darwin),
            "windows" => Ok(Platform::Win32),
            other => other.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
        }
    }

    pub fn family(&self) -> PlatformFamily {
        match self {
            Platform::Darwin | Platform::Linux => PlatformFamily::Unix,
            Platform::Win32 => PlatformFamily::Windows,
        }
    }

    /// The exact command line that lists the holders of `port`.
    pub fn command_for(&self, port: u16) -> CommandLine {
        let line = match self.family() {
            PlatformFamily::Unix => format!("lsof -i tcp:{port}"),
            PlatformFamily::Windows => format!("netstat -ano | findstr :{port}"),
        };
        log::debug!("resolved command for {}: {line}", self.as_str());
        CommandLine {
            family: self.family(),
            line,
        }
    }

    /// Hints printed after the listing tool itself failed.
    pub fn troubleshooting_hints(&self) -> Vec<&'static str> {
        let tool = match self.family() {
            PlatformFamily::Windows => "  - netstat (built into Windows)",
            PlatformFamily::Unix => {
                "  - lsof (install with: brew install lsof on macOS, apt-get install lsof on Linux)"
            }
        };
        vec![
            "- Make sure you have the required tools installed:",
            tool,
            "- Try running with administrator/sudo privileges if needed",
        ]
    }
}

impl FromStr for Platform {
    type Err = PortCheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "darwin" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "win32" => Ok(Platform::Win32),
            other => Err(PortCheckError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal shell command line together with the shell that runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub family: PlatformFamily,
    pub line: String,
}

impl CommandLine {
    /// Shell program and arguments needed to run the line, so pipes work.
    pub fn shell_invocation(&self) -> (&'static str, [&str; 2]) {
        match self.family {
            PlatformFamily::Unix => ("sh", ["-c", self.line.as_str()]),
            PlatformFamily::Windows => ("cmd", ["/C", self.line.as_str()]),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Parses a port argument, accepting only integers in 1..=65535.
pub fn validate_port(s: &str) -> Result<u16> {
    let invalid =
        || PortCheckError::InvalidArgument("Port must be a number between 1 and 65535.".into());

    let value: i64 = s.trim().parse().map_err(|_| invalid())?;
    if !(1..=65535).contains(&value) {
        return Err(invalid());
    }
    u16::try_from(value).map_err(|_| invalid())
}
