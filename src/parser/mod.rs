//! Turns raw listing-tool output into connection records.
//!
//! Both strategies tolerate formatting drift between tool versions by
//! requiring only a minimum number of columns; rows below that threshold
//! are dropped without raising an error.

mod unix;
mod windows;

pub use unix::LsofParser;
pub use windows::NetstatParser;

use crate::model::ConnectionRecord;
use crate::platform::{Platform, PlatformFamily};

/// Parses one tool's tabular output, preserving row order.
pub trait ParseStrategy {
    fn parse(&self, raw: &str) -> Vec<ConnectionRecord>;
}

/// Picks the parser matching the command the platform runs.
pub fn strategy_for(platform: Platform) -> &'static dyn ParseStrategy {
    match platform.family() {
        PlatformFamily::Unix => &LsofParser,
        PlatformFamily::Windows => &NetstatParser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_strategy_by_family() {
        let lsof = "COMMAND PID USER FD TYPE DEVICE SIZE NODE NAME\nnode 1 me 3u IPv4 0x1 0t0 TCP *:80";
        assert_eq!(strategy_for(Platform::Linux).parse(lsof).len(), 1);
        assert_eq!(strategy_for(Platform::Darwin).parse(lsof).len(), 1);
        // The header row is data to the Windows parser.
        assert_eq!(strategy_for(Platform::Win32).parse(lsof).len(), 2);
    }
}
