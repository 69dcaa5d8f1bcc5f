//! `port-check` shows which processes hold a TCP port open.
//!
//! The lookup delegates socket enumeration to the host's own tooling
//! (`lsof` on macOS and Linux, `netstat` on Windows), parses the table it
//! prints and folds repeated rows into one summary per process.

pub mod aggregate;
pub mod check;
pub mod error;
pub mod executor;
pub mod export;
pub mod model;
pub mod parser;
pub mod platform;
pub mod presenter;

pub use check::{check_port, check_port_on};
pub use error::PortCheckError;
pub use executor::{CommandExecutor, ExecFailure, ShellExecutor};
pub use model::{ConnectionRecord, Lookup, ProcessSummary, Report};
pub use platform::Platform;
