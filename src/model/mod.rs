pub mod common;
pub use common::{ConnectionRecord, Lookup, LsofEntry, NetstatEntry, ProcessSummary, Report};
