use crate::platform::Platform;

/// One row of `lsof` output.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LsofEntry {
    pub command: String,
    pub pid: String,
    pub user: String,
    pub fd: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub device: String,
    pub size: String,
    pub node: String,
    pub name: String,
}

/// One row of `netstat -ano` output.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetstatEntry {
    pub protocol: String,
    pub local_address: String,
    pub foreign_address: String,
    pub state: String,
    pub pid: String,
}

/// A single socket entry parsed from the listing tool.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConnectionRecord {
    Unix(LsofEntry),
    Windows(NetstatEntry),
}

impl ConnectionRecord {
    /// Grouping key.
    pub fn pid(&self) -> &str {
        match self {
            ConnectionRecord::Unix(entry) => &entry.pid,
            ConnectionRecord::Windows(entry) => &entry.pid,
        }
    }
}

/// All records of one process, keeping the fields of the first one seen.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    #[serde(flatten)]
    pub record: ConnectionRecord,
    pub connection_count: usize,
}

impl ProcessSummary {
    pub fn new(record: ConnectionRecord) -> Self {
        Self {
            record,
            connection_count: 1,
        }
    }

    pub fn pid(&self) -> &str {
        self.record.pid()
    }

    pub fn ref_array(&self) -> Vec<String> {
        let mut row = match &self.record {
            ConnectionRecord::Unix(e) => vec![
                e.command.clone(),
                e.pid.clone(),
                e.user.clone(),
                e.fd.clone(),
                e.kind.clone(),
                e.device.clone(),
                e.size.clone(),
                e.node.clone(),
                e.name.clone(),
            ],
            ConnectionRecord::Windows(e) => vec![
                e.protocol.clone(),
                e.local_address.clone(),
                e.foreign_address.clone(),
                e.state.clone(),
                e.pid.clone(),
            ],
        };
        row.push(self.connection_count.to_string());
        row
    }
}

/// Outcome of a lookup. `NotFound` is kept apart from an empty listing so
/// the caller can word it differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NotFound,
    Found(Vec<ProcessSummary>),
}

impl Lookup {
    /// Wraps aggregated summaries, collapsing an empty set into `NotFound`.
    pub fn from_summaries(summaries: Vec<ProcessSummary>) -> Self {
        if summaries.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(summaries)
        }
    }

    pub fn summaries(&self) -> &[ProcessSummary] {
        match self {
            Lookup::NotFound => &[],
            Lookup::Found(summaries) => summaries,
        }
    }
}

/// Serializable view of a finished lookup.
#[derive(serde::Serialize, Debug)]
pub struct Report<'a> {
    pub port: u16,
    pub platform: Platform,
    pub processes: &'a [ProcessSummary],
}

impl<'a> Report<'a> {
    pub fn new(port: u16, platform: Platform, lookup: &'a Lookup) -> Self {
        Self {
            port,
            platform,
            processes: lookup.summaries(),
        }
    }
}
