use crate::model::{ConnectionRecord, NetstatEntry};
use crate::parser::ParseStrategy;

const MIN_COLUMNS: usize = 5;

/// Parses `netstat -ano` rows that survived the `findstr` filter. The filter
/// strips the header, so every line is data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetstatParser;

impl ParseStrategy for NetstatParser {
    fn parse(&self, raw: &str) -> Vec<ConnectionRecord> {
        raw.trim()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let entry = parse_netstat_line(line);
                if entry.is_none() {
                    log::debug!("skipping malformed netstat row: {line:?}");
                }
                entry
            })
            .map(ConnectionRecord::Windows)
            .collect()
    }
}

fn parse_netstat_line(line: &str) -> Option<NetstatEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_COLUMNS {
        return None;
    }

    Some(NetstatEntry {
        protocol: parts[0].to_string(),
        local_address: parts[1].to_string(),
        foreign_address: parts[2].to_string(),
        state: parts[3].to_string(),
        pid: parts[4].to_string(),
    })
}
