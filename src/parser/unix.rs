use crate::model::{ConnectionRecord, LsofEntry};
use crate::parser::ParseStrategy;

/// Columns in a well-formed `lsof` row.
const MIN_COLUMNS: usize = 9;

/// Parses `lsof -i` output: a header row followed by one row per socket.
#[derive(Debug, Default, Clone, Copy)]
pub struct LsofParser;

impl ParseStrategy for LsofParser {
    fn parse(&self, raw: &str) -> Vec<ConnectionRecord> {
        let lines: Vec<&str> = raw.trim().lines().collect();
        if lines.len() < 2 {
            return Vec::new();
        }

        let mut records = Vec::new();
        for line in lines.iter().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match parse_lsof_line(line) {
                Some(entry) => records.push(ConnectionRecord::Unix(entry)),
                None => log::debug!("skipping malformed lsof row: {line:?}"),
            }
        }

        records
    }
}

fn parse_lsof_line(line: &str) -> Option<LsofEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_COLUMNS {
        return None;
    }

    Some(LsofEntry {
        command: parts[0].to_string(),
        pid: parts[1].to_string(),
        user: parts[2].to_string(),
        fd: parts[3].to_string(),
        kind: parts[4].to_string(),
        device: parts[5].to_string(),
        size: parts[6].to_string(),
        node: parts[7].to_string(),
        // Trailing "(LISTEN)" and similar state markers stay with the name.
        name: parts[8..].join(" "),
    })
}
