use crate::model::{ConnectionRecord, ProcessSummary};

use std::collections::HashMap;

/// Merges records by pid. Output follows first-seen pid order and each
/// summary keeps the fields of its pid's first record.
pub fn aggregate<I>(records: I) -> Vec<ProcessSummary>
where
    I: IntoIterator<Item = ConnectionRecord>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut summaries: Vec<ProcessSummary> = Vec::new();

    for record in records {
        match index.get(record.pid()) {
            Some(&slot) => summaries[slot].connection_count += 1,
            None => {
                index.insert(record.pid().to_string(), summaries.len());
                summaries.push(ProcessSummary::new(record));
            }
        }
    }

    log::debug!("aggregated into {} process(es)", summaries.len());
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LsofEntry;

    fn lsof(command: &str, pid: &str, user: &str) -> ConnectionRecord {
        ConnectionRecord::Unix(LsofEntry {
            command: command.into(),
            pid: pid.into(),
            user: user.into(),
            fd: "3u".into(),
            kind: "IPv4".into(),
            device: "0x1".into(),
            size: "0t0".into(),
            node: "TCP".into(),
            name: "*:3000".into(),
        })
    }

    #[test]
    fn same_pid_collapses_into_one_summary() {
        let records = vec![
            lsof("node", "123", "alice"),
            lsof("renamed", "123", "bob"),
            lsof("other", "123", "carol"),
        ];
        let summaries = aggregate(records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].connection_count, 3);
        assert_eq!(summaries[0].record, lsof("node", "123", "alice"));
    }

    #[test]
    fn distinct_pids_keep_first_seen_order() {
        let records = vec![
            lsof("b", "20", "u"),
            lsof("a", "10", "u"),
            lsof("b", "20", "u"),
            lsof("c", "30", "u"),
            lsof("a", "10", "u"),
        ];
        let summaries = aggregate(records);
        let pids: Vec<&str> = summaries.iter().map(ProcessSummary::pid).collect();
        assert_eq!(pids, ["20", "10", "30"]);
        let counts: Vec<usize> = summaries.iter().map(|s| s.connection_count).collect();
        assert_eq!(counts, [2, 2, 1]);
    }

    #[test]
    fn no_records_no_summaries() {
        assert!(aggregate(Vec::new()).is_empty());
    }
}
