use crate::error::PortCheckError;
use crate::model::{ConnectionRecord, Lookup, ProcessSummary};
use crate::platform::{Platform, SUPPORTED_PLATFORMS};

/// Line printed before the listing command runs.
pub fn progress_line(port: u16, platform: Platform) -> String {
    format!("Checking port {port} on {platform}...\n")
}

pub fn not_found(port: u16) -> String {
    format!("No process found using port {port}")
}

/// Renders the final report for `port`.
pub fn render(lookup: &Lookup, port: u16) -> String {
    render_summaries(lookup.summaries(), port)
}

/// Header plus one line per summary, or the not-found message when empty.
pub fn render_summaries(summaries: &[ProcessSummary], port: u16) -> String {
    if summaries.is_empty() {
        return not_found(port);
    }

    let mut out = format!("Process(es) using port {port}:");
    for summary in summaries {
        out.push('\n');
        out.push_str(&summary_line(summary));
    }
    out
}

/// Stderr text for an error that ends the run.
pub fn fatal_message(err: &PortCheckError, platform: Option<Platform>) -> String {
    match err {
        PortCheckError::UnsupportedPlatform(_) => {
            format!("Error: {err}\nSupported platforms: {SUPPORTED_PLATFORMS}")
        }
        PortCheckError::CommandExecution { .. } => {
            let mut out = format!("Error executing command: {err}");
            if let Some(platform) = platform {
                out.push_str("\n\nTroubleshooting:");
                for hint in platform.troubleshooting_hints() {
                    out.push('\n');
                    out.push_str(hint);
                }
            }
            out
        }
        other => format!("Error: {other}"),
    }
}

/// One line per process; the connection count only appears past one.
pub fn summary_line(summary: &ProcessSummary) -> String {
    let base = match &summary.record {
        ConnectionRecord::Unix(e) => format!("{} (PID: {}) - {}", e.command, e.pid, e.user),
        ConnectionRecord::Windows(e) => format!(
            "{} {} -> {} ({}) PID: {}",
            e.protocol, e.local_address, e.foreign_address, e.state, e.pid
        ),
    };

    if summary.connection_count > 1 {
        format!("{base} ({} connections)", summary.connection_count)
    } else {
        base
    }
}
