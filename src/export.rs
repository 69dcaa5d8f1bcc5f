use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::{PortCheckError, Result};
use crate::model::Report;
use crate::platform::PlatformFamily;
use crate::presenter;

use chrono::Local;
use csv::Writer;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            // Text reports are exported as JSON.
            ExportFormat::Text | ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Csv => "csv",
        }
    }

    /// Only text output is preceded by the progress line.
    pub fn shows_progress(&self) -> bool {
        matches!(self, ExportFormat::Text)
    }
}

/// Renders a report in `format`, ready for stdout.
pub fn render_report(report: &Report<'_>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(presenter::render_summaries(report.processes, report.port)),
        ExportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| PortCheckError::Serialization(e.to_string())),
        ExportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| PortCheckError::Serialization(e.to_string()))
        }
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            write_report_csv(&mut buf, report).map_err(PortCheckError::Export)?;
            String::from_utf8(buf).map_err(|e| PortCheckError::Serialization(e.to_string()))
        }
    }
}

/// Writes the report to a file under the `snapshots` folder of `output_dir`.
/// Returns the full path of the created file on success.
pub fn export_to_file(
    report: &Report<'_>,
    format: ExportFormat,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let base_dir = output_dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let snapshots_dir = base_dir.join("snapshots");
    std::fs::create_dir_all(&snapshots_dir).map_err(PortCheckError::Export)?;

    let ts = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let filename = format!("port-{}-{ts}.{}", report.port, format.extension());
    let path = snapshots_dir.join(filename);

    let body = match format {
        ExportFormat::Text => render_report(report, ExportFormat::Json)?,
        other => render_report(report, other)?,
    };

    let mut file = File::create(&path).map_err(PortCheckError::Export)?;
    file.write_all(body.as_bytes())
        .map_err(PortCheckError::Export)?;

    log::debug!("exported report to {}", path.display());
    Ok(path)
}

fn csv_header(family: PlatformFamily) -> &'static [&'static str] {
    match family {
        PlatformFamily::Unix => &[
            "command",
            "pid",
            "user",
            "fd",
            "type",
            "device",
            "size",
            "node",
            "name",
            "connection_count",
        ],
        PlatformFamily::Windows => &[
            "protocol",
            "local_address",
            "foreign_address",
            "state",
            "pid",
            "connection_count",
        ],
    }
}

fn write_report_csv(file: &mut dyn Write, report: &Report<'_>) -> io::Result<()> {
    let mut wtr = Writer::from_writer(file);
    wtr.write_record(csv_header(report.platform.family()))?;
    for summary in report.processes {
        wtr.write_record(summary.ref_array())?;
    }
    wtr.flush()
}
