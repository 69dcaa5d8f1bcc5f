use clap::Parser;
use port_check::export::ExportFormat;
use port_check::platform::validate_port;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "port-check",
    version,
    about = "Show which processes are using a TCP port"
)]
pub struct Cli {
    /// Port number to look up (1-65535)
    #[arg(value_parser = parse_port)]
    pub port: u16,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Also write the report under <DIR>/snapshots
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_port(s: &str) -> Result<u16, String> {
    validate_port(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_port_and_defaults() {
        let cli = Cli::try_parse_from(["port-check", "3000"]).unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.format, ExportFormat::Text);
        assert!(cli.export.is_none());
        assert!(!cli.no_color && !cli.verbose);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "port-check", "8080", "--format", "yaml", "--export", "out", "--no-color", "-v",
        ])
        .unwrap();
        assert_eq!(cli.format, ExportFormat::Yaml);
        assert_eq!(cli.export, Some(PathBuf::from("out")));
        assert!(cli.no_color && cli.verbose);
    }

    #[test]
    fn rejects_missing_and_invalid_ports() {
        assert!(Cli::try_parse_from(["port-check"]).is_err());
        for bad in ["0", "65536", "http", "-5"] {
            assert!(Cli::try_parse_from(["port-check", bad]).is_err(), "{bad}");
        }
    }
}
