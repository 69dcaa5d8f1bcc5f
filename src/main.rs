mod cli;

use clap::Parser;
use cli::Cli;
use color_eyre::Result;
use owo_colors::{OwoColorize, Stream::Stderr};
use port_check::export;
use port_check::{Platform, PortCheckError, Report, ShellExecutor, check_port, presenter};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let platform = match Platform::current() {
        Ok(platform) => platform,
        Err(e) => fail(&e, None),
    };

    if cli.format.shows_progress() {
        println!("{}", presenter::progress_line(cli.port, platform));
    }

    let lookup = match check_port(platform, cli.port, &ShellExecutor) {
        Ok(lookup) => lookup,
        Err(e) => fail(&e, Some(platform)),
    };
    log::debug!("lookup on port {} finished: {:?}", cli.port, lookup);

    let report = Report::new(cli.port, platform, &lookup);
    println!("{}", export::render_report(&report, cli.format)?);

    if let Some(dir) = &cli.export {
        let path = export::export_to_file(&report, cli.format, Some(dir.as_path()))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

/// Prints the user-facing message for a fatal error and exits.
fn fail(err: &PortCheckError, platform: Option<Platform>) -> ! {
    let message = presenter::fatal_message(err, platform);
    let (headline, rest) = message.split_once('\n').unwrap_or((message.as_str(), ""));
    eprintln!("{}", headline.if_supports_color(Stderr, |s| s.red()));
    if !rest.is_empty() {
        eprintln!("{rest}");
    }
    std::process::exit(err.exit_code());
}
