use crate::aggregate::aggregate;
use crate::error::{PortCheckError, Result};
use crate::executor::CommandExecutor;
use crate::model::Lookup;
use crate::parser::strategy_for;
use crate::platform::Platform;

/// Looks up the processes holding `port` open on `platform`.
///
/// Runs the platform's listing command exactly once through `executor`.
/// A tool that exits with status 1 and prints nothing matched no socket,
/// which is reported as [`Lookup::NotFound`] rather than an error.
pub fn check_port(
    platform: Platform,
    port: u16,
    executor: &dyn CommandExecutor,
) -> Result<Lookup> {
    let command = platform.command_for(port);

    let output = match executor.run(&command) {
        Ok(output) => output,
        Err(failure) if failure.is_no_match() => return Ok(Lookup::NotFound),
        Err(failure) => {
            return Err(PortCheckError::CommandExecution {
                command: command.line,
                status: failure.status,
                message: failure.message,
            });
        }
    };

    if output.trim().is_empty() {
        return Ok(Lookup::NotFound);
    }

    let records = strategy_for(platform).parse(&output);
    Ok(Lookup::from_summaries(aggregate(records)))
}

/// Same as [`check_port`], starting from a raw platform identifier.
pub fn check_port_on(
    platform_id: &str,
    port: u16,
    executor: &dyn CommandExecutor,
) -> Result<Lookup> {
    let platform: Platform = platform_id.parse()?;
    check_port(platform, port, executor)
}
