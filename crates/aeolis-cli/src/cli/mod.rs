mod commands;
mod helpers;

use aeolis_core::domain::AeolisError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "aeolis-utils";

/// Log to stderr so stdout stays reserved for JSON responses.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_aeolis_error();
            tracing::debug!(placeholder = error.placeholder(), "command failed");
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.fatal_exit_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "aeolis-utils", version, about = "Array interpolation and normalization helpers")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Interpolate several series sampled on a shared abscissa
    Interp(commands::InterpArgs),
    /// Normalize an array so it sums to one along an axis
    Normalize(commands::NormalizeArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Interp(args) => commands::run_interp_command(args),
        CliCommand::Normalize(args) => commands::run_normalize_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(AeolisError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_aeolis_error(&self) -> AeolisError {
        match self {
            Self::Usage(message) => {
                AeolisError::input_validation("INPUT.CLI_USAGE", message.trim_end())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => AeolisError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<AeolisError> for CliError {
    fn from(error: AeolisError) -> Self {
        Self::Compute(error)
    }
}
