use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use logging::{
    ConfigError, MESSAGE_LEVEL_ENV, MessageLevel, MessageRouter, ProgressError, ProgressOptions,
    RouterConfig, Severity, SeverityParseError,
};
use logging_sink::MessageSink;
use thiserror::Error;

const PROGRAM_NAME: &str = "msglevel";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit status for malformed command lines.
const USAGE_EXIT_CODE: i32 = 2;

const HELP_TEXT: &str = concat!(
    "msglevel ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: msglevel [-h] [-V] SEVERITY [MESSAGE]...\n",
    "       msglevel progress ITERATION TOTAL [--length N] [--min-level N] [--no-newline]\n",
    "\n",
    "Writes MESSAGE at SEVERITY, prefixed with the severity name. SEVERITY is\n",
    "one of abort, error, warning, log, info, verbose, verbose1, verbose2,\n",
    "verbose3, debug, or an integer level. INFO goes to stdout, everything else\n",
    "to stderr. Messages above the SINGULARITY_MESSAGELEVEL threshold (default 5)\n",
    "are not shown; SINGULARITY_MESSAGELEVEL=0 silences all output.\n",
    "\n",
    "The progress form draws one step of a progress bar on stdout.\n",
    "  -h, --help           Show this help message and exit.\n",
    "  -V, --version        Output version information and exit.\n",
    "      --length N       Bar length in glyphs (default 100).\n",
    "      --min-level N    Draw only when the threshold exceeds N (default 1).\n",
    "      --no-newline     Do not end the line after the final step.\n",
);

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Invocation {
    Help,
    Version,
    Emit {
        severity: String,
        message: String,
    },
    Progress {
        iteration: u64,
        total: u64,
        options: ProgressOptions,
    },
}

#[derive(Debug, Error)]
enum Failure {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Severity(#[from] SeverityParseError),
    #[error("failed to write message: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

impl Failure {
    const fn exit_status(&self) -> i32 {
        match self {
            Self::Severity(_) => USAGE_EXIT_CODE,
            Self::Config(_) | Self::Write(_) | Self::Progress(_) => 1,
        }
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("severity")
                .value_name("SEVERITY")
                .allow_negative_numbers(true)
                .index(1),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .num_args(1..)
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .index(2),
        )
        .subcommand(
            Command::new("progress")
                .about("Draw one progress bar step.")
                .arg(
                    Arg::new("help")
                        .long("help")
                        .short('h')
                        .help("Show this help message and exit.")
                        .action(ArgAction::Help),
                )
                .arg(
                    Arg::new("iteration")
                        .value_name("ITERATION")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("total")
                        .value_name("TOTAL")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("length")
                        .long("length")
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("min-level")
                        .long("min-level")
                        .value_name("N")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("no-newline")
                        .long("no-newline")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses command-line arguments into an [`Invocation`].
///
/// `Ok(None)` means no operands were given at all.
fn parse_args<I>(arguments: I) -> Result<Option<Invocation>, clap::Error>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = clap_command().try_get_matches_from(args)?;

    if matches.get_flag("help") {
        return Ok(Some(Invocation::Help));
    }
    if matches.get_flag("version") {
        return Ok(Some(Invocation::Version));
    }
    if let Some(("progress", progress)) = matches.subcommand() {
        return Ok(Some(progress_invocation(progress)));
    }

    let Some(severity) = matches.get_one::<String>("severity") else {
        return Ok(None);
    };
    let message = matches
        .get_many::<String>("message")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Ok(Some(Invocation::Emit {
        severity: severity.clone(),
        message,
    }))
}

fn progress_invocation(matches: &ArgMatches) -> Invocation {
    let mut options = ProgressOptions::default()
        .with_carriage_return(!matches.get_flag("no-newline"));
    if let Some(&length) = matches.get_one::<usize>("length") {
        options = options.with_length(length);
    }
    if let Some(&min_level) = matches.get_one::<i32>("min-level") {
        options = options.with_min_level(MessageLevel::new(min_level));
    }

    Invocation::Progress {
        iteration: matches.get_one::<u64>("iteration").copied().unwrap_or_default(),
        total: matches.get_one::<u64>("total").copied().unwrap_or_default(),
        options,
    }
}

/// Integer levels are accepted alongside severity names.
enum Target {
    Level(MessageLevel),
    Named(Severity),
}

fn parse_target(text: &str) -> Result<Target, SeverityParseError> {
    if let Ok(raw) = text.trim().parse::<i32>() {
        return Ok(Target::Level(MessageLevel::new(raw)));
    }
    text.parse().map(Target::Named)
}

fn execute<F, Out, Err>(
    invocation: Invocation,
    lookup: F,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<(), Failure>
where
    F: FnOnce(&str) -> Option<OsString>,
    Out: Write,
    Err: Write,
{
    match invocation {
        Invocation::Help => stdout.write_all(HELP_TEXT.as_bytes())?,
        Invocation::Version => {
            writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"))?;
        }
        Invocation::Emit { severity, message } => {
            let target = parse_target(&severity)?;
            let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup)?;
            let mut router = MessageRouter::with_streams(config, stdout, stderr);
            match target {
                Target::Level(level) => router.emit_level(level, &message)?,
                Target::Named(severity) => router.emit_severity(severity, &message)?,
            }
        }
        Invocation::Progress {
            iteration,
            total,
            options,
        } => {
            let config = RouterConfig::from_lookup(MESSAGE_LEVEL_ENV, lookup)?;
            let mut router = MessageRouter::with_streams(config, stdout, stderr);
            router.show_progress(iteration, total, options)?;
        }
    }
    Ok(())
}

/// Runs the client with explicit arguments, environment lookup, and streams.
///
/// `lookup` resolves environment variables; the binary passes
/// [`std::env::var_os`].
#[must_use]
pub fn run_with<I, F, Out, Err>(
    args: I,
    lookup: F,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    F: FnOnce(&str) -> Option<OsString>,
    Out: Write,
    Err: Write,
{
    exit_code_from(run(args, lookup, stdout, stderr))
}

fn run<I, F, Out, Err>(args: I, lookup: F, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    F: FnOnce(&str) -> Option<OsString>,
    Out: Write,
    Err: Write,
{
    let invocation = match parse_args(args) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => {
            let _ = stderr.write_all(HELP_TEXT.as_bytes());
            return USAGE_EXIT_CODE;
        }
        Err(error) if error.kind() == ErrorKind::DisplayHelp => {
            let _ = write!(stdout, "{error}");
            return 0;
        }
        Err(error) => {
            let _ = write!(stderr, "{error}");
            return USAGE_EXIT_CODE;
        }
    };

    match execute(invocation, lookup, stdout, stderr) {
        Ok(()) => 0,
        Err(failure) => {
            let mut sink = MessageSink::new(stderr);
            let _ = sink.write(format!("{PROGRAM_NAME}: {failure}"));
            failure.exit_status()
        }
    }
}

/// Converts a numeric exit code into an [`ExitCode`].
fn exit_code_from(status: i32) -> ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    ExitCode::from(clamped as u8)
}
