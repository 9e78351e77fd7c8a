use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use tintlog::cli::Cli;
use tintlog::config::Config;
use tintlog::factory::LoggerFactory;
use tintlog::fault::Fault;
use tintlog::logger::LeveledLog;
use tintlog::template::Arg;

/// Error kind reported for `--error` chains built on the command line.
const CLI_FAULT_KIND: &str = "tintlog::cli";

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `tintlog ... | head` exits quietly
    // instead of reporting a broken pipe.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "tintlog", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tintlog: {e}");
            return ExitCode::from(1);
        }
    };

    let logger = match LoggerFactory::new(config).create_logger::<Cli>() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("tintlog: {e}");
            return ExitCode::from(1);
        }
    };

    // Both are required unless --completions was given.
    let (Some(level), Some(template)) = (cli.level, cli.template.as_deref()) else {
        return ExitCode::from(2);
    };

    let args: Vec<Arg> = cli.args.iter().map(|a| Arg::infer(a)).collect();
    let args = (!args.is_empty()).then_some(args.as_slice());
    let fault = error_chain(&cli.errors);

    logger.emit(
        level,
        template,
        args,
        fault.as_ref().map(|f| f as &(dyn std::error::Error + 'static)),
    );

    ExitCode::SUCCESS
}

/// Nest `messages` into one fault, outermost first.
fn error_chain(messages: &[String]) -> Option<Fault> {
    messages.iter().rev().fold(None, |inner, message| {
        let fault = Fault::new(CLI_FAULT_KIND, message.as_str());
        Some(match inner {
            Some(source) => fault.with_source(source),
            None => fault,
        })
    })
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
