//! Rogerian CLI entry point.

use std::env;
use std::process::ExitCode;

use rogerian_foundation::Result;
use rogerian_runtime::{LineReader, Repl, RuntimeConfig, logging};

fn main() -> ExitCode {
    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<()> {
    let config = RuntimeConfig::parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("rogerian {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.log_filter.as_deref())?;
    let session = config.session()?;

    // Batch mode: answer each line of the file as a transcript
    if let Some(path) = &config.batch {
        let reader = LineReader::open(path)?;
        return Repl::with_editor(reader, session).with_echo(true).run();
    }

    Repl::new(session)?.run()
}

fn print_help() {
    println!(
        "\x1b[1mRogerian\x1b[0m - Rule-based conversational responder

\x1b[1mUSAGE:\x1b[0m
    rogerian [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -s, --script PATH    Load a JSON script instead of the built-in doctor
    -b, --batch FILE     Answer each line of FILE and exit
    --seed N             Seed fallback choice and the startup shuffle
    --no-shuffle         Keep the script's fallback replies as written
    --log FILTER         Log filter (default: $RUST_LOG, then warn)

\x1b[1mEXAMPLES:\x1b[0m
    rogerian                          Talk to the doctor
    rogerian -s my_script.json        Talk using your own script
    rogerian --seed 7 -b session.txt  Reproducible transcript
    rogerian --log debug              Show key selection on stderr

\x1b[1mIN CONVERSATION:\x1b[0m
    bye, goodbye, quit, exit   End the conversation
    Ctrl+C, Ctrl+D             End the conversation"
    );
}
