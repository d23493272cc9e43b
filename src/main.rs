use std::{fs, io, process::ExitCode};

use clap::Parser;
use minilang::{
    config::{Config, OverflowPolicy},
    parse, run,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// minilang runs programs written in a minimal imperative language with
/// integer variables, assignment, print statements and arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minilang to read the program from a file instead of taking the
    /// program text as the argument.
    #[arg(short, long)]
    file: bool,

    /// Only checks the program for syntax errors without executing it.
    #[arg(short, long)]
    check: bool,

    /// How integer overflow is handled.
    #[arg(short, long, value_enum, default_value_t = OverflowPolicy::Wrap)]
    overflow: OverflowPolicy,

    contents: String,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=minilang=trace`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
                                              eprintln!("Failed to read the input file '{}': {e}.",
                                                        &args.contents);
                                              std::process::exit(1);
                                          })
    } else {
        args.contents
    };

    let result = if args.check {
        parse(&source).map(|program| {
                          println!("Syntax OK: {} declaration(s), {} statement(s).",
                                   program.declarations.len(),
                                   program.statements.len());
                      })
                      .map_err(minilang::error::Error::from)
    } else {
        run(&source, &Config::with_overflow(args.overflow), &mut io::stdout().lock())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
