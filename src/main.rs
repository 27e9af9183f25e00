use std::{io, process::ExitCode};

use clap::Parser;
use opcalc::{EvalOptions, evaluate_with};
use tracing_subscriber::filter::LevelFilter;

const BANNER: &str = "opcalc - operator-precedence calculator\nEnter an expression ending in '=', \
                      for example 1+2=";

/// opcalc evaluates one arithmetic expression built from decimal numbers,
/// `+ - * /`, parentheses and unary signs, terminated by `=`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not print the banner before reading from standard input.
    #[arg(short, long)]
    quiet: bool,

    /// Append the `=` terminator when the expression lacks one. Trailing
    /// whitespace is trimmed first.
    #[arg(short = 't', long)]
    auto_terminate: bool,

    /// Number of digits printed after the decimal point.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Limit the operator and operand stacks to this many entries each.
    #[arg(long, value_name = "N")]
    stack_capacity: Option<usize>,

    /// Increase log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match args.expression {
        Some(expression) => expression,
        None => {
            if !args.quiet {
                eprintln!("{BANNER}");
            }
            let mut line = String::new();
            if let Err(e) = io::stdin().read_line(&mut line) {
                eprintln!("Failed to read the expression from standard input: {e}");
                return ExitCode::from(2);
            }
            line
        },
    };

    let source = if args.auto_terminate { terminate(&source) } else { source };

    let mut options = EvalOptions::new();
    if let Some(capacity) = args.stack_capacity {
        options = options.with_stack_capacity(capacity);
    }

    match evaluate_with(&source, options) {
        Ok(value) => {
            println!("{value:.prec$}", prec = args.precision);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn terminate(source: &str) -> String {
    let trimmed = source.trim_end();
    if trimmed.contains('=') {
        trimmed.to_string()
    } else {
        format!("{trimmed}=")
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
