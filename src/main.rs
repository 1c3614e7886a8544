use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use strexpand::{Expander, ProcessEnv, Separators};

mod check;

fn print_help() {
    println!("strexpand - expand ${{NAME}} placeholders from the environment");
    println!();
    println!("Usage: strexpand [OPTIONS] [TEXT...]");
    println!("  Expands each TEXT, or each line of stdin when none is given.");
    println!();
    println!("  -h, --help       Print this help");
    println!("  -v, --version    Print version");
    println!("      --unix       Normalize separators to '/'");
    println!("      --windows    Normalize separators to '\\'");
    println!("      --self-check Run the built-in expansion checks");
}

fn print_version() {
    println!("strexpand v {}", env!("CARGO_PKG_VERSION"));
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Stay silent unless asked
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        process::exit(0);
    }

    if args.iter().any(|a| a == "-v" || a == "--version" || a == "-V") {
        print_version();
        process::exit(0);
    }

    init_tracing();

    let mut separators = Separators::native();
    let mut self_check = false;
    let mut texts = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--unix" => separators = Separators::unix(),
            "--windows" => separators = Separators::windows(),
            "--self-check" => self_check = true,
            "--" => {}
            flag if flag.starts_with("--") => {
                eprintln!("strexpand: unknown option '{}'", flag);
                process::exit(2);
            }
            _ => texts.push(arg),
        }
    }

    if self_check {
        let failures = check::run(separators);
        process::exit(if failures == 0 { 0 } else { 1 });
    }

    let expander = Expander::new(ProcessEnv).with_separators(separators);

    let result = if texts.is_empty() {
        expand_stdin(&expander)
    } else {
        print_all(expander.expand_all(&texts))
    };

    if let Err(e) = result {
        eprintln!("strexpand: {}", e);
        process::exit(1);
    }
}

/// Expand stdin one line at a time, keeping line endings out of the lookup.
fn expand_stdin(expander: &Expander<ProcessEnv>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", expander.expand(&line))?;
    }
    out.flush()
}

fn print_all(expanded: impl Iterator<Item = String>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in expanded {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
