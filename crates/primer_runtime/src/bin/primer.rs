//! Primer CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use primer_runtime::{Driver, parse_args};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("primer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let stdout = io::stdout().lock();
    let mut driver = Driver::new(cli.to_run_config(), stdout);

    if cli.trace {
        eprintln!("\x1b[33mDebug flags enabled:\x1b[0m");
        eprintln!("  - Step tracing (--trace)");
        eprintln!("  - Program: {}", driver.config().program);
        eprintln!("  - Seed: {}", driver.seed());
        eprintln!();
    }

    if let Err(e) = driver.run() {
        if let Some(ctx) = &e.context {
            eprintln!("\x1b[2m{ctx}\x1b[0m");
        }
        return Err(e.into());
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mPrimer\x1b[0m - Arithmetic, strings, iteration, and randomness in one run

\x1b[1mUSAGE:\x1b[0m
    primer [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    --seed N            Seed the random draws for reproducible output
    --program NAME      Program to run: standard (default) or alternate

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace             Print each step and the seed to stderr

\x1b[1mEXAMPLES:\x1b[0m
    primer                          Run the standard program
    primer --seed 7                 Same random lines on every run
    primer --program alternate      Run the alternate program
    primer --trace --seed 7         Trace each step"
    );
}
