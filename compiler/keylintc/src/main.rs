//! keylint CLI
//!
//! Lists rules, explains lint codes, and runs the built-in demo.

use std::io::{self, IsTerminal};

use keylintc::commands::{explain_code, list_rules, run_demo};
use keylintc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let mut stdout = io::stdout();

    let result = match command.as_str() {
        "rules" => list_rules(&mut stdout),
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_code(code, &mut stdout),
            None => Err(CliError::MissingArgument("explain <CODE>")),
        },
        "demo" => run_demo(&args[2..], io::stdout().is_terminal(), &mut stdout),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("keylint {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::UnknownCode(_)) {
            eprintln!();
            eprintln!("Run `keylint rules` to list the known codes.");
        }
        if matches!(err, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("keylint: flags arrays used as hash-collection keys");
    println!();
    println!("Usage: keylint <command> [options]");
    println!();
    println!("Commands:");
    println!("  rules                List every lint code");
    println!("  explain <code>       Explain a lint code (e.g., ArrayAsKeyOfSetOrMap)");
    println!("  demo [options]       Check the built-in example units");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Demo options:");
    println!("  --format=<fmt>      Output format: terminal (default), json, sarif");
    println!("  --color=<mode>      Color: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  KEYLINT_LOG         Log filter directives (falls back to RUST_LOG)");
    println!("  KEYLINT_LOG_TREE    Render logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  keylint rules");
    println!("  keylint explain ArrayAsKeyOfSetOrMap");
    println!("  keylint demo --format=sarif > keylint.sarif");
    println!("  KEYLINT_LOG=keylint_rules=trace keylint demo");
}
