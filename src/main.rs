//! clac - Calc Backwards, a postfix alias calculator
//!
//! Usage:
//!   clac              Start interactive REPL
//!   clac -c "line"    Process a single statement line
//!   clac script.clac  Process a script file, one statement per line

mod repl;

use clac::{OpTable, Outcome, Session};
use std::env;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"clac {} - Calc Backwards - a postfix alias calculator

USAGE:
    clac                    Start interactive REPL
    clac -c <line>          Process a single statement line
    clac <script>           Process a script file, one statement per line
    clac --help             Show this help message
    clac --version          Show version

STATEMENTS:
    <name> = cargar <postfix expression>
                            Define or redefine a name
    evaluar <name>          Print the current value of a name
    imprimir <name>         Print a name's expression in infix form
    salir                   End the session

EXPRESSIONS:
    Postfix (reverse) order: operands first, operator last.
    Operands are decimal integers and previously defined names.
    Standard operators: + - * / % ** (power) ~ (negation)

    a = cargar 1 2 +        a is 1 + 2
    b = cargar a a *        b is a * a, late-bound: redefine a, b follows
    evaluar b               9"#,
        VERSION
    );
}

/// Feed lines to one session, printing outcomes the way the REPL does.
/// Stops at `salir` or the first fatal error.
fn run_lines<I>(lines: I, ops: &OpTable) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut session = Session::new(ops);
    for line in lines {
        let line: String = line.into();
        if line.trim().is_empty() {
            continue;
        }
        match session.run_line(line) {
            Ok(Outcome::Exit) => break,
            Ok(Outcome::Value(value)) => println!("{}", value),
            Ok(Outcome::Printed(text)) => println!("{}", text),
            Ok(Outcome::Defined) => {}
            Err(err) if err.is_fatal() => {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
            Err(err) => eprintln!("{}", err),
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let ops = OpTable::standard();

    match args.first().map(String::as_str) {
        None => repl::run(&ops),
        Some("--help") | Some("-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("--version") => {
            println!("clac {}", VERSION);
            ExitCode::SUCCESS
        }
        Some("-c") => match args.get(1) {
            Some(line) => run_lines([line.clone()], &ops),
            None => {
                eprintln!("clac: -c requires a statement line");
                ExitCode::FAILURE
            }
        },
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => run_lines(source.lines().map(String::from), &ops),
            Err(err) => {
                eprintln!("clac: cannot read '{}': {}", path, err);
                ExitCode::FAILURE
            }
        },
    }
}
