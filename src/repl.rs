//! Interactive REPL for clac
//!
//! Reads one line at a time, feeds it to the session and prints the
//! outcome. Evaluation errors are reported and the loop continues; a parse
//! error ends the session with a nonzero status, matching the session's
//! fatality rules.

use clac::{OpTable, Outcome, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

pub fn run(ops: &OpTable) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("clac: cannot start line editor: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(ops);

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match session.run_line(line) {
                    Ok(Outcome::Exit) => return ExitCode::SUCCESS,
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
            // Ctrl+C clears the current line, Ctrl+D ends the session
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("clac: read error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
}
