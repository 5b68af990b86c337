//! Common test utilities for clac integration tests

pub use clac::{OpTable, Outcome, Session, SessionError};

/// Feed one line to a session.
pub fn run(session: &mut Session<'_>, line: &str) -> Result<Outcome, SessionError> {
    session.run_line(line.to_string())
}

/// Feed one `evaluar` line and unwrap the numeric outcome.
#[allow(dead_code)]
pub fn value(session: &mut Session<'_>, name: &str) -> i64 {
    match run(session, &format!("evaluar {}", name)) {
        Ok(Outcome::Value(v)) => v,
        other => panic!("expected a value for '{}', got {:?}", name, other),
    }
}
