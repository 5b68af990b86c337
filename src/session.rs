//! Session state for clac
//!
//! A [`Session`] owns the symbol table and processes one input line at a
//! time: parse, then define, evaluate, print or exit. The driver decides
//! what to do with the [`Outcome`]; the session never writes output itself.
//!
//! Error fatality follows the reference driver: a parse failure ends the
//! session, an evaluation failure (undefined alias) is reported and the
//! session keeps running. [`SessionError::is_fatal`] encodes that split.

use crate::ast::Statement;
use crate::display::format_expr;
use crate::eval::{eval_alias, EvalError};
use crate::ops::OpTable;
use crate::parser::{parse, ParseError};
use crate::resolver::expand;
use crate::table::SymbolTable;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SessionError {
    /// Parse failures end the session; evaluation failures do not.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Parse(_))
    }
}

/// What one processed line amounts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A definition was stored (or replaced). Nothing to print.
    Defined,
    /// `evaluar` produced this value.
    Value(i64),
    /// `imprimir` produced this rendering.
    Printed(String),
    /// `salir`.
    Exit,
}

/// One interactive session: an operator registry to parse against and the
/// alias bindings accumulated so far.
pub struct Session<'ops> {
    ops: &'ops OpTable,
    table: SymbolTable<'ops>,
}

impl<'ops> Session<'ops> {
    pub fn new(ops: &'ops OpTable) -> Self {
        Session { ops, table: SymbolTable::new() }
    }

    pub fn table(&self) -> &SymbolTable<'ops> {
        &self.table
    }

    /// Process one statement line. Takes the line by value: a definition
    /// moves the buffer into the symbol table, everything else drops it.
    pub fn run_line(&mut self, line: String) -> Result<Outcome, SessionError> {
        let statement = parse(&line, self.ops)?;
        match statement {
            Statement::Exit => Ok(Outcome::Exit),
            Statement::Load { name, expr } => {
                self.table.define(line, name, expr);
                Ok(Outcome::Defined)
            }
            Statement::Evaluate { name } => {
                let value = eval_alias(&line[name], &self.table)?;
                Ok(Outcome::Value(value))
            }
            Statement::Print { name } => {
                let name = &line[name];
                let entry = self
                    .table
                    .lookup(name)
                    .ok_or_else(|| EvalError::undefined(name))?;
                let expanded = expand(entry.expr(), entry.line(), &self.table)?;
                Ok(Outcome::Printed(format_expr(&expanded, entry.line())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session<'_>, line: &str) -> Result<Outcome, SessionError> {
        session.run_line(line.to_string())
    }

    #[test]
    fn define_then_evaluate() {
        let ops = OpTable::standard();
        let mut session = Session::new(&ops);
        assert_eq!(run(&mut session, "a = cargar 2 3 +"), Ok(Outcome::Defined));
        assert_eq!(run(&mut session, "evaluar a"), Ok(Outcome::Value(5)));
        assert_eq!(run(&mut session, "salir"), Ok(Outcome::Exit));
    }

    #[test]
    fn print_renders_the_expansion() {
        let ops = OpTable::standard();
        let mut session = Session::new(&ops);
        run(&mut session, "a = cargar 1 2 +").unwrap();
        run(&mut session, "b = cargar a 3 *").unwrap();
        assert_eq!(
            run(&mut session, "imprimir b"),
            Ok(Outcome::Printed("(1 + 2) * 3".to_string()))
        );
    }

    #[test]
    fn evaluation_errors_are_recoverable() {
        let ops = OpTable::standard();
        let mut session = Session::new(&ops);
        let err = run(&mut session, "evaluar ghost").unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "alias 'ghost' is not defined");

        // the session still works afterwards
        run(&mut session, "a = cargar 1").unwrap();
        assert_eq!(run(&mut session, "evaluar a"), Ok(Outcome::Value(1)));
    }

    #[test]
    fn parse_errors_are_fatal() {
        let ops = OpTable::standard();
        let mut session = Session::new(&ops);
        let err = run(&mut session, "x = cargar 1 2").unwrap_err();
        assert!(err.is_fatal());
    }
}
