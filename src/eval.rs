//! Evaluator for clac
//!
//! Recursive numeric reduction of an expression tree. Alias leaves are
//! resolved lazily, against the symbol table's contents at the moment of
//! evaluation: redefining an alias changes the value of everything that
//! refers to it by name the next time it is evaluated. Nothing is mutated
//! and no expansion copy is built; the evaluator walks stored trees in
//! place.
//!
//! Two inherited behaviors are deliberate (see DESIGN.md): an absent
//! operand slot evaluates to 0 rather than failing, and alias cycles are
//! not detected - a circular chain of definitions recurses until the stack
//! runs out.

use crate::ast::Expr;
use crate::table::SymbolTable;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A referenced name has no entry in the symbol table.
    #[error("alias '{name}' is not defined")]
    UndefinedAlias { name: String },
    /// An operation node whose populated operands do not match its
    /// operator's arity. Committed trees never contain one; this surfaces
    /// only if expansion is handed a corrupt source tree.
    #[error("operation is missing an operand")]
    MissingOperand,
}

impl EvalError {
    pub fn undefined(name: &str) -> Self {
        EvalError::UndefinedAlias { name: name.to_string() }
    }
}

/// Reduce a tree to a single integer. `line` is the input line the tree's
/// alias spans index into.
pub fn eval_expr(expr: &Expr<'_>, line: &str, table: &SymbolTable<'_>) -> Result<i64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Alias(span) => {
            let name = &line[span.clone()];
            let entry = table.lookup(name).ok_or_else(|| EvalError::undefined(name))?;
            eval_expr(entry.expr(), entry.line(), table)
        }
        Expr::Operation { op, args } => {
            let mut values = [0i64; 2];
            for (slot, arg) in values.iter_mut().zip(args.iter()) {
                // absent slot stays 0 - the empty-operand default
                if let Some(child) = arg {
                    *slot = eval_expr(child, line, table)?;
                }
            }
            Ok((op.eval)(&values[..op.arity as usize]))
        }
    }
}

/// Evaluate the current meaning of a defined name.
pub fn eval_alias(name: &str, table: &SymbolTable<'_>) -> Result<i64, EvalError> {
    let entry = table.lookup(name).ok_or_else(|| EvalError::undefined(name))?;
    eval_expr(entry.expr(), entry.line(), table)
}
