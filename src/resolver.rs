//! Alias expansion for clac
//!
//! [`expand`] turns a stored tree that may contain alias leaves into a
//! fully self-contained tree with independent ownership: numbers are copied
//! fresh, operations are rebuilt around expanded children, and each alias
//! leaf is replaced by the expansion of the entry it names in the symbol
//! table as of right now (late binding, same as the evaluator). The result
//! carries no spans that need a line buffer, which is what the display
//! path wants.
//!
//! Arity is re-validated at every rebuilt operation node; a child that
//! could not be produced surfaces as an error instead of a half-applied
//! operator. Alias cycles are not detected (see DESIGN.md).

use crate::ast::Expr;
use crate::eval::EvalError;
use crate::table::SymbolTable;

/// Expand `expr` (whose alias spans index into `line`) into an alias-free
/// tree owned entirely by the caller.
pub fn expand<'ops>(
    expr: &Expr<'ops>,
    line: &str,
    table: &SymbolTable<'ops>,
) -> Result<Expr<'ops>, EvalError> {
    match expr {
        Expr::Number(value) => Ok(Expr::Number(*value)),
        Expr::Alias(span) => {
            let name = &line[span.clone()];
            let entry = table.lookup(name).ok_or_else(|| EvalError::undefined(name))?;
            // expand the referenced definition, not the leaf
            expand(entry.expr(), entry.line(), table)
        }
        Expr::Operation { op, args } => {
            let first = match &args[0] {
                Some(child) => Some(Box::new(expand(child, line, table)?)),
                None => None,
            };
            let second = match &args[1] {
                Some(child) => Some(Box::new(expand(child, line, table)?)),
                None => None,
            };
            let arity_ok = match op.arity {
                1 => first.is_some() && second.is_none(),
                _ => first.is_some() && second.is_some(),
            };
            if !arity_ok {
                return Err(EvalError::MissingOperand);
            }
            Ok(Expr::Operation { op, args: [first, second] })
        }
    }
}
