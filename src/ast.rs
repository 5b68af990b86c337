//! AST for clac
//!
//! An expression tree is built once per definition by the postfix parser and
//! then stored in the symbol table. Alias leaves stay unresolved until the
//! expression is evaluated or printed: they carry a byte range into the
//! input line their definition came from, never a copy of the name.

use crate::ops::Op;
use std::ops::Range;

/// A byte range into an input line. The line is owned by whoever owns the
/// tree (the symbol table entry for stored trees, the current line during
/// parsing), so a span is only meaningful next to that line.
pub type Span = Range<usize>;

/// A node of an expression tree.
///
/// Each node exclusively owns its children; dropping a tree releases it
/// completely, including on every parser rejection path.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'ops> {
    /// A numeric literal.
    Number(i64),
    /// An unresolved reference to a named expression.
    Alias(Span),
    /// An operator applied to its operands. The populated-slot count always
    /// equals `op.arity`; slot 1 is `None` for unary operators. Slot 0 holds
    /// the operand popped first (top of the parse stack).
    Operation {
        op: &'ops Op,
        args: [Option<Box<Expr<'ops>>>; 2],
    },
}

impl<'ops> Expr<'ops> {
    pub fn operation(op: &'ops Op, first: Expr<'ops>, second: Option<Expr<'ops>>) -> Self {
        Expr::Operation {
            op,
            args: [Some(Box::new(first)), second.map(Box::new)],
        }
    }

    /// Whether any alias leaf remains in the tree.
    pub fn has_alias(&self) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Alias(_) => true,
            Expr::Operation { args, .. } => {
                args.iter().flatten().any(|child| child.has_alias())
            }
        }
    }
}

/// One parsed statement line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'ops> {
    /// `<name> = cargar <postfix...>` - bind `name` to a tree. The tree is
    /// fully owned here; the symbol table gets involved only when the
    /// driver commits the definition.
    Load { name: Span, expr: Expr<'ops> },
    /// `evaluar <name>`
    Evaluate { name: Span },
    /// `imprimir <name>`
    Print { name: Span },
    /// `salir`
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OpTable;

    #[test]
    fn has_alias_sees_through_operations() {
        let table = OpTable::standard();
        let plus = table.match_prefix("+").unwrap();

        let pure = Expr::operation(plus, Expr::Number(1), Some(Expr::Number(2)));
        assert!(!pure.has_alias());

        let with_alias = Expr::operation(plus, Expr::Number(1), Some(Expr::Alias(0..1)));
        assert!(with_alias.has_alias());
    }
}
