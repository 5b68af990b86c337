//! Expression rendering for clac
//!
//! `imprimir` shows a definition in conventional infix form, parenthesized
//! only where precedence or associativity requires it. Rendering expects
//! the expanded (alias-free) tree the resolver produces, but alias leaves
//! are handled anyway by resolving their span against the given line, so a
//! stored tree can be rendered literally too.
//!
//! [`format_postfix`] writes the same tree back out in the `cargar` input
//! syntax; an expression survives a print/reparse round trip unchanged in
//! value.

use crate::ast::Expr;
use crate::ops::{Assoc, Op};

/// Render a tree in infix form with minimal parentheses.
pub fn format_expr(expr: &Expr<'_>, line: &str) -> String {
    let mut out = String::new();
    infix(expr, line, &mut out);
    out
}

fn infix(expr: &Expr<'_>, line: &str, out: &mut String) {
    match expr {
        Expr::Number(value) => out.push_str(&value.to_string()),
        Expr::Alias(span) => out.push_str(&line[span.clone()]),
        Expr::Operation { op, args } => {
            if op.arity == 1 {
                out.push_str(op.symbol);
                operand(args[0].as_deref(), line, out, |child_op| {
                    // a unary operator binds its operand tightly
                    child_op.precedence < op.precedence
                });
            } else {
                // slot 1 arrived first: it is the left operand
                operand(args[1].as_deref(), line, out, |child_op| {
                    child_op.precedence < op.precedence
                        || (child_op.precedence == op.precedence && op.assoc == Assoc::Right)
                });
                out.push(' ');
                out.push_str(op.symbol);
                out.push(' ');
                operand(args[0].as_deref(), line, out, |child_op| {
                    child_op.precedence < op.precedence
                        || (child_op.precedence == op.precedence && op.assoc == Assoc::Left)
                });
            }
        }
    }
}

fn operand(
    child: Option<&Expr<'_>>,
    line: &str,
    out: &mut String,
    needs_parens: impl Fn(&Op) -> bool,
) {
    let Some(child) = child else {
        // the empty-operand default, rendered the way it evaluates
        out.push('0');
        return;
    };
    let parens = matches!(child, Expr::Operation { op, .. } if needs_parens(op));
    if parens {
        out.push('(');
    }
    infix(child, line, out);
    if parens {
        out.push(')');
    }
}

/// Write a tree back out as a postfix token sequence (the `cargar` syntax).
pub fn format_postfix(expr: &Expr<'_>, line: &str) -> String {
    let mut out = String::new();
    postfix(expr, line, &mut out);
    out
}

fn postfix(expr: &Expr<'_>, line: &str, out: &mut String) {
    match expr {
        Expr::Number(value) => out.push_str(&value.to_string()),
        Expr::Alias(span) => out.push_str(&line[span.clone()]),
        Expr::Operation { op, args } => {
            if op.arity == 2 {
                postfix_operand(args[1].as_deref(), line, out);
                out.push(' ');
            }
            postfix_operand(args[0].as_deref(), line, out);
            out.push(' ');
            out.push_str(op.symbol);
        }
    }
}

fn postfix_operand(child: Option<&Expr<'_>>, line: &str, out: &mut String) {
    match child {
        Some(child) => postfix(child, line, out),
        None => out.push('0'),
    }
}
