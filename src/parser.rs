//! Statement parser for clac
//!
//! One line is one statement. Command lines (`salir`, `evaluar`, `imprimir`)
//! are dispatched on their first token; a leading name starts a definition
//! whose postfix tail is folded into an expression tree by an explicit
//! operand stack. Failures are classified values, never panics, and every
//! partially built tree is released by drop on the way out.

use crate::ast::{Expr, Span, Statement};
use crate::lexer::{Keyword, Lexer, Token};
use crate::ops::OpTable;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `evaluar` or `imprimir` without a name after it.
    #[error("expected an alias name after the command")]
    MissingAlias,
    /// A definition line that is not `<name> = cargar ...`.
    #[error("malformed assignment: expected '<name> = cargar <expression>'")]
    MalformedAssignment,
    /// An operator asked for more operands than the stack held.
    #[error("operator '{0}' is missing operands")]
    InsufficientOperands(String),
    /// A token that cannot appear where it did.
    #[error("unexpected {0}")]
    UnexpectedToken(String),
    /// A definition with no expression tokens at all.
    #[error("empty expression")]
    EmptyExpression,
    /// More than one tree left on the stack at end of line.
    #[error("expression leaves extra operands behind")]
    TrailingOperands,
}

/// Parse one full input line against the given operator registry.
///
/// On success the returned [`Statement`] borrows nothing from `line`:
/// name and alias positions are byte spans, so the caller is free to move
/// the line buffer into the symbol table afterwards.
pub fn parse<'ops>(line: &str, ops: &'ops OpTable) -> Result<Statement<'ops>, ParseError> {
    let mut lexer = Lexer::new(line, ops);

    match lexer.next_token() {
        Token::Keyword(Keyword::Exit) => Ok(Statement::Exit),
        Token::Keyword(Keyword::Evaluate) => {
            let name = expect_single_name(&mut lexer)?;
            Ok(Statement::Evaluate { name })
        }
        Token::Keyword(Keyword::Print) => {
            let name = expect_single_name(&mut lexer)?;
            Ok(Statement::Print { name })
        }
        Token::Name(name) => {
            if lexer.next_token() != Token::Equals {
                return Err(ParseError::MalformedAssignment);
            }
            if lexer.next_token() != Token::Keyword(Keyword::Load) {
                return Err(ParseError::MalformedAssignment);
            }
            let expr = parse_postfix(&mut lexer)?;
            Ok(Statement::Load { name: lexer.span(name), expr })
        }
        other => Err(ParseError::UnexpectedToken(other.describe())),
    }
}

/// Exactly one name, then end of line.
fn expect_single_name(lexer: &mut Lexer<'_, '_>) -> Result<Span, ParseError> {
    let name = match lexer.next_token() {
        Token::Name(name) => name,
        _ => return Err(ParseError::MissingAlias),
    };
    match lexer.next_token() {
        Token::End => Ok(lexer.span(name)),
        other => Err(ParseError::UnexpectedToken(other.describe())),
    }
}

/// Fold the remaining tokens into one expression tree.
///
/// Numbers and names push leaves; an operator pops one operand per arity
/// slot, first popped into slot 0. All rejections drop the stack (and with
/// it every constructed subtree) on return.
fn parse_postfix<'ops>(lexer: &mut Lexer<'_, 'ops>) -> Result<Expr<'ops>, ParseError> {
    let mut stack: Vec<Expr<'ops>> = Vec::new();

    loop {
        match lexer.next_token() {
            Token::End => break,
            Token::Number(value) => stack.push(Expr::Number(value)),
            Token::Name(name) => stack.push(Expr::Alias(lexer.span(name))),
            Token::Operator(op) => {
                let first = stack
                    .pop()
                    .ok_or_else(|| ParseError::InsufficientOperands(op.symbol.to_string()))?;
                let second = if op.arity == 2 {
                    match stack.pop() {
                        Some(expr) => Some(expr),
                        None => {
                            return Err(ParseError::InsufficientOperands(op.symbol.to_string()))
                        }
                    }
                } else {
                    None
                };
                stack.push(Expr::operation(op, first, second));
            }
            other => return Err(ParseError::UnexpectedToken(other.describe())),
        }
    }

    let result = stack.pop().ok_or(ParseError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(ParseError::TrailingOperands);
    }
    Ok(result)
}
