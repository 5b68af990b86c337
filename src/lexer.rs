//! Tokenization for clac
//!
//! The lexer is a cursor over a single input line. Each call to
//! [`Lexer::next_token`] skips leading whitespace and classifies exactly one
//! lexical unit; name tokens are views into the line, never copies.
//! Operator symbols are not hardcoded here: the cursor consults the
//! operator registry with longest-prefix matching.

use crate::ast::Span;
use crate::ops::{Op, OpTable};
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{multispace0, satisfy},
    combinator::{map, recognize},
    sequence::pair,
    IResult, Offset,
};

/// Reserved command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `salir`
    Exit,
    /// `cargar`
    Load,
    /// `evaluar`
    Evaluate,
    /// `imprimir`
    Print,
}

impl Keyword {
    fn from_name(name: &str) -> Option<Keyword> {
        match name {
            "salir" => Some(Keyword::Exit),
            "cargar" => Some(Keyword::Load),
            "evaluar" => Some(Keyword::Evaluate),
            "imprimir" => Some(Keyword::Print),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Keyword::Exit => "salir",
            Keyword::Load => "cargar",
            Keyword::Evaluate => "evaluar",
            Keyword::Print => "imprimir",
        }
    }
}

/// One lexical unit. Tokens are transient: the parser consumes each one
/// before asking for the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a, 'ops> {
    /// A bare name (alphabetic head, alphanumeric tail); a view into the line.
    Name(&'a str),
    /// A decimal integer literal.
    Number(i64),
    /// A symbol matched against the operator registry.
    Operator(&'ops Op),
    Keyword(Keyword),
    /// `=`
    Equals,
    /// End of the line.
    End,
    /// A character no rule matched. The cursor does not advance past it.
    Invalid(char),
}

impl Token<'_, '_> {
    /// Short human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Name(name) => format!("name '{}'", name),
            Token::Number(value) => format!("number {}", value),
            Token::Operator(op) => format!("operator '{}'", op.symbol),
            Token::Keyword(kw) => format!("keyword '{}'", kw.text()),
            Token::Equals => "'='".to_string(),
            Token::End => "end of line".to_string(),
            Token::Invalid(c) => format!("character '{}'", c),
        }
    }
}

fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))(input)
}

fn number(input: &str) -> IResult<&str, i64> {
    // Wrapping accumulation: overflow on absurd literals is defined but
    // unchecked, matching the reference behavior.
    map(take_while1(|c: char| c.is_ascii_digit()), |digits: &str| {
        digits
            .bytes()
            .fold(0i64, |acc, d| acc.wrapping_mul(10).wrapping_add((d - b'0') as i64))
    })(input)
}

/// Cursor over one input line.
pub struct Lexer<'a, 'ops> {
    line: &'a str,
    rest: &'a str,
    ops: &'ops OpTable,
}

impl<'a, 'ops> Lexer<'a, 'ops> {
    pub fn new(line: &'a str, ops: &'ops OpTable) -> Self {
        Lexer { line, rest: line, ops }
    }

    /// Byte range of a token's text within the full line.
    pub fn span(&self, text: &'a str) -> Span {
        let start = self.line.offset(text);
        start..start + text.len()
    }

    /// Classify and consume exactly one token.
    pub fn next_token(&mut self) -> Token<'a, 'ops> {
        if let Ok((rest, _)) = multispace0::<_, nom::error::Error<&str>>(self.rest) {
            self.rest = rest;
        }

        if self.rest.is_empty() {
            return Token::End;
        }

        if let Some(rest) = self.rest.strip_prefix('=') {
            self.rest = rest;
            return Token::Equals;
        }

        if let Ok((rest, text)) = name(self.rest) {
            self.rest = rest;
            return match Keyword::from_name(text) {
                Some(kw) => Token::Keyword(kw),
                None => Token::Name(text),
            };
        }

        if let Ok((rest, value)) = number(self.rest) {
            self.rest = rest;
            return Token::Number(value);
        }

        if let Some(op) = self.ops.match_prefix(self.rest) {
            self.rest = &self.rest[op.symbol.len()..];
            return Token::Operator(op);
        }

        Token::Invalid(self.rest.chars().next().unwrap_or('\0'))
    }
}
