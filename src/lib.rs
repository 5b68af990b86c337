//! clac - Calc Backwards
//!
//! # Overview
//!
//! clac is a line calculator with postfix (reverse) expression syntax and
//! named definitions. Each input line is one statement:
//!
//! ```text
//! a = cargar 1 2 +     # define: bind 'a' to the tree for 1 2 +
//! evaluar a            # 3
//! b = cargar a a *     # definitions can reference other names
//! imprimir b           # (1 + 2) * (1 + 2)   - infix rendering
//! salir                # end the session
//! ```
//!
//! # Core Concepts
//!
//! ## Postfix parsing
//!
//! The `cargar` tail is folded by a stack machine: numbers and names push
//! leaves, an operator pops as many operands as its arity and pushes the
//! application. `1 2 -` evaluates to `-1`: the operand on top of the stack
//! is the operator's right-hand side.
//!
//! ## Late binding
//!
//! A name inside a definition is stored unresolved and looked up against
//! the symbol table each time it is evaluated or printed. Redefining `a`
//! changes what every expression mentioning `a` means from then on.
//!
//! ## Operators as data
//!
//! The lexer and parser consult an [`ops::OpTable`]; operator symbols,
//! arities, precedences and evaluation functions are registry entries, not
//! syntax. [`ops::OpTable::standard`] provides the usual arithmetic set.
//!
//! # Example
//!
//! ```rust
//! use clac::{OpTable, Outcome, Session};
//!
//! let ops = OpTable::standard();
//! let mut session = Session::new(&ops);
//! session.run_line("a = cargar 2 3 +".to_string()).unwrap();
//! let outcome = session.run_line("evaluar a".to_string()).unwrap();
//! assert_eq!(outcome, Outcome::Value(5));
//! ```

pub mod ast;
pub mod display;
pub mod eval;
pub mod lexer;
pub mod ops;
pub mod parser;
pub mod resolver;
pub mod session;
pub mod table;

// Re-export commonly used items
pub use ast::{Expr, Span, Statement};
pub use eval::{eval_alias, eval_expr, EvalError};
pub use lexer::{Keyword, Lexer, Token};
pub use ops::{Assoc, Op, OpTable};
pub use parser::{parse, ParseError};
pub use resolver::expand;
pub use session::{Outcome, Session, SessionError};
pub use table::{Entry, SymbolTable};
