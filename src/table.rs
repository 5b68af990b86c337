//! Symbol table for clac
//!
//! Each entry co-owns the input line its definition came from, the alias
//! name (a byte span into that line) and the stored expression tree.
//! Bundling the buffer with every span that points into it is what keeps
//! alias names valid for exactly as long as their entry lives: the buffer
//! is never exposed separately, and redefinition swaps line, span and tree
//! together.

use crate::ast::{Expr, Span};

/// One alias binding.
#[derive(Debug)]
pub struct Entry<'ops> {
    line: String,
    name: Span,
    expr: Expr<'ops>,
}

impl<'ops> Entry<'ops> {
    /// The alias name, resolved against the owned line.
    pub fn name(&self) -> &str {
        &self.line[self.name.clone()]
    }

    /// The input line the stored tree's spans index into.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn expr(&self) -> &Expr<'ops> {
        &self.expr
    }
}

/// Unordered collection of alias bindings, unique per name.
#[derive(Debug, Default)]
pub struct SymbolTable<'ops> {
    // A linear scan over entries: a keyed map would have to copy the name
    // text out of the line buffer, and sessions hold few aliases.
    entries: Vec<Entry<'ops>>,
}

impl<'ops> SymbolTable<'ops> {
    pub fn new() -> Self {
        SymbolTable { entries: Vec::new() }
    }

    /// Bind `name` (a span into `line`) to `expr`, taking ownership of the
    /// line buffer. An existing entry with the same name text is replaced
    /// whole: old buffer and old tree are dropped together.
    pub fn define(&mut self, line: String, name: Span, expr: Expr<'ops>) {
        let entry = Entry { line, name, expr };
        match self.entries.iter().position(|e| e.name() == entry.name()) {
            Some(i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Find an entry by name text (content equality, not identity).
    pub fn lookup(&self, name: &str) -> Option<&Entry<'ops>> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::OpTable;
    use crate::parser::parse;
    use crate::ast::Statement;

    fn define_line<'ops>(table: &mut SymbolTable<'ops>, line: &str, ops: &'ops OpTable) {
        match parse(line, ops) {
            Ok(Statement::Load { name, expr }) => table.define(line.to_string(), name, expr),
            other => panic!("expected a definition, got {:?}", other),
        }
    }

    #[test]
    fn define_and_lookup() {
        let ops = OpTable::standard();
        let mut table = SymbolTable::new();
        define_line(&mut table, "a = cargar 1 2 +", &ops);

        let entry = table.lookup("a").unwrap();
        assert_eq!(entry.name(), "a");
        assert_eq!(entry.line(), "a = cargar 1 2 +");
        assert!(table.lookup("b").is_none());
    }

    #[test]
    fn lookup_is_content_equality() {
        let ops = OpTable::standard();
        let mut table = SymbolTable::new();
        define_line(&mut table, "abc = cargar 1", &ops);

        // a fresh string with equal content finds the entry
        let probe = String::from("abc");
        assert!(table.lookup(&probe).is_some());
        // prefixes and extensions do not
        assert!(table.lookup("ab").is_none());
        assert!(table.lookup("abcd").is_none());
    }

    #[test]
    fn redefinition_replaces_not_duplicates() {
        let ops = OpTable::standard();
        let mut table = SymbolTable::new();
        define_line(&mut table, "a = cargar 1 2 +", &ops);
        define_line(&mut table, "a = cargar 5", &ops);

        assert_eq!(table.len(), 1);
        let entry = table.lookup("a").unwrap();
        assert_eq!(entry.line(), "a = cargar 5");
        assert_eq!(entry.expr(), &Expr::Number(5));
    }

    #[test]
    fn entries_are_independent() {
        let ops = OpTable::standard();
        let mut table = SymbolTable::new();
        define_line(&mut table, "a = cargar 1", &ops);
        define_line(&mut table, "b = cargar 2", &ops);

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("a").unwrap().expr(), &Expr::Number(1));
        assert_eq!(table.lookup("b").unwrap().expr(), &Expr::Number(2));
    }
}
