//! Operator registry for clac
//!
//! Operators are data, not syntax: the tokenizer and parser only consult a
//! registry of `Op` records. Expression trees hold `&Op` references into the
//! registry, which is immutable once built and outlives every tree.

/// Associativity of a binary operator (used for display parenthesization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// A single operator record.
///
/// `eval` receives a slice sized exactly to `arity`. Slot 0 holds the
/// operand that was popped first during parsing, i.e. the top of the
/// operand stack: for a binary operator that is the *right* operand
/// (`1 2 -` evaluates to `-1` with the standard table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Op {
    pub symbol: &'static str,
    /// 1 or 2.
    pub arity: u8,
    /// Higher binds tighter.
    pub precedence: u8,
    pub assoc: Assoc,
    pub eval: fn(&[i64]) -> i64,
}

/// The operator registry consulted by the tokenizer and parser.
#[derive(Debug, Default)]
pub struct OpTable {
    ops: Vec<Op>,
}

impl OpTable {
    pub fn new() -> Self {
        OpTable { ops: Vec::new() }
    }

    pub fn register(&mut self, op: Op) {
        debug_assert!(op.arity == 1 || op.arity == 2);
        self.ops.push(op);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Find the longest operator symbol that is a prefix of `input`.
    /// Ties between equal-length symbols go to the first one registered.
    pub fn match_prefix(&self, input: &str) -> Option<&Op> {
        let mut best: Option<&Op> = None;
        for op in &self.ops {
            if input.starts_with(op.symbol) {
                match best {
                    Some(b) if b.symbol.len() >= op.symbol.len() => {}
                    _ => best = Some(op),
                }
            }
        }
        best
    }

    /// The default arithmetic table used by the driver and tests.
    ///
    /// All operators are total: division and remainder by zero yield 0, as
    /// does a negative exponent, and everything else wraps.
    pub fn standard() -> Self {
        let mut table = OpTable::new();
        table.register(Op {
            symbol: "+",
            arity: 2,
            precedence: 1,
            assoc: Assoc::Left,
            eval: |a| a[1].wrapping_add(a[0]),
        });
        table.register(Op {
            symbol: "-",
            arity: 2,
            precedence: 1,
            assoc: Assoc::Left,
            eval: |a| a[1].wrapping_sub(a[0]),
        });
        table.register(Op {
            symbol: "*",
            arity: 2,
            precedence: 2,
            assoc: Assoc::Left,
            eval: |a| a[1].wrapping_mul(a[0]),
        });
        table.register(Op {
            symbol: "/",
            arity: 2,
            precedence: 2,
            assoc: Assoc::Left,
            eval: |a| a[1].checked_div(a[0]).unwrap_or(0),
        });
        table.register(Op {
            symbol: "%",
            arity: 2,
            precedence: 2,
            assoc: Assoc::Left,
            eval: |a| a[1].checked_rem(a[0]).unwrap_or(0),
        });
        table.register(Op {
            symbol: "**",
            arity: 2,
            precedence: 3,
            assoc: Assoc::Right,
            eval: |a| {
                let exp = a[0];
                if exp < 0 {
                    0
                } else {
                    a[1].wrapping_pow(exp.min(u32::MAX as i64) as u32)
                }
            },
        });
        table.register(Op {
            symbol: "~",
            arity: 1,
            precedence: 4,
            assoc: Assoc::Right,
            eval: |a| a[0].wrapping_neg(),
        });
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_prefix_prefers_longest() {
        let table = OpTable::standard();
        // "**" and "*" both match; the longer one wins regardless of order
        let op = table.match_prefix("** 2").unwrap();
        assert_eq!(op.symbol, "**");
        let op = table.match_prefix("*2").unwrap();
        assert_eq!(op.symbol, "*");
    }

    #[test]
    fn match_prefix_no_match() {
        let table = OpTable::standard();
        assert!(table.match_prefix("?").is_none());
        assert!(table.match_prefix("").is_none());
    }

    #[test]
    fn subtraction_operand_order() {
        let table = OpTable::standard();
        let minus = table.match_prefix("-").unwrap();
        // slot 0 = popped first = right operand
        assert_eq!((minus.eval)(&[2, 1]), -1);
    }

    #[test]
    fn division_by_zero_is_zero() {
        let table = OpTable::standard();
        let div = table.match_prefix("/").unwrap();
        assert_eq!((div.eval)(&[0, 7]), 0);
        let rem = table.match_prefix("%").unwrap();
        assert_eq!((rem.eval)(&[0, 7]), 0);
    }

    #[test]
    fn power_negative_exponent_is_zero() {
        let table = OpTable::standard();
        let pow = table.match_prefix("**").unwrap();
        assert_eq!((pow.eval)(&[-1, 2]), 0);
        assert_eq!((pow.eval)(&[10, 2]), 1024);
    }

    #[test]
    fn negation_is_unary() {
        let table = OpTable::standard();
        let neg = table.match_prefix("~").unwrap();
        assert_eq!(neg.arity, 1);
        assert_eq!((neg.eval)(&[5]), -5);
    }
}
