//! Parses and evaluates the collection query language.
//!
//! ```text
//! expr    := and ( "OR" and )*
//! and     := atom ( "AND" atom )*
//! atom    := "(" expr ")" | path op operand
//! op      := "==" | "!=" | ">=" | "<=" | ">" | "<" | "begin"
//! operand := "'" .. "'" | '"' .. '"' | bare text up to `)`, ` AND `, ` OR `
//! ```
//!
//! `@` at either end of an `==` operand is a wildcard.

use crate::cmp;

use gridlink_core::{Error, Record, Result, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Compare {
        path: Vec<String>,
        op: Op,
        rhs: String,
    },
    And(Vec<Expr>),
    Or(Vec<Expr>),
    /// The empty query
    True,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Begin,
}

pub(crate) fn parse(src: &str) -> Result<Expr> {
    let mut parser = Parser { src, pos: 0 };

    parser.skip_ws();
    if parser.at_end() {
        return Ok(Expr::True);
    }

    let expr = parser.parse_or()?;

    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }

    Ok(expr)
}

impl Expr {
    pub(crate) fn eval(&self, record: &Record) -> bool {
        match self {
            Expr::Compare { path, op, rhs } => compare(&record.lookup(path), *op, rhs),
            Expr::And(operands) => operands.iter().all(|expr| expr.eval(record)),
            Expr::Or(operands) => operands.iter().any(|expr| expr.eval(record)),
            Expr::True => true,
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse_or(&mut self) -> Result<Expr> {
        let mut operands = vec![self.parse_and()?];
        while self.eat_keyword("OR") {
            operands.push(self.parse_and()?);
        }

        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::Or(operands)
        })
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut operands = vec![self.parse_atom()?];
        while self.eat_keyword("AND") {
            operands.push(self.parse_atom()?);
        }

        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::And(operands)
        })
    }

    fn parse_atom(&mut self) -> Result<Expr> {
        self.skip_ws();

        if self.eat("(") {
            let expr = self.parse_or()?;
            self.skip_ws();
            if !self.eat(")") {
                return Err(self.error("expected `)`"));
            }
            return Ok(expr);
        }

        let path = self.parse_path()?;
        self.skip_ws();
        let op = self.parse_op()?;
        self.skip_ws();
        let rhs = self.parse_operand()?;

        Ok(Expr::Compare { path, op, rhs })
    }

    fn parse_path(&mut self) -> Result<Vec<String>> {
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '.' | '$')))
            .unwrap_or(self.rest().len());

        if len == 0 {
            return Err(self.error("expected attribute path"));
        }

        let path = self.rest()[..len]
            .split('.')
            .map(str::to_string)
            .collect();
        self.pos += len;
        Ok(path)
    }

    fn parse_op(&mut self) -> Result<Op> {
        const OPS: [(&str, Op); 6] = [
            ("==", Op::Eq),
            ("!=", Op::Ne),
            (">=", Op::Ge),
            ("<=", Op::Le),
            (">", Op::Gt),
            ("<", Op::Lt),
        ];

        for (token, op) in OPS {
            if self.eat(token) {
                return Ok(op);
            }
        }

        if self.eat_keyword("begin") {
            return Ok(Op::Begin);
        }

        Err(self.error("expected comparison operator"))
    }

    fn parse_operand(&mut self) -> Result<String> {
        let rest = self.rest();

        if let Some(quote) = rest.chars().next().filter(|c| matches!(c, '\'' | '"')) {
            let Some(end) = rest[1..].find(quote) else {
                return Err(self.error("unterminated quoted operand"));
            };
            let operand = rest[1..=end].to_string();
            self.pos += end + 2;
            return Ok(operand);
        }

        let end = [")", " AND ", " OR "]
            .iter()
            .filter_map(|stop| rest.find(stop))
            .min()
            .unwrap_or(rest.len());
        let operand = rest[..end].trim_end().to_string();

        if operand.is_empty() {
            return Err(self.error("expected operand"));
        }

        self.pos += end;
        Ok(operand)
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` when it stands alone.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let start = self.pos;
        self.skip_ws();

        let rest = self.rest();
        let bounded = rest.starts_with(keyword)
            && rest[keyword.len()..]
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || c == '(');

        if bounded {
            self.pos += keyword.len();
        } else {
            self.pos = start;
        }
        bounded
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, message: &str) -> Error {
        Error::invalid_query(self.src, format!("{message} at offset {}", self.pos))
    }
}

fn compare(value: &Value, op: Op, rhs: &str) -> bool {
    match op {
        Op::Eq => matches(value, rhs),
        Op::Ne => !matches(value, rhs),
        Op::Begin => {
            !value.is_null() && lower(&value.to_text()).starts_with(&lower(rhs))
        }
        Op::Gt => cmp::with_operand(value, rhs) == Some(Ordering::Greater),
        Op::Ge => matches!(
            cmp::with_operand(value, rhs),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Op::Lt => cmp::with_operand(value, rhs) == Some(Ordering::Less),
        Op::Le => matches!(
            cmp::with_operand(value, rhs),
            Some(Ordering::Less | Ordering::Equal)
        ),
    }
}

fn matches(value: &Value, rhs: &str) -> bool {
    if value.is_null() {
        return false;
    }

    let leading = rhs.len() > 1 && rhs.starts_with('@');
    let trailing = rhs.len() > 1 && rhs.ends_with('@');

    if leading || trailing {
        let text = lower(&value.to_text());
        let needle = lower(rhs.trim_start_matches('@').trim_end_matches('@'));

        return match (leading, trailing) {
            (true, true) => text.contains(&needle),
            (true, false) => text.ends_with(&needle),
            _ => text.starts_with(&needle),
        };
    }

    cmp::with_operand(value, rhs) == Some(Ordering::Equal)
}

fn lower(src: &str) -> String {
    src.to_lowercase()
}
