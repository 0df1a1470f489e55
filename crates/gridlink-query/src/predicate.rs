//! Typed query fragments, lowered from grid filter and sort models and
//! serialized by [`Serializer`](crate::Serializer).

use gridlink_core::model::{Direction, Join};

/// A query predicate against an entity collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `path op literal`
    Compare(Compare),

    /// Operands joined with `AND`, without parentheses
    And(Vec<Predicate>),

    /// Operands joined with `join`, parenthesized
    Group { join: Join, operands: Vec<Predicate> },

    /// A filter that contributes nothing
    Empty,
}

impl Predicate {
    pub fn compare(path: impl Into<String>, op: Op, rhs: Literal) -> Predicate {
        Predicate::Compare(Compare {
            path: path.into(),
            op,
            rhs,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Predicate::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub path: String,
    pub op: Op,
    pub rhs: Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Prefix match
    Begin,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Begin => "begin",
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Written as is
    Bare(String),

    /// Wrapped in single quotes
    Quoted(String),

    /// Wrapped in double quotes
    DoubleQuoted(String),

    /// `@` wildcards before and/or after the value
    Pattern {
        value: String,
        leading: bool,
        trailing: bool,
    },
}

/// An order-by clause: `path dir, path dir, ...`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub path: String,
    pub direction: Direction,
}
