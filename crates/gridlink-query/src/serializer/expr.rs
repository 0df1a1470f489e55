use super::{Delimited, Formatter, ToQuery};

use crate::{Compare, Literal, Op, OrderByExpr, Predicate};

use gridlink_core::model::Direction;

impl ToQuery for &Predicate {
    fn to_query(self, f: &mut Formatter<'_>) {
        match self {
            Predicate::Compare(compare) => fmt!(f, compare),
            Predicate::And(operands) => fmt!(f, Delimited(operands, " AND ")),
            Predicate::Group { join, operands } => {
                let sep = format!(" {} ", join.as_str());
                fmt!(f, "(", Delimited(operands, &sep), ")");
            }
            Predicate::Empty => {}
        }
    }
}

impl ToQuery for &Compare {
    fn to_query(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.path, " ", self.op, " ", &self.rhs);
    }
}

impl ToQuery for Op {
    fn to_query(self, f: &mut Formatter<'_>) {
        fmt!(f, self.as_str());
    }
}

impl ToQuery for &Literal {
    fn to_query(self, f: &mut Formatter<'_>) {
        match self {
            Literal::Bare(value) => fmt!(f, value),
            Literal::Quoted(value) => fmt!(f, "'", value, "'"),
            Literal::DoubleQuoted(value) => fmt!(f, "\"", value, "\""),
            Literal::Pattern {
                value,
                leading,
                trailing,
            } => {
                if *leading {
                    fmt!(f, "@");
                }
                fmt!(f, value);
                if *trailing {
                    fmt!(f, "@");
                }
            }
        }
    }
}

impl ToQuery for &OrderByExpr {
    fn to_query(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.path, " ", self.direction);
    }
}

impl ToQuery for Direction {
    fn to_query(self, f: &mut Formatter<'_>) {
        fmt!(f, self.as_str());
    }
}
