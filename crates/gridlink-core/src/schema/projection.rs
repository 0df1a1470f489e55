use super::{Column, DataType};
use crate::{Record, Value};

use uuid::Uuid;

/// A grid row: column title to typed cell value.
pub type Row = Record;

/// Maps entities to grid rows, one typed field per column.
#[derive(Debug, Clone)]
pub struct Projection {
    fields: Vec<Field>,
}

#[derive(Debug, Clone)]
struct Field {
    title: String,
    path: Vec<String>,
    ty: Option<DataType>,
}

impl Projection {
    pub fn new(columns: &[Column]) -> Projection {
        Projection {
            fields: columns
                .iter()
                .map(|column| Field {
                    title: column.title.clone(),
                    path: column.path(),
                    ty: column.data_type,
                })
                .collect(),
        }
    }

    /// Reads every column's source from `record`, coerced to the column's
    /// data type. Values that do not fit the type project to null.
    pub fn project(&self, record: &Record) -> Row {
        self.fields
            .iter()
            .map(|field| {
                let value = record.lookup(&field.path);
                let value = match field.ty {
                    Some(ty) => coerce(ty, value),
                    None => value,
                };
                (field.title.clone(), value)
            })
            .collect()
    }
}

fn coerce(ty: DataType, value: Value) -> Value {
    if value.is_null() {
        return value;
    }

    match ty {
        DataType::Bool => match value {
            Value::Bool(_) => value,
            Value::String(ref s) => match s.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::Null,
            },
            _ => Value::Null,
        },
        ty if ty.is_integer() => match value {
            Value::String(ref s) => s.trim().parse::<i64>().map(Value::I64).unwrap_or_default(),
            _ => value.as_i64().map(Value::I64).unwrap_or_default(),
        },
        DataType::Number => match value {
            Value::I64(_) | Value::F64(_) => value,
            Value::String(ref s) => s.trim().parse::<f64>().map(Value::F64).unwrap_or_default(),
            _ => Value::Null,
        },
        DataType::String | DataType::Text => match value {
            Value::Record(_) | Value::Object(_) => Value::Null,
            Value::String(_) => value,
            other => Value::String(other.to_text()),
        },
        DataType::Uuid => match value {
            Value::Uuid(_) => value,
            Value::String(ref s) => Uuid::parse_str(s).map(Value::Uuid).unwrap_or_default(),
            _ => Value::Null,
        },
        DataType::Date => value.to_date().map(Value::Date).unwrap_or_default(),
        DataType::Image => match value {
            Value::String(_) | Value::Record(_) | Value::Object(_) => value,
            _ => Value::Null,
        },
        DataType::Object => match value {
            Value::Record(_) | Value::Object(_) => value,
            _ => Value::Null,
        },
        _ => Value::Null,
    }
}
