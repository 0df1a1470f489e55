use serde::{Deserialize, Serialize};

/// The attribute types a column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Bool,
    Word,
    String,
    Text,
    Uuid,
    Short,
    Long,
    Number,
    Long64,
    Duration,
    Object,
    Date,
    Image,
    Blob,
}

impl DataType {
    pub const ALL: [DataType; 14] = [
        DataType::Bool,
        DataType::Word,
        DataType::String,
        DataType::Text,
        DataType::Uuid,
        DataType::Short,
        DataType::Long,
        DataType::Number,
        DataType::Long64,
        DataType::Duration,
        DataType::Object,
        DataType::Date,
        DataType::Image,
        DataType::Blob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Word => "word",
            DataType::String => "string",
            DataType::Text => "text",
            DataType::Uuid => "uuid",
            DataType::Short => "short",
            DataType::Long => "long",
            DataType::Number => "number",
            DataType::Long64 => "long64",
            DataType::Duration => "duration",
            DataType::Object => "object",
            DataType::Date => "date",
            DataType::Image => "image",
            DataType::Blob => "blob",
        }
    }

    pub fn is_textual(self) -> bool {
        matches!(self, DataType::Text | DataType::String)
    }

    /// Types the grid offers a number filter for.
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Long | DataType::Number)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            DataType::Word | DataType::Short | DataType::Long | DataType::Long64 | DataType::Duration
        )
    }

    /// Image and object columns cannot be ordered.
    pub fn is_sortable(self) -> bool {
        !matches!(self, DataType::Image | DataType::Object)
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
