use super::Error;

/// Error when a query or order-by expression cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidQuery {
    query: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query `{}`: {}", self.query, self.message)
    }
}

impl Error {
    /// Creates an invalid query error for `query`.
    pub fn invalid_query(query: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            query: query.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid query error.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidQuery(_))
    }
}
