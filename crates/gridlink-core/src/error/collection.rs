use super::Error;

/// Error reported by an external collaborator (entity collection, pointer or
/// value store).
#[derive(Debug)]
pub(super) struct CollectionError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "collection error: {}", self.inner)
    }
}

impl Error {
    /// Wraps an error raised by a collaborator.
    pub fn collection(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Collection(CollectionError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error was raised by a collaborator.
    pub fn is_collection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Collection(_))
    }
}
