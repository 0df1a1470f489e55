use super::Error;

/// Error when a required data binding is not configured or cannot be
/// resolved by the host.
#[derive(Debug)]
pub(super) struct MissingBinding {
    binding: Box<str>,
}

impl std::error::Error for MissingBinding {}

impl core::fmt::Display for MissingBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing binding: {}", self.binding)
    }
}

impl Error {
    /// Creates a missing binding error naming the binding property.
    pub fn missing_binding(binding: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingBinding(MissingBinding {
            binding: binding.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing binding error.
    pub fn is_missing_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingBinding(_))
    }
}
