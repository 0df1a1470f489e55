use super::Error;

/// Error when a row window could not be fetched.
///
/// The collection did not hand back a list of records for the requested
/// offset. The grid reports this as a page failure and owns any retry.
#[derive(Debug)]
pub(super) struct FetchFailed {
    start: usize,
}

impl std::error::Error for FetchFailed {}

impl core::fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "fetch failed at row {}", self.start)
    }
}

impl Error {
    /// Creates a fetch failure for the window starting at `start`.
    pub fn fetch_failed(start: usize) -> Error {
        Error::from(super::ErrorKind::FetchFailed(FetchFailed { start }))
    }

    /// Returns `true` if this error is a fetch failure.
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FetchFailed(_))
    }
}
