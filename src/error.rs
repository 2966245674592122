use alloc::string::String;

/// An error occurred when unescaping or validating a percent-encoded string.
///
/// The input contains a `%` that is not followed by two hexadecimal digits,
/// either because the input ends too early or because a digit is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MalformedEscapeError {
    pub(crate) index: usize,
}

impl MalformedEscapeError {
    /// Returns the byte offset of the offending `%` in the input.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.index
    }
}

/// An error occurred when resolving the name of an encoding kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKindError {
    pub(crate) name: String,
}

impl UnknownKindError {
    /// Returns the name that matched no encoding kind.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recovers the rejected name.
    #[inline]
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedEscapeError {}

#[cfg(feature = "std")]
impl std::error::Error for UnknownKindError {}
