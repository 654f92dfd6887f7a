use core::fmt;

use crate::Optional;

/// The canonical absent value.
///
/// `Empty` is zero-sized, so there is exactly one value of it. Every absent
/// [`Optional`], whatever its `T`, compares equal to [`EMPTY`], which lets
/// callers check for absence without naming the value type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Empty;

/// Process-wide empty marker.
pub static EMPTY: Empty = Empty;

impl Empty {
    /// Builds an absent `Optional<T>`.
    pub const fn into_optional<T>(self) -> Optional<T> {
        Optional::empty()
    }
}

impl<T> From<Empty> for Optional<T> {
    fn from(_: Empty) -> Self {
        Optional::empty()
    }
}

impl<T> PartialEq<Empty> for Optional<T> {
    fn eq(&self, _: &Empty) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Optional<T>> for Empty {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_empty()
    }
}

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Optional[empty]")
    }
}
