use core::fmt;

use crate::NoValueError;

/// A value of `T`, or nothing.
///
/// The state is chosen when the optional is built and never changes: no
/// operation takes `&mut self`, and every transform returns a new value.
/// Absence is a tag, so every absent optional equals every other one and
/// equals [`EMPTY`](crate::EMPTY).
///
/// Falsy values are not absent: `Optional::of(false)`, `Optional::of(0)` and
/// `Optional::of("")` are all present.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// The canonical absent optional.
    pub const fn empty() -> Self {
        Optional { value: None }
    }

    /// Wraps `value`, normalizing `None` to [`Optional::empty`].
    ///
    /// Accepts either a bare `T` or an `Option<T>`; the value is moved in
    /// untouched.
    pub fn of(value: impl Into<Option<T>>) -> Self {
        match value.into() {
            Some(val) => Optional { value: Some(val) },
            None => Self::empty(),
        }
    }

    /// Returns true if a value is held.
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns true if no value is held.
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the held value, or `None` when absent. Never panics.
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Applies `f` to the held value and wraps the result with [`Optional::of`].
    ///
    /// A function returning `None` collapses the result to empty. When
    /// absent, `f` is not called.
    pub fn map<U, R, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> R,
        R: Into<Option<U>>,
    {
        match self.value {
            Some(val) => Optional::of(f(val)),
            None => Optional::empty(),
        }
    }

    /// Applies `f` to the held value and returns its result without
    /// re-wrapping it. A function returning `None` gives `None`, the same as
    /// the absent case, where `f` is not called.
    pub fn flat_map<U, R, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> R,
        R: Into<Option<U>>,
    {
        match self.value {
            Some(val) => f(val).into(),
            None => None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(val) = self.value {
            if predicate(&val) {
                return Optional { value: Some(val) };
            }
        }
        Self::empty()
    }

    /// Returns `self` if present, otherwise the optional built by `supplier`.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Optional<T>,
    {
        match self.value {
            Some(_) => self,
            None => supplier(),
        }
    }

    /// Returns the held value, or `other`.
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the held value, or the result of `supplier`.
    ///
    /// `supplier` runs only when the optional is absent, and then exactly once.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(val) => val,
            None => supplier(),
        }
    }

    /// Returns the held value, or the error built by `error_supplier`.
    ///
    /// The error is handed back exactly as the supplier produced it, so it
    /// can be propagated with `?`. `error_supplier` is not called when a value
    /// is present.
    pub fn or_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.value {
            Some(val) => Ok(val),
            None => {
                log::trace!("optional is empty, returning supplied error");
                Err(error_supplier())
            }
        }
    }

    /// Returns the held value, or [`NoValueError`].
    pub fn or_else_throw(self) -> Result<T, NoValueError> {
        self.or_throw(|| NoValueError)
    }

    /// Calls `consumer` with the held value. Does nothing when absent.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(val) = &self.value {
            consumer(val);
        }
    }

    /// Calls `consumer` with the held value, or `empty_action` when absent.
    /// Exactly one of the two runs.
    pub fn if_present_or_else<F, G>(&self, consumer: F, empty_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(val) => consumer(val),
            None => empty_action(),
        }
    }

    /// Converts into the native `Option<T>`.
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(val) => write!(f, "Optional[value={}]", val),
            None => f.write_str("Optional[empty]"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(val) => write!(f, "Optional[value={:?}]", val),
            None => f.write_str("Optional[empty]"),
        }
    }
}
