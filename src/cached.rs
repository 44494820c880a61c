use once_cell::unsync::OnceCell;
use std::fmt;

/// Wraps a zero-argument function and remembers its first successful result.
///
/// The wrapped function runs at most once per successful result: after
/// [`call`](Self::call) or [`try_call`](Self::try_call) has produced a value,
/// every later call returns that value without invoking the function again.
/// A failed [`try_call`](Self::try_call) leaves the cache empty, so the next
/// call runs the function again.
///
/// `Cached` is not `Sync`; wrap it in your own synchronization if the result
/// has to be shared across threads.
pub struct Cached<F, T> {
    function: F,
    result: OnceCell<T>,
}

/// Shorthand for [`Cached::new`] on an infallible function. Build fallible
/// wrappers with [`Cached::new`] so that [`Cached::try_call`] applies.
pub fn cached<F, T>(function: F) -> Cached<F, T>
where
    F: Fn() -> T,
{
    Cached::new(function)
}

impl<F, T> Cached<F, T> {
    pub fn new(function: F) -> Self {
        Self {
            function,
            result: OnceCell::new(),
        }
    }

    /// Returns the cached result, invoking the function on the first call.
    pub fn call(&self) -> &T
    where
        F: Fn() -> T,
    {
        self.result.get_or_init(|| (self.function)())
    }

    /// Fallible variant of [`call`](Self::call). Errors are returned as-is
    /// and never cached.
    pub fn try_call<E>(&self) -> Result<&T, E>
    where
        F: Fn() -> Result<T, E>,
    {
        self.result.get_or_try_init(|| (self.function)())
    }

    /// The cached result, if any, without invoking the function.
    pub fn get(&self) -> Option<&T> {
        self.result.get()
    }

    pub fn is_cached(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.result.into_inner()
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Cached<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cached")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "cached_test.rs"]
mod cached_test;
