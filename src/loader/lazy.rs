//! Single-assignment deferred value.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};

type Init<T> = Box<dyn FnOnce() -> Option<T> + Send>;

/// A value computed on first access.
///
/// Clones share the same cell, so forcing one clone settles all of them.
/// The initializer may legitimately produce nothing (e.g. a batch that did
/// not return the requested key); `force` then yields `None` forever.
///
/// Forcing a `Lazy` from inside its own initializer deadlocks.
pub struct Lazy<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    value: OnceLock<Option<T>>,
    init: Mutex<Option<Init<T>>>,
}

impl<T> Lazy<T> {
    /// Create a placeholder backed by `init`.
    pub fn new(init: impl FnOnce() -> Option<T> + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: OnceLock::new(),
                init: Mutex::new(Some(Box::new(init))),
            }),
        }
    }

    /// Create an already-settled placeholder.
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Some(value));
        Self {
            inner: Arc::new(Inner {
                value: cell,
                init: Mutex::new(None),
            }),
        }
    }

    /// Materialize the value, blocking while another thread runs the initializer.
    pub fn force(&self) -> Option<&T> {
        self.inner
            .value
            .get_or_init(|| {
                let init = self.inner.init.lock().take();
                init.and_then(|f| f())
            })
            .as_ref()
    }

    /// Whether the initializer has already run.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.inner.value.get().is_some()
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.value.get() {
            Some(Some(value)) => f.debug_tuple("Lazy").field(value).finish(),
            Some(None) => f.write_str("Lazy(<empty>)"),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_force_runs_init_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(42)
        });

        assert!(!lazy.is_settled());
        assert_eq!(lazy.force(), Some(&42));
        assert_eq!(lazy.force(), Some(&42));
        assert!(lazy.is_settled());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_cell() {
        let lazy = Lazy::new(|| Some("project".to_string()));
        let other = lazy.clone();
        lazy.force();
        assert!(other.is_settled());
        assert_eq!(other.force().map(String::as_str), Some("project"));
    }

    #[test]
    fn test_empty_init() {
        let lazy: Lazy<u32> = Lazy::new(|| None);
        assert_eq!(lazy.force(), None);
        assert!(lazy.is_settled());
        assert_eq!(format!("{lazy:?}"), "Lazy(<empty>)");
    }

    #[test]
    fn test_ready() {
        let lazy = Lazy::ready(7);
        assert!(lazy.is_settled());
        assert_eq!(lazy.force(), Some(&7));
        assert_eq!(format!("{lazy:?}"), "Lazy(7)");
    }

    #[test]
    fn test_concurrent_force() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            Some(1u8)
        });

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(lazy.force(), Some(&1)));
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
