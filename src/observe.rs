use std::fmt;
use std::sync::Arc;

/// Callback a host UI registers to be told about controller state changes.
pub struct Listener<T>(Option<Arc<dyn Fn(&T) + Send + Sync>>);

impl<T> Listener<T> {
    pub fn new(f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn emit(&self, value: &T) {
        if let Some(f) = &self.0 {
            f(value);
        }
    }
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.is_set()).finish()
    }
}
