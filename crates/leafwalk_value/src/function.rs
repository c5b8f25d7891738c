//! Function values.

use std::sync::Arc;

use crate::Value;

type Callable = dyn Fn(&[Value]) -> Vec<Value> + Send + Sync;

/// A callable value returning an ordered list of results.
///
/// Only zero-argument functions are walked. A function declared with
/// parameters classifies as [`Shape::Other`](crate::Shape::Other).
#[derive(Clone)]
pub struct Function {
    arity: usize,
    call: Arc<Callable>,
}

impl Function {
    /// Creates a zero-argument function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leafwalk_value::{Function, Value};
    ///
    /// let f = Function::nullary(|| vec![Value::from("Manchester"), Value::from("Leeds")]);
    /// let results = f.invoke().unwrap();
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn nullary<F>(f: F) -> Self
    where
        F: Fn() -> Vec<Value> + Send + Sync + 'static,
    {
        Self {
            arity: 0,
            call: Arc::new(move |_| f()),
        }
    }

    /// Creates a function that takes `arity` arguments.
    pub fn with_arity<F>(arity: usize, f: F) -> Self
    where
        F: Fn(&[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        Self {
            arity,
            call: Arc::new(f),
        }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns true if the function can be invoked without arguments.
    #[inline]
    pub fn is_nullary(&self) -> bool {
        self.arity == 0
    }

    /// Calls a zero-argument function once.
    ///
    /// Returns `None` without calling anything if the function requires
    /// arguments. A panic inside the function unwinds to the caller.
    pub fn invoke(&self) -> Option<Vec<Value>> {
        self.is_nullary().then(|| (self.call)(&[]))
    }

    /// Calls the function with explicit arguments.
    ///
    /// Returns `None` if `args` does not match the declared arity.
    pub fn call(&self, args: &[Value]) -> Option<Vec<Value>> {
        (args.len() == self.arity).then(|| (self.call)(args))
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_invoke_nullary() {
        let f = Function::nullary(|| vec![Value::from("a"), Value::from(1)]);
        let results = f.invoke().unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_text(), Some("a"));
    }

    #[test]
    fn test_invoke_with_arguments_is_refused() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let f = Function::with_arity(1, move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            args.to_vec()
        });

        assert!(!f.is_nullary());
        assert!(f.invoke().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_call_checks_arity() {
        let echo = Function::with_arity(1, |args| args.to_vec());

        assert!(echo.call(&[]).is_none());
        let out = echo.call(&[Value::from("x")]).unwrap();
        assert_eq!(out[0].as_text(), Some("x"));
    }

    #[test]
    fn test_debug_hides_closure() {
        let f = Function::nullary(Vec::new);
        assert_eq!(format!("{:?}", f), "Function { arity: 0, .. }");
    }
}
