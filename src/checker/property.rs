//! Property Checker Module
//!
//! Defines the composable predicate value used by every counting operation.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

type EvalFn<T> = dyn Fn(&T) -> Result<bool> + Send + Sync;

// == Property Checker ==
/// A reusable, composable test of whether an element has some property.
///
/// Cloning is cheap: clones share the underlying predicate. Composition via
/// [`and`](Self::and), [`or`](Self::or) and [`negate`](Self::negate) builds a
/// new checker that holds its operands, leaving them usable on their own.
pub struct PropertyChecker<T: ?Sized> {
    eval: Arc<EvalFn<T>>,
}

impl<T: ?Sized + 'static> PropertyChecker<T> {
    // == Constructors ==
    /// Creates a checker from an infallible predicate.
    ///
    /// A panic inside `predicate` propagates out of [`evaluate`](Self::evaluate);
    /// the counting engine catches it and reports it like a failure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(move |element: &T| Ok(predicate(element))),
        }
    }

    /// Creates a checker from a predicate that may fail for some elements.
    ///
    /// The counting engine treats a failure as "does not have the property"
    /// and reports it to its failure sink.
    pub fn fallible<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(predicate),
        }
    }

    /// A checker that accepts every element.
    pub fn always_true() -> Self {
        Self::new(|_| true)
    }

    /// A checker that rejects every element.
    pub fn always_false() -> Self {
        Self::new(|_| false)
    }

    // == Evaluation ==
    /// Tests one element, surfacing evaluation failures.
    pub fn evaluate(&self, element: &T) -> Result<bool> {
        (self.eval)(element)
    }

    /// Tests one element, treating an evaluation failure as `false`.
    pub fn has_property(&self, element: &T) -> bool {
        self.evaluate(element).unwrap_or(false)
    }

    // == Composition ==
    /// Logical AND with short-circuit: `other` runs only when `self` passes.
    pub fn and(&self, other: &PropertyChecker<T>) -> PropertyChecker<T> {
        let left = self.clone();
        let right = other.clone();
        Self::fallible(move |element| Ok(left.evaluate(element)? && right.evaluate(element)?))
    }

    /// Logical OR with short-circuit: `other` runs only when `self` fails.
    pub fn or(&self, other: &PropertyChecker<T>) -> PropertyChecker<T> {
        let left = self.clone();
        let right = other.clone();
        Self::fallible(move |element| Ok(left.evaluate(element)? || right.evaluate(element)?))
    }

    /// Logical complement. Evaluation failures pass through unchanged.
    pub fn negate(&self) -> PropertyChecker<T> {
        let inner = self.clone();
        Self::fallible(move |element| Ok(!inner.evaluate(element)?))
    }
}

impl<U: 'static> PropertyChecker<Option<U>> {
    /// Accepts absent values.
    pub fn is_none() -> Self {
        Self::new(|element: &Option<U>| element.is_none())
    }

    /// Accepts present values.
    pub fn is_some() -> Self {
        Self::new(|element: &Option<U>| element.is_some())
    }
}

impl<T: ?Sized> Clone for PropertyChecker<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T: ?Sized> fmt::Debug for PropertyChecker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChecker")
            .field("shared", &Arc::strong_count(&self.eval))
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CounterError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn even() -> PropertyChecker<i64> {
        PropertyChecker::new(|n: &i64| n % 2 == 0)
    }

    fn positive() -> PropertyChecker<i64> {
        PropertyChecker::new(|n: &i64| *n > 0)
    }

    #[test]
    fn test_base_cases() {
        assert!(PropertyChecker::<i64>::always_true().has_property(&7));
        assert!(!PropertyChecker::<i64>::always_false().has_property(&7));
        assert!(PropertyChecker::<Option<i64>>::is_none().has_property(&None));
        assert!(!PropertyChecker::<Option<i64>>::is_none().has_property(&Some(1)));
        assert!(PropertyChecker::<Option<i64>>::is_some().has_property(&Some(1)));
        assert!(!PropertyChecker::<Option<i64>>::is_some().has_property(&None));
    }

    #[test]
    fn test_and_or_negate() {
        let both = even().and(&positive());
        assert!(both.has_property(&4));
        assert!(!both.has_property(&-4));
        assert!(!both.has_property(&3));

        let either = even().or(&positive());
        assert!(either.has_property(&-4));
        assert!(either.has_property(&3));
        assert!(!either.has_property(&-3));

        let odd = even().negate();
        assert!(odd.has_property(&3));
        assert!(!odd.has_property(&4));
        assert!(even().negate().negate().has_property(&4));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let tracked = PropertyChecker::new(move |_: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let checker = PropertyChecker::always_false().and(&tracked);
        assert!(!checker.has_property(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let checker = PropertyChecker::always_true().or(&tracked);
        assert!(checker.has_property(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fallible_errors_propagate_through_composition() {
        let failing = PropertyChecker::fallible(|n: &i64| {
            if *n == 0 {
                Err(CounterError::evaluation("zero is not allowed"))
            } else {
                Ok(true)
            }
        });

        assert!(failing.evaluate(&0).is_err());
        assert!(failing.negate().evaluate(&0).is_err());
        assert!(positive().or(&failing).evaluate(&0).is_err());
        assert!(!failing.has_property(&0));
        assert!(failing.has_property(&5));
    }

    #[test]
    fn test_unsized_element_type() {
        let short = PropertyChecker::new(|s: &str| s.len() < 4);
        assert!(short.has_property("abc"));
        assert!(!short.has_property("abcd"));
    }
}
