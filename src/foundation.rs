//! Core traits and error types for the rule engine.

use crate::combinators::{And, Not, Or};
use crate::value::Value;

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// A pure, total check over a single [`Value`].
///
/// Predicates must tolerate any value shape — absent, empty, wrong-typed —
/// by returning `false` rather than panicking. They hold no mutable state
/// and perform no I/O, so one predicate instance can back concurrent
/// validation calls.
///
/// Any `Fn(&Value) -> bool + Send + Sync` closure is a predicate:
///
/// ```
/// use fieldcheck::foundation::Predicate;
/// use fieldcheck::value::Value;
///
/// let even = |value: &Value| value.as_number().is_some_and(|n| n % 2.0 == 0.0);
/// assert!(even.test(&Value::from(4i64)));
/// assert!(!even.test(&Value::Absent));
/// ```
pub trait Predicate: Send + Sync {
    /// Tests the value. `true` means the value satisfies this predicate.
    fn test(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn test(&self, value: &Value) -> bool {
        self(value)
    }
}

impl Predicate for Box<dyn Predicate> {
    fn test(&self, value: &Value) -> bool {
        self.as_ref().test(value)
    }
}

// ============================================================================
// PREDICATE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for predicates.
///
/// Automatically implemented for every [`Predicate`], giving a fluent API
/// for composing checks before attaching them to a rule.
///
/// # Examples
///
/// ```
/// use fieldcheck::prelude::*;
///
/// let username = required().and(min_length(3)).and(max_length(20));
/// assert!(username.test(&Value::from("alice")));
/// assert!(!username.test(&Value::from("al")));
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Combines two predicates; both must pass. Short-circuits on the
    /// first failure.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And::new(self, other)
    }

    /// Combines two predicates; at least one must pass. Short-circuits on
    /// the first success.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or::new(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

// ============================================================================
// ENGINE ERROR
// ============================================================================

/// Errors surfaced only by the opt-in strict validation path.
///
/// The default engine has no failure mode besides "produced a message":
/// unknown required fields are silently skipped, and no input shape makes
/// it return `Err`. Strict mode instead treats a required field with no
/// configured rule set as a configuration bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A required field has no entry in the rule table.
    #[error("no validation rules configured for required field '{0}'")]
    UnknownField(String),
}

// ============================================================================
// TESTS
// ============================================================================
