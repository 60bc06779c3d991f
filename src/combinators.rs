//! Logical combinators over predicates.
//!
//! These mirror the usual boolean connectives: [`And`], [`Or`], [`Not`],
//! plus [`AllOf`]/[`AnyOf`] for a dynamic number of predicates. The fluent
//! forms live on [`PredicateExt`](crate::foundation::PredicateExt); the
//! free functions here are for call sites that prefer prefix notation.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let display_name = required().and(max_length(40));
//! assert!(display_name.test(&Value::from("Ada")));
//! assert!(!display_name.test(&Value::Absent));
//! ```

use crate::foundation::Predicate;
use crate::value::Value;

// ============================================================================
// AND
// ============================================================================

/// Logical conjunction of two predicates. Short-circuits on the first
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right predicates.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Predicate, R: Predicate> Predicate for And<L, R> {
    fn test(&self, value: &Value) -> bool {
        self.left.test(value) && self.right.test(value)
    }
}

/// Creates an [`And`] combinator from two predicates.
pub const fn and<L: Predicate, R: Predicate>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

// ============================================================================
// OR
// ============================================================================

/// Logical disjunction of two predicates. Short-circuits on the first
/// success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right predicates.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Predicate, R: Predicate> Predicate for Or<L, R> {
    fn test(&self, value: &Value) -> bool {
        self.left.test(value) || self.right.test(value)
    }
}

/// Creates an [`Or`] combinator from two predicates.
pub const fn or<L: Predicate, R: Predicate>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}

// ============================================================================
// NOT
// ============================================================================

/// Logical negation of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Extracts the inner predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Predicate> Predicate for Not<P> {
    fn test(&self, value: &Value) -> bool {
        !self.inner.test(value)
    }
}

/// Creates a [`Not`] combinator from a predicate.
pub const fn not<P: Predicate>(inner: P) -> Not<P> {
    Not::new(inner)
}

// ============================================================================
// ALL OF / ANY OF
// ============================================================================

/// Conjunction over a dynamic number of predicates. Passes on an empty
/// list. Short-circuits on the first failure.
#[derive(Debug, Clone)]
pub struct AllOf<P> {
    predicates: Vec<P>,
}

impl<P: Predicate> Predicate for AllOf<P> {
    fn test(&self, value: &Value) -> bool {
        self.predicates.iter().all(|p| p.test(value))
    }
}

/// Creates an [`AllOf`] combinator from a vector of predicates.
#[must_use]
pub fn all_of<P: Predicate>(predicates: Vec<P>) -> AllOf<P> {
    AllOf { predicates }
}

/// Disjunction over a dynamic number of predicates. Fails on an empty
/// list. Short-circuits on the first success.
#[derive(Debug, Clone)]
pub struct AnyOf<P> {
    predicates: Vec<P>,
}

impl<P: Predicate> Predicate for AnyOf<P> {
    fn test(&self, value: &Value) -> bool {
        self.predicates.iter().any(|p| p.test(value))
    }
}

/// Creates an [`AnyOf`] combinator from a vector of predicates.
#[must_use]
pub fn any_of<P: Predicate>(predicates: Vec<P>) -> AnyOf<P> {
    AnyOf { predicates }
}

// ============================================================================
// TESTS
// ============================================================================
