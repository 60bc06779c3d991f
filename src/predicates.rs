//! Built-in predicates.
//!
//! The three predicates the user-data rules are built from — [`required`],
//! [`email`], [`password`] — plus generic text and numeric checks. All of
//! them are total over [`Value`]: absent or wrong-typed input fails the
//! check, it never panics.
//!
//! Text lengths are counted in Unicode scalar values (chars), not bytes.

use regex::Regex;

use crate::predicate;
use crate::value::Value;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

// ============================================================================
// REQUIRED
// ============================================================================

predicate! {
    /// Passes when the value is present.
    ///
    /// Textual values must be non-empty after trimming; other values must
    /// be truthy (`true`, or a nonzero non-NaN number). Absent always
    /// fails.
    pub Required;
    test(value) {
        match value {
            Value::Text(s) => !s.trim().is_empty(),
            other => other.is_truthy(),
        }
    }
    fn required();
}

// ============================================================================
// EMAIL
// ============================================================================

predicate! {
    /// Passes when the value is text containing `@`.
    ///
    /// Deliberately a weak syntactic check, not an email grammar: `"a@"`
    /// passes. Callers wanting more should compose with [`matches()`].
    pub Email;
    test(value) {
        matches!(value, Value::Text(s) if s.contains('@'))
    }
    fn email();
}

// ============================================================================
// PASSWORD
// ============================================================================

predicate! {
    /// Passes when the value is text of at least [`PASSWORD_MIN_LEN`] chars.
    pub Password;
    test(value) {
        matches!(value, Value::Text(s) if s.chars().count() >= PASSWORD_MIN_LEN)
    }
    fn password();
}

// ============================================================================
// TEXT LENGTH
// ============================================================================

predicate! {
    /// Passes when the value is text of at least `min` chars.
    pub MinLength { min: usize };
    test(self, value) {
        matches!(value, Value::Text(s) if s.chars().count() >= self.min)
    }
    fn min_length(min: usize);
}

predicate! {
    /// Passes when the value is text of at most `max` chars.
    ///
    /// Non-text fails; combine with [`required`] when presence is also
    /// needed (empty text is within any maximum).
    pub MaxLength { max: usize };
    test(self, value) {
        matches!(value, Value::Text(s) if s.chars().count() <= self.max)
    }
    fn max_length(max: usize);
}

// ============================================================================
// TEXT CONTENT
// ============================================================================

/// Passes when the value is text containing a fixed substring.
#[derive(Debug, Clone)]
pub struct Contains {
    needle: String,
}

impl crate::foundation::Predicate for Contains {
    fn test(&self, value: &Value) -> bool {
        matches!(value, Value::Text(s) if s.contains(&self.needle))
    }
}

/// Creates a [`Contains`] predicate.
#[must_use]
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains {
        needle: needle.into(),
    }
}

/// Passes when the value is text matching a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl crate::foundation::Predicate for Matches {
    fn test(&self, value: &Value) -> bool {
        matches!(value, Value::Text(s) if self.regex.is_match(s))
    }
}

/// Creates a [`Matches`] predicate from a compiled regex.
#[must_use]
pub fn matches(regex: Regex) -> Matches {
    Matches { regex }
}

/// Creates a [`Matches`] predicate from a pattern string.
///
/// # Errors
///
/// Returns [`regex::Error`] when the pattern does not compile.
pub fn matches_pattern(pattern: &str) -> Result<Matches, regex::Error> {
    Ok(Matches {
        regex: Regex::new(pattern)?,
    })
}

// ============================================================================
// NUMERIC
// ============================================================================

predicate! {
    /// Passes when the value is a number of at least `min`.
    pub MinValue { min: f64 };
    test(self, value) {
        value.as_number().is_some_and(|n| n >= self.min)
    }
    fn min_value(min: f64);
}

predicate! {
    /// Passes when the value is a number of at most `max`.
    pub MaxValue { max: f64 };
    test(self, value) {
        value.as_number().is_some_and(|n| n <= self.max)
    }
    fn max_value(max: f64);
}

// ============================================================================
// TESTS
// ============================================================================
