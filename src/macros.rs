//! Macros for declaring predicates and rule tables with minimal boilerplate.
//!
//! - [`predicate!`] — struct definition, [`Predicate`](crate::foundation::Predicate)
//!   implementation, and factory function in one declaration.
//! - [`rule_table!`] — declarative rule-table literal.

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Creates a complete predicate: struct definition, `Predicate`
/// implementation, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; unit predicates also get
/// `Copy`, `PartialEq`, `Eq`, and `Hash`.
///
/// # Variants
///
/// **Unit predicate** (zero-sized, no fields):
///
/// ```
/// use fieldcheck::predicate;
/// use fieldcheck::foundation::Predicate;
/// use fieldcheck::value::Value;
///
/// predicate! {
///     /// Passes when the value is textual.
///     pub IsText;
///     test(value) { value.as_text().is_some() }
///     fn is_text();
/// }
///
/// assert!(is_text().test(&Value::from("hi")));
/// assert!(!is_text().test(&Value::from(1i64)));
/// ```
///
/// **Struct with fields** (factory takes the fields in order):
///
/// ```
/// use fieldcheck::predicate;
/// use fieldcheck::foundation::Predicate;
/// use fieldcheck::value::Value;
///
/// predicate! {
///     /// Passes when the value is a number of at least `min`.
///     pub AtLeast { min: f64 };
///     test(self, value) { value.as_number().is_some_and(|n| n >= self.min) }
///     fn at_least(min: f64);
/// }
///
/// assert!(at_least(18.0).test(&Value::from(21i64)));
/// assert!(!at_least(18.0).test(&Value::Absent));
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Unit predicate (no fields) ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        test($value:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Predicate for $name {
            fn test(&self, $value: &$crate::value::Value) -> bool $body
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields, factory takes the fields in order ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident : $ty:ty),+ $(,)? };
        test($self_:ident, $value:ident) $body:block
        fn $factory:ident($($arg:ident : $aty:ty),+);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $( $field: $ty, )+
        }

        impl $crate::foundation::Predicate for $name {
            fn test(&$self_, $value: &$crate::value::Value) -> bool $body
        }

        #[must_use]
        $vis fn $factory($($arg: $aty),+) -> $name {
            $name { $($arg),+ }
        }
    };
}

// ============================================================================
// RULE TABLE MACRO
// ============================================================================

/// Builds a [`RuleTable`](crate::rule::RuleTable) from a declarative
/// listing of fields, predicates, and messages.
///
/// Rule order within a field is the listing order; at the record level
/// only the first failing rule's message surfaces per field.
///
/// # Examples
///
/// ```
/// use fieldcheck::rule_table;
/// use fieldcheck::prelude::*;
///
/// let table = rule_table! {
///     "email" => [
///         required() => "Email is required",
///         email() => "Email must contain @ symbol",
///     ],
///     "password" => [
///         required() => "Password is required",
///         password() => "Password must be at least 8 characters",
///     ],
/// };
///
/// let record = Record::new().set("email", "j@x.com").set("password", "");
/// let errors = table.validate(&record, &["email", "password"]);
/// assert_eq!(errors, vec!["Password is required"]);
/// ```
#[macro_export]
macro_rules! rule_table {
    (
        $( $field:expr => [ $( $predicate:expr => $message:expr ),+ $(,)? ] ),* $(,)?
    ) => {{
        let mut builder = $crate::rule::RuleTable::builder();
        $(
            let mut rules = $crate::rule::RuleSet::new();
            $( rules = rules.rule($predicate, $message); )+
            builder = builder.field($field, rules);
        )*
        builder.build()
    }};
}

// ============================================================================
// TESTS
// ============================================================================
