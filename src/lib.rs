//! # fieldcheck
//!
//! Rule-driven validation for dynamic records.
//!
//! A [`Record`](value::Record) maps field names to loosely typed values;
//! a [`RuleTable`](rule::RuleTable) maps field names to ordered rules,
//! each a predicate plus a failure message. Validating a record walks a
//! caller-supplied required-field list in order and collects at most one
//! message per field — the first failing rule wins.
//!
//! ## Quick start
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let table = rule_table! {
//!     "email" => [
//!         required() => "Email is required",
//!         email() => "Email must contain @ symbol",
//!     ],
//!     "password" => [
//!         required() => "Password is required",
//!         password() => "Password must be at least 8 characters",
//!     ],
//! };
//!
//! let record = Record::new().set("email", "j@x.com").set("password", "short");
//! let errors = table.validate(&record, &["email", "password"]);
//! assert_eq!(errors, vec!["Password must be at least 8 characters"]);
//! ```
//!
//! ## Guarantees
//!
//! - No operation panics or returns `Err` on the default path: absent
//!   fields, wrong-typed values, and unconfigured field names all flow
//!   through as defined outcomes (an unconfigured required field is
//!   silently skipped; [`validate_record_strict`](engine::validate_record_strict)
//!   opts into treating it as a configuration error instead).
//! - Error messages appear in required-field order, one per failing field,
//!   and are never deduplicated.
//! - A built [`RuleTable`](rule::RuleTable) is immutable and `Send + Sync`;
//!   concurrent callers share one table without locking.
//!
//! ## Creating predicates
//!
//! Use the [`predicate!`] macro for zero-boilerplate predicates, or
//! implement [`Predicate`](foundation::Predicate) manually (any
//! `Fn(&Value) -> bool + Send + Sync` closure already qualifies).

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod profiles;
pub mod rule;
pub mod value;
