//! Prelude module for convenient imports.
//!
//! A single `use fieldcheck::prelude::*;` brings in the value and record
//! types, the rule types, the engine entry points, and every built-in
//! predicate.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let table = rule_table! {
//!     "email" => [
//!         required() => "Email is required",
//!         email() => "Email must contain @ symbol",
//!     ],
//! };
//!
//! let record = Record::new().set("email", "j@x.com");
//! assert!(table.validate(&record, &["email"]).is_empty());
//! ```

// ============================================================================
// FOUNDATION: traits and errors
// ============================================================================

pub use crate::foundation::{EngineError, Predicate, PredicateExt};

// ============================================================================
// VALUES AND RULES
// ============================================================================

pub use crate::rule::{Messages, Rule, RuleSet, RuleTable, RuleTableBuilder};
pub use crate::value::{Record, Value};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{ErrorList, validate_field, validate_record, validate_record_strict};

// ============================================================================
// PREDICATES AND COMBINATORS
// ============================================================================

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::predicates::*;

pub use crate::combinators::{AllOf, And, AnyOf, Not, Or, all_of, and, any_of, not, or};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::rule_table;

// ============================================================================
// PROFILES
// ============================================================================

pub use crate::profiles::{
    LOGIN_FIELDS, PROFILE_FIELDS, REGISTRATION_FIELDS, user_rules, validate_login,
    validate_profile, validate_registration,
};
