//! The validation engine: record + required fields + rule table → errors.
//!
//! Every operation here is a pure function of its inputs. The engine never
//! mutates the record or the table, never logs, and — on the default path —
//! never returns an error of its own: validation outcomes are messages,
//! not `Err` values.

use crate::foundation::EngineError;
use crate::rule::{Messages, RuleSet, RuleTable};
use crate::value::{Record, Value};

/// The ordered result of a record validation: at most one message per
/// required field, in required-field order. Empty means every field passed.
pub type ErrorList = Vec<std::borrow::Cow<'static, str>>;

/// Evaluates every rule in `rules` against `value`, returning the messages
/// of all failing rules in rule order.
///
/// This is the exhaustive per-field view. [`validate_record`] instead
/// keeps only the first failure per field.
///
/// # Examples
///
/// ```
/// use fieldcheck::prelude::*;
/// use fieldcheck::engine::validate_field;
///
/// let rules = RuleSet::new()
///     .rule(required(), "Email is required")
///     .rule(email(), "Email must contain @ symbol");
///
/// let failures = validate_field(&Value::from(""), &rules);
/// assert_eq!(
///     failures.as_slice(),
///     ["Email is required", "Email must contain @ symbol"]
/// );
/// ```
#[must_use]
pub fn validate_field(value: &Value, rules: &RuleSet) -> Messages {
    rules.failures(value)
}

/// Validates `record` against `table` for each field in `required_fields`,
/// in order.
///
/// Per field: a name with no entry in the table is silently skipped (it is
/// not validated and produces no error); otherwise the field's rules run
/// in order and the first failing rule contributes its message. Fields
/// whose rules all pass contribute nothing.
///
/// The result is empty iff every listed field passed. Field order in the
/// output follows `required_fields`, never the table's iteration order.
///
/// # Examples
///
/// ```
/// use fieldcheck::prelude::*;
///
/// let table = rule_table! {
///     "firstName" => [required() => "First name is required"],
///     "email" => [
///         required() => "Email is required",
///         email() => "Email must contain @ symbol",
///     ],
/// };
///
/// let record = Record::new().set("firstName", "").set("email", "bad");
/// let errors = validate_record(&record, &["firstName", "email"], &table);
/// assert_eq!(
///     errors,
///     vec!["First name is required", "Email must contain @ symbol"]
/// );
/// ```
#[must_use]
pub fn validate_record(record: &Record, required_fields: &[&str], table: &RuleTable) -> ErrorList {
    let mut errors = ErrorList::new();
    for &field in required_fields {
        let Some(rules) = table.rules_for(field) else {
            continue;
        };
        if let Some(message) = rules.first_failure(record.get(field)) {
            errors.push(message);
        }
    }
    errors
}

/// Strict variant of [`validate_record`]: a required field with no entry
/// in the table is a configuration bug, not a skip.
///
/// # Errors
///
/// Returns [`EngineError::UnknownField`] for the first required field the
/// table does not configure. Ordinary validation failures are still
/// messages in the `Ok` list, never `Err`.
pub fn validate_record_strict(
    record: &Record,
    required_fields: &[&str],
    table: &RuleTable,
) -> Result<ErrorList, EngineError> {
    let mut errors = ErrorList::new();
    for &field in required_fields {
        let rules = table
            .rules_for(field)
            .ok_or_else(|| EngineError::UnknownField(field.to_string()))?;
        if let Some(message) = rules.first_failure(record.get(field)) {
            errors.push(message);
        }
    }
    Ok(errors)
}

impl RuleTable {
    /// Method form of [`validate_record`].
    #[must_use]
    pub fn validate(&self, record: &Record, required_fields: &[&str]) -> ErrorList {
        validate_record(record, required_fields, self)
    }

    /// Method form of [`validate_record_strict`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] for the first unconfigured
    /// required field.
    pub fn validate_strict(
        &self,
        record: &Record,
        required_fields: &[&str],
    ) -> Result<ErrorList, EngineError> {
        validate_record_strict(record, required_fields, self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{email, password, required};
    use crate::rule_table;

    fn table() -> RuleTable {
        rule_table! {
            "firstName" => [required() => "First name is required"],
            "lastName" => [required() => "Last name is required"],
            "email" => [
                required() => "Email is required",
                email() => "Email must contain @ symbol",
            ],
            "password" => [
                required() => "Password is required",
                password() => "Password must be at least 8 characters",
            ],
        }
    }

    #[test]
    fn all_pass_yields_empty() {
        let record = Record::new()
            .set("firstName", "John")
            .set("lastName", "Doe")
            .set("email", "j@x.com")
            .set("password", "longenough1");
        let errors = validate_record(
            &record,
            &["firstName", "lastName", "email", "password"],
            &table(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn first_failure_only_per_field() {
        // empty string fails both password rules; only the first surfaces
        let record = Record::new().set("password", "");
        let errors = validate_record(&record, &["password"], &table());
        assert_eq!(errors, vec!["Password is required"]);
    }

    #[test]
    fn exhaustive_view_still_reports_both() {
        let t = table();
        let rules = t.rules_for("password").unwrap();
        let failures = validate_field(&Value::from(""), rules);
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn unknown_field_is_skipped() {
        let errors = validate_record(&Record::new(), &["phone"], &table());
        assert!(errors.is_empty());
    }

    #[test]
    fn strict_mode_reports_unknown_field() {
        let err = validate_record_strict(&Record::new(), &["email", "phone"], &table());
        assert_eq!(err, Err(EngineError::UnknownField("phone".to_string())));
    }

    #[test]
    fn strict_mode_matches_default_on_known_fields() {
        let record = Record::new().set("email", "bad");
        let t = table();
        let strict = t.validate_strict(&record, &["email"]).unwrap();
        let lax = t.validate(&record, &["email"]);
        assert_eq!(strict, lax);
    }

    #[test]
    fn errors_follow_required_field_order() {
        let record = Record::new().set("firstName", "").set("email", "bad");
        let errors = validate_record(&record, &["email", "firstName"], &table());
        assert_eq!(
            errors,
            vec!["Email must contain @ symbol", "First name is required"]
        );
    }

    #[test]
    fn duplicate_required_fields_are_not_deduplicated() {
        let record = Record::new();
        let errors = validate_record(&record, &["email", "email"], &table());
        assert_eq!(errors, vec!["Email is required", "Email is required"]);
    }

    #[test]
    fn record_is_not_mutated() {
        let record = Record::new().set("email", "bad");
        let before = record.clone();
        let _ = validate_record(&record, &["email"], &table());
        assert_eq!(record, before);
    }
}
