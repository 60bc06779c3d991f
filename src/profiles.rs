//! User-data validation profiles.
//!
//! The rule table the registration, profile, and login flows share, built
//! once per process. Each entry point picks its own required-field list
//! over the same table, so a rule change lands in every flow at once.

use std::sync::LazyLock;

use crate::engine::ErrorList;
use crate::predicates::{email, password, required};
use crate::rule::RuleTable;
use crate::rule_table;
use crate::value::Record;

/// Fields a registration must supply.
pub const REGISTRATION_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "password"];

/// Fields a profile update must supply.
pub const PROFILE_FIELDS: [&str; 3] = ["firstName", "lastName", "email"];

/// Fields a login must supply.
pub const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

static USER_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
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
});

/// The shared user-data rule table.
#[must_use]
pub fn user_rules() -> &'static RuleTable {
    &USER_RULES
}

/// Validates a registration record: first name, last name, email, password.
#[must_use]
pub fn validate_registration(record: &Record) -> ErrorList {
    USER_RULES.validate(record, &REGISTRATION_FIELDS)
}

/// Validates a profile record: first name, last name, email.
#[must_use]
pub fn validate_profile(record: &Record) -> ErrorList {
    USER_RULES.validate(record, &PROFILE_FIELDS)
}

/// Validates a login record: email, password.
#[must_use]
pub fn validate_login(record: &Record) -> ErrorList {
    USER_RULES.validate(record, &LOGIN_FIELDS)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> Record {
        Record::new()
            .set("firstName", "John")
            .set("lastName", "Doe")
            .set("email", "j@x.com")
            .set("password", "longenough1")
    }

    #[test]
    fn registration_passes_on_complete_record() {
        assert!(validate_registration(&complete_record()).is_empty());
    }

    #[test]
    fn registration_reports_every_missing_field() {
        let errors = validate_registration(&Record::new());
        assert_eq!(
            errors,
            vec![
                "First name is required",
                "Last name is required",
                "Email is required",
                "Password is required",
            ]
        );
    }

    #[test]
    fn profile_ignores_password() {
        let mut record = complete_record();
        record.insert("password", "short");
        assert!(validate_profile(&record).is_empty());
    }

    #[test]
    fn login_checks_only_email_and_password() {
        let record = Record::new()
            .set("email", "j@x.com")
            .set("password", "longenough1");
        assert!(validate_login(&record).is_empty());
    }

    #[test]
    fn login_short_password() {
        let record = Record::new().set("email", "j@x.com").set("password", "1234567");
        assert_eq!(
            validate_login(&record),
            vec!["Password must be at least 8 characters"]
        );
    }
}
