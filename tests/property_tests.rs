//! Property-based tests for fieldcheck.

use proptest::prelude::*;

use fieldcheck::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::Number),
        ".*".prop_map(Value::from),
    ]
}

fn user_table() -> RuleTable {
    rule_table! {
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

// ============================================================================
// IDEMPOTENCE: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_record_idempotent(email_v in arb_value(), password_v in arb_value()) {
        let table = user_table();
        let record = Record::new().set("email", email_v).set("password", password_v);
        let fields = ["email", "password"];

        let first = validate_record(&record, &fields, &table);
        let second = validate_record(&record, &fields, &table);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn predicates_never_panic(v in arb_value()) {
        // totality: any value shape is a defined outcome
        let _ = required().test(&v);
        let _ = email().test(&v);
        let _ = password().test(&v);
        let _ = min_length(3).test(&v);
        let _ = max_length(10).test(&v);
        let _ = min_value(0.0).test(&v);
    }
}

// ============================================================================
// RECORD-LEVEL STRUCTURE
// ============================================================================

proptest! {
    #[test]
    fn at_most_one_message_per_field(email_v in arb_value(), password_v in arb_value()) {
        let table = user_table();
        let record = Record::new().set("email", email_v).set("password", password_v);
        let errors = validate_record(&record, &["email", "password"], &table);
        prop_assert!(errors.len() <= 2);
    }

    #[test]
    fn record_errors_are_prefix_of_field_failures(v in arb_value()) {
        // the record-level message for a field is the head of the
        // exhaustive per-field failure list
        let table = user_table();
        let rules = table.rules_for("email").unwrap();
        let failures = validate_field(&v, rules);

        let record = Record::new().set("email", v);
        let errors = validate_record(&record, &["email"], &table);

        match failures.first() {
            Some(first) => prop_assert_eq!(&errors, &vec![first.clone()]),
            None => prop_assert!(errors.is_empty()),
        }
    }

    #[test]
    fn empty_required_list_yields_no_errors(v in arb_value()) {
        let table = user_table();
        let record = Record::new().set("email", v);
        prop_assert!(validate_record(&record, &[], &table).is_empty());
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_passes_iff_both_pass(v in arb_value()) {
        let a = required();
        let b = min_length(3);
        let a_ok = a.test(&v);
        let b_ok = b.test(&v);
        prop_assert_eq!(a.and(b).test(&v), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(v in arb_value()) {
        let a = email();
        let b = min_length(10);
        let a_ok = a.test(&v);
        let b_ok = b.test(&v);
        prop_assert_eq!(a.or(b).test(&v), a_ok || b_ok);
    }

    #[test]
    fn not_inverts(v in arb_value()) {
        let p = required();
        prop_assert_eq!(p.not().test(&v), !p.test(&v));
    }
}

// ============================================================================
// PREDICATE DEFINITIONS
// ============================================================================

proptest! {
    #[test]
    fn email_agrees_with_contains_at(s in ".*") {
        prop_assert_eq!(email().test(&Value::from(s.as_str())), s.contains('@'));
    }

    #[test]
    fn password_agrees_with_char_count(s in ".*") {
        prop_assert_eq!(
            password().test(&Value::from(s.as_str())),
            s.chars().count() >= PASSWORD_MIN_LEN
        );
    }

    #[test]
    fn required_trims_text(s in "[ \t]*") {
        // whitespace-only text is never "present"
        prop_assert!(!required().test(&Value::from(s.as_str())));
    }
}
