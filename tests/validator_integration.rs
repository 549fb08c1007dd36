//! End-to-end scenarios for the fluent validator.

use std::cell::Cell;
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use fluentcheck::prelude::*;
use fluentcheck::{assert_errors, assert_fails, assert_passes};
use rust_decimal::Decimal;

const PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9-]+\.[a-z]{2,4}$";

/// Registers one failing check of every kind, plus one passing range check.
fn register_every_kind<'a>(validator: Validator<'a>) -> Validator<'a> {
    validator
        .require_non_null(|| None::<String>, "Null String")
        .require_non_empty(Vec::<String>::new, "Empty Array")
        .require_not_blank(|| "", "Blank String")
        .require_numeric(|| "not a number", "Non-Numeric String")
        .require_in_range(|| 200, 0, 100, "Not In Range Integer")
        .require_positive_or_zero(|| -5, "Negative Integer")
        .require_negative_or_zero(|| 10, "Positive Integer")
        .require_matches(|| "invalid-email", PATTERN, "Not Matching Pattern String")
        .require_true(|| false, "False Value")
        .require_false(|| true, "True Value")
        .require_valid_email(|| "invalid-email", "Invalid Email")
        .require_in_range(|| 10, 0, 100, "Not Required Integer")
        .require_that(
            || 10,
            |r: &i32| *r == 0,
            "Not Required Integer",
            "Not Required Integer must be equal to zero",
        )
}

fn every_kind_messages() -> Vec<String> {
    vec![
        "Null String must not be null".to_string(),
        "Empty Array must not be empty".to_string(),
        "Blank String must not be blank".to_string(),
        "Non-Numeric String must be numeric".to_string(),
        "Not In Range Integer must be between 0.0 and 100.0".to_string(),
        "Negative Integer must be positive or zero".to_string(),
        "Positive Integer must be negative or zero".to_string(),
        format!("Not Matching Pattern String must match pattern: {PATTERN}"),
        "False Value must be true".to_string(),
        "True Value must be false".to_string(),
        "Invalid Email must be a valid email address".to_string(),
        "Not Required Integer must be equal to zero".to_string(),
    ]
}

#[test]
fn test_all_validations_pass() {
    let username = String::from("testUser");
    let v = Validator::collect_all()
        .require_non_null(|| Some(&username), "Username")
        .require_not_blank(|| username.as_str(), "Username");

    assert_passes!(v);
    assert_eq!(v.validate_or_fail_with(|| "unreachable"), Ok(()));
    assert!(v.validate_and_return_errors().is_empty());
}

#[test]
fn test_collect_all_reports_every_failure_in_order() {
    let err = register_every_kind(Validator::collect_all())
        .validate()
        .unwrap_err();

    let expected = every_kind_messages();
    assert_eq!(err.errors(), expected.as_slice());
    assert_eq!(
        err.message(),
        format!("Validation failed: {}", expected.join(", "))
    );
}

#[test]
fn test_fail_fast_reports_first_failure() {
    let err = register_every_kind(Validator::fail_fast())
        .validate()
        .unwrap_err();

    assert_eq!(err.errors(), ["Null String must not be null"]);
    assert_eq!(err.to_string(), "Validation failed: Null String must not be null");
}

#[test]
fn test_return_errors_matches_aggregate_error() {
    let collected = register_every_kind(Validator::collect_all());
    let from_error = collected.validate().unwrap_err().into_errors();
    assert_eq!(collected.validate_and_return_errors(), from_error);

    let fail_fast = register_every_kind(Validator::fail_fast());
    assert_eq!(fail_fast.validate_and_return_errors(), from_error);
}

#[test]
fn test_custom_error_discards_messages() {
    #[derive(Debug, PartialEq)]
    struct IllegalArgument(&'static str);

    let result = register_every_kind(Validator::collect_all())
        .validate_or_fail_with(|| IllegalArgument("Validation failed"));

    assert_eq!(result, Err(IllegalArgument("Validation failed")));
}

#[test]
fn test_custom_error_fail_fast_skips_remaining_checks() {
    let reads = Cell::new(0);
    let result = Validator::fail_fast()
        .require_true(|| false, "First")
        .require_non_null(
            || {
                reads.set(reads.get() + 1);
                Some(1)
            },
            "Second",
        )
        .validate_or_fail_with(|| "failed");

    assert_eq!(result, Err("failed"));
    assert_eq!(reads.get(), 0);
}

#[test]
fn test_null_value_scenario() {
    let value: Option<&str> = None;
    let err = Validator::collect_all()
        .require_non_null(|| value, "Username")
        .validate()
        .unwrap_err();

    assert_eq!(err.errors(), ["Username must not be null"]);
    assert_eq!(err.message(), "Validation failed: Username must not be null");
}

#[test]
fn test_strategies_on_null_then_false() {
    let collect = Validator::collect_all()
        .require_non_null(|| None::<i32>, "A")
        .require_true(|| false, "B");
    assert_errors!(collect, ["A must not be null", "B must be true"]);
    assert_eq!(
        collect.validate().unwrap_err().errors(),
        ["A must not be null", "B must be true"]
    );

    let fail_fast = Validator::fail_fast()
        .require_non_null(|| None::<i32>, "A")
        .require_true(|| false, "B");
    assert_eq!(fail_fast.validate().unwrap_err().errors(), ["A must not be null"]);
}

#[test]
fn test_emptiness_of_supported_kinds() {
    let empty_optional: Option<Option<String>> = Some(None);
    let present_optional: Option<Option<String>> = Some(Some("value".to_string()));
    let empty_builder = String::new();
    let empty_set: HashSet<u32> = HashSet::new();
    let empty_map: BTreeMap<String, u32> = BTreeMap::new();
    let filled_map = BTreeMap::from([("key".to_string(), 1)]);

    assert_errors!(
        Validator::collect_all()
            .require_non_empty(|| &empty_optional, "Optional")
            .require_non_empty(|| &present_optional, "Present Optional")
            .require_non_empty(|| &empty_builder, "Builder")
            .require_non_empty(|| [0i32; 0], "Array")
            .require_non_empty(|| ["a"], "Filled Array")
            .require_non_empty(|| &empty_set, "Set")
            .require_non_empty(|| &empty_map, "Map")
            .require_non_empty(|| &filled_map, "Filled Map"),
        [
            "Optional must not be empty",
            "Builder must not be empty",
            "Array must not be empty",
            "Set must not be empty",
            "Map must not be empty",
        ]
    );
}

#[test]
fn test_sign_checks_across_numeric_kinds() {
    let v = Validator::collect_all()
        .require_positive_or_zero(|| -5i8, "Byte Value")
        .require_positive_or_zero(|| -10i16, "Short Value")
        .require_positive_or_zero(|| -20i32, "Integer Value")
        .require_positive_or_zero(|| -100i64, "Long Value")
        .require_positive_or_zero(|| -15.5f32, "Float Value")
        .require_positive_or_zero(|| -30.0f64, "Double Value")
        .require_positive_or_zero(|| Decimal::from(-50), "Decimal Value")
        .require_positive_or_zero(|| Some(-1i128), "Wide Value");

    assert_errors!(
        v,
        [
            "Byte Value must be positive or zero",
            "Short Value must be positive or zero",
            "Integer Value must be positive or zero",
            "Long Value must be positive or zero",
            "Float Value must be positive or zero",
            "Double Value must be positive or zero",
            "Decimal Value must be positive or zero",
            "Wide Value must be positive or zero",
        ]
    );

    assert_passes!(Validator::collect_all()
        .require_negative_or_zero(|| -5i8, "Byte Value")
        .require_negative_or_zero(|| 0u32, "Zero")
        .require_negative_or_zero(|| Decimal::ZERO, "Decimal Zero")
        .require_positive_or_zero(|| u128::MAX, "Huge"));
}

#[test]
fn test_range_on_decimal_is_exact() {
    let at_max = Decimal::from_str("1000.00").unwrap();
    let just_above = Decimal::from_str("1000.0000000000000000000001").unwrap();

    assert_errors!(
        Validator::collect_all()
            .require_in_range(|| at_max, 0, 1000, "At Max")
            .require_in_range(|| just_above, 0, 1000, "Just Above"),
        ["Just Above must be between 0.0 and 1000.0"]
    );
}

#[test]
fn test_range_on_large_integer_is_exact() {
    // 2^53 + 1 is not representable as f64 and would round down onto the bound.
    let value: i64 = (1 << 53) + 1;
    let bound = (1u64 << 53) as f64;
    assert_fails!(Validator::collect_all().require_in_range(|| value, 0, bound, "Counter"));
    assert_passes!(Validator::collect_all().require_in_range(|| value - 1, 0, bound, "Counter"));
}

#[test]
fn test_prerequisite_message_precedes_dependent() {
    assert_errors!(
        Validator::collect_all().require_matches(|| "", "[a-z]+", "Code"),
        ["Code must not be blank", "Code must match pattern: [a-z]+"]
    );
    assert_errors!(
        Validator::collect_all().require_valid_email(|| "   ", "Email"),
        ["Email must not be blank", "Email must be a valid email address"]
    );
}

#[test]
fn test_email_scenarios() {
    assert_passes!(Validator::collect_all().require_valid_email(|| "a@b.com", "Email"));
    assert_passes!(Validator::collect_all().require_valid_email(|| "test@example.com", "Email"));
    assert_errors!(
        Validator::collect_all().require_valid_email(|| "invalid-email", "Email"),
        ["Email must be a valid email address"]
    );
}

#[test]
fn test_require_that_with_combined_predicates() {
    let users = vec!["ann", "bob"];
    let v = Validator::collect_all()
        .require_non_empty(|| &users, "User List")
        .require_that(
            || users.len(),
            (|n: &usize| *n <= 100).and(|n: &usize| *n % 2 == 0),
            "User List Size",
            "User list must hold an even number of at most 100 users",
        );
    assert_passes!(v);
}

#[test]
fn test_domain_type_with_default_inspect() {
    #[derive(Clone)]
    struct Account {
        balance: i64,
    }
    impl Inspect for Account {}

    let account = Account { balance: -3 };
    assert_errors!(
        Validator::collect_all()
            .require_non_null(|| Some(account.clone()), "Account")
            .require_numeric(|| account.clone(), "Account")
            .require_that(
                || account.clone(),
                |a: &Account| a.balance >= 0,
                "Account",
                "Account must not be overdrawn",
            ),
        ["Account must be numeric", "Account must not be overdrawn"]
    );
}

#[test]
fn test_accessors_see_latest_state() {
    let counter = Cell::new(150);
    let v = Validator::fail_fast().require_in_range(|| counter.get(), 0, 100, "Counter");
    assert_fails!(v);
    counter.set(50);
    assert_passes!(v);
}
