//! Property-based tests for the age gate
//!
//! Uses proptest to generate random names and ages and verify the verdict.

use axum::http::StatusCode;
use planetary_api::backend::error::ParameterError;
use planetary_api::backend::welcome::handlers::AgeQuery;
use planetary_api::backend::welcome::{check_age, AgeVerdict, MINIMUM_AGE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_adults_are_welcome(name in "[A-Za-z ]{1,20}", age in MINIMUM_AGE..=i32::MAX) {
        let verdict = check_age(&name, age);
        prop_assert_eq!(verdict.status_code(), StatusCode::OK);
        prop_assert!(verdict.message().contains(&name));
        prop_assert!(verdict.message().starts_with("Welcome "));
    }

    #[test]
    fn test_minors_are_turned_away(name in "[A-Za-z ]{1,20}", age in i32::MIN..MINIMUM_AGE) {
        let verdict = check_age(&name, age);
        prop_assert_eq!(verdict, AgeVerdict::TooYoung(name));
    }

    #[test]
    fn test_integer_ages_parse(name in "\\PC{0,20}", age in any::<i32>()) {
        let query = AgeQuery { name: Some(name.clone()), age: Some(age.to_string()) };
        prop_assert_eq!(query.parse().unwrap(), (name, age));
    }

    #[test]
    fn test_non_numeric_ages_are_invalid(age in "[a-zA-Z]{1,10}") {
        let query = AgeQuery { name: Some("Ann".to_string()), age: Some(age.clone()) };
        prop_assert_eq!(
            query.parse().unwrap_err(),
            ParameterError::Invalid { name: "age", value: age }
        );
    }
}
