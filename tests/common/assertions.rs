//! Custom assertion macros and utilities

/// Assert a response's status and its JSON `message` field
#[macro_export]
macro_rules! assert_message {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "body: {}", response.text());
        let body: serde_json::Value = response.json();
        pretty_assertions::assert_eq!(body["message"], serde_json::json!($message));
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
