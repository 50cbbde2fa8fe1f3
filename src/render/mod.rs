//! # Per-dialect renderers
//!
//! One renderer per target test framework, all behind the [`Dialect`] enum.
//! Every renderer is a pure function `(test_cases, endpoint) -> source text`
//! with the same shape: preamble, a synthetic smoke test when no cases were
//! supplied, one emitted test per case in input order, postamble.
//!
//! The helpers in this module are the shared "literal strategy" pieces:
//! serializing a JSON value minified, pretty-printed at a dialect's indent
//! width, or string-encoded for dialects that embed JSON inside a host
//! string literal.

use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{sanitize, IdentCasing};

pub mod gotest;
pub mod jest;
pub mod junit;
pub mod phpunit;
pub mod pytest;

/// Base URL baked into dialects that issue real HTTP calls against a
/// running instance (every dialect except Jest, which drives the app
/// in-process through Supertest).
pub const BASE_URL: &str = "http://localhost:3000";

/// One target test-framework dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Jest,
    Pytest,
    Junit,
    Phpunit,
    GoTest,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Jest,
        Dialect::Pytest,
        Dialect::Junit,
        Dialect::Phpunit,
        Dialect::GoTest,
    ];

    /// Render a complete test source file for this dialect.
    pub fn render(
        &self,
        test_cases: &[TestCase],
        endpoint: &EndpointDescriptor,
    ) -> Result<String, Error> {
        match self {
            Dialect::Jest => jest::render(test_cases, endpoint),
            Dialect::Pytest => pytest::render(test_cases, endpoint),
            Dialect::Junit => junit::render(test_cases, endpoint),
            Dialect::Phpunit => phpunit::render(test_cases, endpoint),
            Dialect::GoTest => gotest::render(test_cases, endpoint),
        }
    }

    /// File name the dispatcher publishes this dialect's output under.
    pub fn file_name(&self, endpoint: &EndpointDescriptor) -> String {
        match self {
            Dialect::Jest => "generated.test.js".to_string(),
            Dialect::Pytest => "test_generated.py".to_string(),
            Dialect::Junit => format!("{}.java", class_name(endpoint)),
            Dialect::Phpunit => format!("{}Test.php", class_name(endpoint)),
            Dialect::GoTest => "generated_test.go".to_string(),
        }
    }

    /// Whether the framework/language selectors pick this dialect.
    /// `framework` must already be lowercased; framework tokens match by
    /// substring, languages by equality.
    pub fn matches(&self, framework: &str, language: &str) -> bool {
        match self {
            Dialect::Jest => {
                framework.contains("jest")
                    || framework.contains("supertest")
                    || matches!(language, "javascript" | "typescript")
            }
            Dialect::Pytest => framework.contains("pytest") || matches!(language, "python" | "py"),
            Dialect::Junit => framework.contains("junit") || language == "java",
            Dialect::Phpunit => framework.contains("phpunit") || language == "php",
            Dialect::GoTest => {
                framework.contains("testing")
                    || framework.contains("go")
                    || matches!(language, "go" | "golang")
            }
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dialect::Jest => "jest+supertest",
            Dialect::Pytest => "pytest",
            Dialect::Junit => "junit5",
            Dialect::Phpunit => "phpunit",
            Dialect::GoTest => "go-testing",
        };
        write!(f, "{label}")
    }
}

/// Class name shared by the Java and PHP renderers, derived from the
/// endpoint path: `Test` plus the path reduced to ASCII alphanumerics.
pub(crate) fn class_name(endpoint: &EndpointDescriptor) -> String {
    format!(
        "Test{}",
        sanitize(endpoint.api_or("/api"), IdentCasing::StripKeepCase, usize::MAX)
    )
}

/// Minified JSON, byte-identical to `JSON.stringify(value)` for values
/// decoded with key order preserved.
pub(crate) fn json_minified<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

/// JSON string literal (the value double-quote-delimited and escaped), as
/// `JSON.stringify` produces for a string input.
pub(crate) fn json_string(text: &str) -> Result<String, Error> {
    Ok(serde_json::to_string(text)?)
}

/// Pretty-printed JSON at the given indent unit, matching
/// `JSON.stringify(value, null, n)`.
pub(crate) fn json_pretty(value: &Value, indent: &str) -> Result<String, Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// A header value as plain text: strings verbatim, anything else in its
/// JSON spelling.
pub(crate) fn header_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint(api: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            api: Some(api.to_string()),
            method: Some("POST".to_string()),
        }
    }

    #[test]
    fn class_name_strips_path_punctuation() {
        assert_eq!(class_name(&endpoint("/api/users")), "Testapiusers");
        assert_eq!(class_name(&EndpointDescriptor::default()), "Testapi");
    }

    #[test]
    fn file_names_follow_dialect_conventions() {
        let ep = endpoint("/login");
        assert_eq!(Dialect::Jest.file_name(&ep), "generated.test.js");
        assert_eq!(Dialect::Pytest.file_name(&ep), "test_generated.py");
        assert_eq!(Dialect::Junit.file_name(&ep), "Testlogin.java");
        assert_eq!(Dialect::Phpunit.file_name(&ep), "TestloginTest.php");
        assert_eq!(Dialect::GoTest.file_name(&ep), "generated_test.go");
    }

    #[test]
    fn selector_matching_per_dialect() {
        assert!(Dialect::Jest.matches("jest+supertest", ""));
        assert!(Dialect::Jest.matches("", "typescript"));
        assert!(Dialect::Pytest.matches("pytest", ""));
        assert!(Dialect::Pytest.matches("", "py"));
        assert!(Dialect::Junit.matches("junit5", ""));
        assert!(Dialect::Phpunit.matches("", "php"));
        assert!(Dialect::GoTest.matches("go testing", ""));
        assert!(Dialect::GoTest.matches("", "golang"));
        assert!(!Dialect::Junit.matches("pytest", "python"));
    }

    #[test]
    fn pretty_json_matches_stringify_layout() {
        let value = json!({"email": "a@b.com", "tags": ["x", "y"], "empty": {}});
        let text = json_pretty(&value, "  ").unwrap();
        assert_eq!(
            text,
            "{\n  \"email\": \"a@b.com\",\n  \"tags\": [\n    \"x\",\n    \"y\"\n  ],\n  \"empty\": {}\n}"
        );
    }

    #[test]
    fn header_text_keeps_strings_verbatim() {
        assert_eq!(header_text(&json!("application/json")), "application/json");
        assert_eq!(header_text(&json!(7)), "7");
    }
}
