//! pytest renderer.
//!
//! Generated suites issue real HTTP calls through `requests` against the
//! configured base URL. Function names are derived from the case
//! description: lowercase snake_case, capped at 50 characters.

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{escape, sanitize, IdentCasing, QuoteStyle};
use crate::render::{json_minified, json_pretty, BASE_URL};

const NAME_CAP: usize = 50;

pub fn render(test_cases: &[TestCase], endpoint: &EndpointDescriptor) -> Result<String, Error> {
    let mut lines: Vec<String> = Vec::new();
    lines.push("\"\"\"".to_string());
    lines.push(format!(
        "Auto-generated pytest test suite for {} {}",
        endpoint.method_or("GET"),
        endpoint.api_or("/")
    ));
    lines.push("\"\"\"".to_string());
    lines.push("import pytest".to_string());
    lines.push("import requests".to_string());
    lines.push(String::new());
    lines.push("# Configure base URL - update this for your environment".to_string());
    lines.push(format!("BASE_URL = '{BASE_URL}'"));
    lines.push(String::new());
    lines.push(String::new());

    if test_cases.is_empty() {
        let method = endpoint.method_or("get").to_lowercase();
        let api = escape(endpoint.api_or("/health"), QuoteStyle::Double);
        lines.push("def test_smoke_endpoint_responds():".to_string());
        lines.push("    \"\"\"Smoke test: endpoint responds without crashing\"\"\"".to_string());
        lines.push(format!(
            "    response = requests.{method}(f\"{{BASE_URL}}{api}\")"
        ));
        lines.push("    assert 200 <= response.status_code < 600".to_string());
        lines.push(String::new());
    }

    for (idx, case) in test_cases.iter().enumerate() {
        let resolved = case.resolve(endpoint);
        let desc = match resolved.description {
            Some(d) => d.to_string(),
            None => format!("case_{idx}"),
        };
        let func_name = format!("test_{}", sanitize(&desc, IdentCasing::SnakeLower, NAME_CAP));
        let method = resolved.method.to_lowercase();
        let api = escape(resolved.api, QuoteStyle::Double);
        let has_headers = !resolved.headers.is_empty();

        lines.push(format!("def {func_name}():"));
        lines.push(format!("    \"\"\"{}\"\"\"", escape(&desc, QuoteStyle::Double)));

        if has_headers {
            lines.push(format!("    headers = {}", json_minified(resolved.headers)?));
        }

        if resolved.has_body() {
            if let Some(body) = resolved.body {
                let literal = json_pretty(body, "    ")?.replace('\n', "\n    ");
                lines.push(format!("    payload = {literal}"));
            }
            if has_headers {
                lines.push(format!(
                    "    response = requests.{method}(f\"{{BASE_URL}}{api}\", json=payload, headers=headers)"
                ));
            } else {
                lines.push(format!(
                    "    response = requests.{method}(f\"{{BASE_URL}}{api}\", json=payload)"
                ));
            }
        } else if has_headers {
            lines.push(format!(
                "    response = requests.{method}(f\"{{BASE_URL}}{api}\", headers=headers)"
            ));
        } else {
            lines.push(format!("    response = requests.{method}(f\"{{BASE_URL}}{api}\")"));
        }

        if let Some(code) = resolved.expected.status_code {
            lines.push(format!("    assert response.status_code == {code}"));
        }
        if let Some(message) = resolved.expected.message() {
            lines.push(format!(
                "    assert \"{}\" in response.text",
                escape(message, QuoteStyle::Double)
            ));
        }
        lines.push(String::new());
        lines.push(String::new());
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint(api: &str, method: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            api: Some(api.to_string()),
            method: Some(method.to_string()),
        }
    }

    #[test]
    fn smoke_test_targets_endpoint_path() {
        let out = render(&[], &endpoint("/ping", "GET")).unwrap();
        assert!(out.contains("def test_smoke_endpoint_responds():"));
        assert!(out.contains("response = requests.get(f\"{BASE_URL}/ping\")"));
        assert!(out.contains("assert 200 <= response.status_code < 600"));
    }

    #[test]
    fn post_with_body_and_assertions() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "rejects empty password",
            "input": {
                "method": "POST",
                "api": "/login",
                "body": {"email": "a@b.com", "password": ""}
            },
            "expected": {"status_code": 400, "message": "password required"}
        }))
        .unwrap();

        let out = render(&[case], &endpoint("/login", "POST")).unwrap();
        assert!(out.contains("def test_rejects_empty_password():"));
        assert!(out.contains("\"email\": \"a@b.com\""));
        assert!(out.contains("\"password\": \"\""));
        assert!(out.contains("response = requests.post(f\"{BASE_URL}/login\", json=payload)"));
        assert!(out.contains("assert response.status_code == 400"));
        assert!(out.contains("assert \"password required\" in response.text"));
    }

    #[test]
    fn function_name_is_sanitized_and_capped() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "Rejects: weird / characters & VERY long description that keeps going"
        }))
        .unwrap();

        let out = render(&[case], &endpoint("/x", "POST")).unwrap();
        let name_line = out
            .lines()
            .find(|l| l.starts_with("def test_"))
            .unwrap()
            .to_string();
        // "def " + name + "():"
        let name = name_line
            .trim_start_matches("def ")
            .trim_end_matches("():");
        assert!(name.len() <= "test_".len() + 50);
        assert!(name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn headers_become_a_dict_literal() {
        let case: TestCase = serde_json::from_value(json!({
            "input": {"method": "GET", "headers": {"X-Token": "abc"}}
        }))
        .unwrap();

        let out = render(&[case], &endpoint("/x", "GET")).unwrap();
        assert!(out.contains("headers = {\"X-Token\":\"abc\"}"));
        assert!(out.contains("response = requests.get(f\"{BASE_URL}/x\", headers=headers)"));
    }

    #[test]
    fn string_status_code_renders_without_assertion() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "lenient status",
            "input": {"method": "POST", "api": "/login", "body": {"a": 1}},
            "expected": {"status_code": "400", "message": "denied"}
        }))
        .unwrap();

        let out = render(&[case], &endpoint("/login", "POST")).unwrap();
        assert!(!out.contains("assert response.status_code"));
        assert!(out.contains("assert \"denied\" in response.text"));
    }

    #[test]
    fn empty_expected_emits_no_assertions() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "no checks",
            "input": {"method": "GET"},
            "expected": {}
        }))
        .unwrap();

        let out = render(&[case], &endpoint("/x", "GET")).unwrap();
        assert!(!out.contains("assert response.status_code"));
        assert!(!out.contains("in response.text"));
    }
}
