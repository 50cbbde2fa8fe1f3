//! Jest + Supertest renderer.
//!
//! The only dialect that does not hit a live server: the generated suite
//! imports the application handle and drives it in-process through
//! Supertest, so request bodies and headers are embedded as native JS
//! literals.

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{escape, QuoteStyle};
use crate::render::{json_minified, json_pretty, json_string};

pub fn render(test_cases: &[TestCase], endpoint: &EndpointDescriptor) -> Result<String, Error> {
    let mut lines: Vec<String> = Vec::new();
    lines.push("const request = require('supertest');".to_string());
    lines.push("const app = require('../app');".to_string());
    lines.push(String::new());
    lines.push(format!(
        "describe('Generated test suite for {} {}', () => {{",
        escape(endpoint.method_or("GET"), QuoteStyle::Single),
        escape(endpoint.api_or("/"), QuoteStyle::Single),
    ));

    if test_cases.is_empty() {
        let method = endpoint.method_or("get").to_lowercase();
        let api = escape(endpoint.api_or("/health"), QuoteStyle::Single);
        lines.push(
            "  test('smoke test: endpoint responds without crashing', async () => {".to_string(),
        );
        lines.push(format!("    const res = await request(app).{method}('{api}');"));
        lines.push("    expect(res.status).toBeGreaterThanOrEqual(200);".to_string());
        lines.push("    expect(res.status).toBeLessThan(600);".to_string());
        lines.push("  });".to_string());
        lines.push(String::new());
    }

    for (idx, case) in test_cases.iter().enumerate() {
        let resolved = case.resolve(endpoint);
        let label = match resolved.description {
            Some(desc) => escape(desc, QuoteStyle::Single),
            None => format!("case-{idx}"),
        };
        let api = escape(resolved.api, QuoteStyle::Single);

        lines.push(format!("  test('{label}', async () => {{"));
        lines.push(format!(
            "    let req = request(app).{}('{api}');",
            resolved.method.to_lowercase()
        ));
        if resolved.has_body() {
            if let Some(body) = resolved.body {
                let literal = json_pretty(body, "  ")?.replace('\n', "\n    ");
                lines.push(format!("    req = req.send({literal});"));
            }
        }
        for (key, value) in resolved.headers {
            lines.push(format!(
                "    req = req.set({}, {});",
                json_string(key)?,
                json_minified(value)?
            ));
        }
        lines.push("    const res = await req;".to_string());
        if let Some(code) = resolved.expected.status_code {
            lines.push(format!("    expect(res.status).toBe({code});"));
        }
        if let Some(message) = resolved.expected.message() {
            lines.push("    // Check response contains expected message".to_string());
            lines.push(format!(
                "    expect(JSON.stringify(res.body)).toContain({});",
                json_string(message)?
            ));
        }
        lines.push("  });".to_string());
        lines.push(String::new());
    }

    lines.push("});".to_string());
    lines.push(String::new());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint() -> EndpointDescriptor {
        EndpointDescriptor {
            api: Some("/login".to_string()),
            method: Some("POST".to_string()),
        }
    }

    #[test]
    fn smoke_test_when_no_cases() {
        let out = render(&[], &endpoint()).unwrap();
        assert!(out.contains("test('smoke test: endpoint responds without crashing'"));
        assert!(out.contains("request(app).post('/login')"));
        assert!(out.contains("expect(res.status).toBeGreaterThanOrEqual(200);"));
        assert!(out.contains("expect(res.status).toBeLessThan(600);"));
    }

    #[test]
    fn body_is_sent_as_inline_literal() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "logs in",
            "input": {"method": "POST", "body": {"email": "a@b.com"}},
            "expected": {"status_code": 200}
        }))
        .unwrap();

        let out = render(&[case], &endpoint()).unwrap();
        assert!(out.contains("req = req.send({\n      \"email\": \"a@b.com\"\n    });"));
        assert!(out.contains("expect(res.status).toBe(200);"));
    }

    #[test]
    fn description_quotes_are_escaped() {
        let case: TestCase = serde_json::from_value(json!({
            "description": "O'Brien's case"
        }))
        .unwrap();

        let out = render(&[case], &endpoint()).unwrap();
        assert!(out.contains("test('O\\'Brien\\'s case', async () => {"));
    }

    #[test]
    fn headers_are_json_encoded() {
        let case: TestCase = serde_json::from_value(json!({
            "input": {"headers": {"Authorization": "Bearer \"x\""}}
        }))
        .unwrap();

        let out = render(&[case], &endpoint()).unwrap();
        assert!(out.contains(r#"req = req.set("Authorization", "Bearer \"x\"");"#));
    }

    #[test]
    fn missing_description_uses_positional_label() {
        let case = TestCase::default();
        let out = render(&[case], &endpoint()).unwrap();
        assert!(out.contains("test('case-0', async () => {"));
    }
}
