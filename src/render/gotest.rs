//! Go `testing` renderer.
//!
//! Generated files use the standard `net/http` client. Unused imports are
//! compile errors in Go, so the import block is computed from what the
//! emitted cases actually need; request bodies are embedded as
//! double-quote-escaped string literals.

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{escape, sanitize, IdentCasing, QuoteStyle};
use crate::render::{header_text, json_minified, BASE_URL};

const NAME_CAP: usize = 30;

pub fn render(test_cases: &[TestCase], endpoint: &EndpointDescriptor) -> Result<String, Error> {
    let resolved: Vec<_> = test_cases.iter().map(|c| c.resolve(endpoint)).collect();
    let needs_body = resolved.iter().any(|r| r.has_body());
    let needs_read = resolved.iter().any(|r| r.expected.message().is_some());

    let mut lines: Vec<String> = Vec::new();
    lines.push("package main".to_string());
    lines.push(String::new());
    lines.push("import (".to_string());
    if needs_body {
        lines.push("    \"bytes\"".to_string());
    }
    if needs_read {
        lines.push("    \"io\"".to_string());
    }
    lines.push("    \"net/http\"".to_string());
    if needs_read {
        lines.push("    \"strings\"".to_string());
    }
    lines.push("    \"testing\"".to_string());
    lines.push(")".to_string());
    lines.push(String::new());
    lines.push(format!("const baseURL = \"{BASE_URL}\""));
    lines.push(String::new());

    if resolved.is_empty() {
        let api = escape(endpoint.api_or("/health"), QuoteStyle::Double);
        lines.push("func TestSmokeEndpointResponds(t *testing.T) {".to_string());
        lines.push(format!("    resp, err := http.Get(baseURL + \"{api}\")"));
        lines.push("    if err != nil {".to_string());
        lines.push("        t.Fatalf(\"Request failed: %v\", err)".to_string());
        lines.push("    }".to_string());
        lines.push("    defer resp.Body.Close()".to_string());
        lines.push("    if resp.StatusCode < 200 || resp.StatusCode >= 600 {".to_string());
        lines.push(
            "        t.Errorf(\"Expected status 2xx-5xx, got %d\", resp.StatusCode)".to_string(),
        );
        lines.push("    }".to_string());
        lines.push("}".to_string());
    }

    for (idx, r) in resolved.iter().enumerate() {
        let desc = match r.description {
            Some(d) => d.to_string(),
            None => format!("case {idx}"),
        };
        let func_name = format!(
            "Test{idx}{}",
            sanitize(&desc, IdentCasing::StripKeepCase, NAME_CAP)
        );
        let api = escape(r.api, QuoteStyle::Double);

        lines.push(String::new());
        lines.push(format!("// {desc}"));
        lines.push(format!("func {func_name}(t *testing.T) {{"));

        if r.has_body() {
            if let Some(body) = r.body {
                lines.push(format!(
                    "    bodyData := []byte(\"{}\")",
                    escape(&json_minified(body)?, QuoteStyle::Double)
                ));
            }
            lines.push(format!(
                "    req, err := http.NewRequest(\"{}\", baseURL+\"{api}\", bytes.NewBuffer(bodyData))",
                r.method
            ));
        } else {
            lines.push(format!(
                "    req, err := http.NewRequest(\"{}\", baseURL+\"{api}\", nil)",
                r.method
            ));
        }

        lines.push("    if err != nil {".to_string());
        lines.push("        t.Fatalf(\"Failed to create request: %v\", err)".to_string());
        lines.push("    }".to_string());
        lines.push("    req.Header.Set(\"Content-Type\", \"application/json\")".to_string());
        for (key, value) in r.headers {
            lines.push(format!(
                "    req.Header.Set(\"{}\", \"{}\")",
                escape(key, QuoteStyle::Double),
                escape(&header_text(value), QuoteStyle::Double)
            ));
        }

        lines.push("    client := &http.Client{}".to_string());
        lines.push("    resp, err := client.Do(req)".to_string());
        lines.push("    if err != nil {".to_string());
        lines.push("        t.Fatalf(\"Request failed: %v\", err)".to_string());
        lines.push("    }".to_string());
        lines.push("    defer resp.Body.Close()".to_string());

        if let Some(code) = r.expected.status_code {
            lines.push(format!("    if resp.StatusCode != {code} {{"));
            lines.push(format!(
                "        t.Errorf(\"Expected status {code}, got %d\", resp.StatusCode)"
            ));
            lines.push("    }".to_string());
        }
        if let Some(message) = r.expected.message() {
            let literal = escape(message, QuoteStyle::Double);
            lines.push("    respBody, err := io.ReadAll(resp.Body)".to_string());
            lines.push("    if err != nil {".to_string());
            lines.push("        t.Fatalf(\"Failed to read response: %v\", err)".to_string());
            lines.push("    }".to_string());
            lines.push(format!(
                "    if !strings.Contains(string(respBody), \"{literal}\") {{"
            ));
            lines.push(format!(
                "        t.Errorf(\"Expected response to contain %q\", \"{literal}\")"
            ));
            lines.push("    }".to_string());
        }
        lines.push("}".to_string());
    }

    lines.push(String::new());
    Ok(lines.join("\n"))
}
