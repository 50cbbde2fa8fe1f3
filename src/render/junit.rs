//! JUnit5 renderer.
//!
//! Generated suites use the JDK's blocking `HttpClient`. Java's literal
//! grammar is too strict for inline JSON, so request bodies are embedded as
//! a string-encoded JSON blob handed to `BodyPublishers.ofString`.

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{escape, sanitize, IdentCasing, QuoteStyle};
use crate::render::{class_name, header_text, json_minified, json_string, BASE_URL};

const NAME_CAP: usize = 30;

pub fn render(test_cases: &[TestCase], endpoint: &EndpointDescriptor) -> Result<String, Error> {
    let class = class_name(endpoint);
    let mut lines: Vec<String> = Vec::new();
    lines.push("package com.example.tests;".to_string());
    lines.push(String::new());
    lines.push("import org.junit.jupiter.api.Test;".to_string());
    lines.push("import org.junit.jupiter.api.DisplayName;".to_string());
    lines.push("import static org.junit.jupiter.api.Assertions.*;".to_string());
    lines.push("import java.net.http.HttpClient;".to_string());
    lines.push("import java.net.http.HttpRequest;".to_string());
    lines.push("import java.net.http.HttpResponse;".to_string());
    lines.push("import java.net.URI;".to_string());
    lines.push(String::new());
    lines.push("/**".to_string());
    lines.push(format!(
        " * Auto-generated JUnit5 test suite for {} {}",
        endpoint.method_or("GET"),
        endpoint.api_or("/")
    ));
    lines.push(" */".to_string());
    lines.push(format!("public class {class} {{"));
    lines.push(String::new());
    lines.push(format!("    private static final String BASE_URL = \"{BASE_URL}\";"));
    lines.push("    private final HttpClient client = HttpClient.newHttpClient();".to_string());
    lines.push(String::new());

    if test_cases.is_empty() {
        let api = escape(endpoint.api_or("/health"), QuoteStyle::Double);
        lines.push("    @Test".to_string());
        lines.push("    @DisplayName(\"Smoke test: endpoint responds\")".to_string());
        lines.push("    void testSmokeEndpointResponds() throws Exception {".to_string());
        lines.push("        HttpRequest request = HttpRequest.newBuilder()".to_string());
        lines.push(format!("            .uri(URI.create(BASE_URL + \"{api}\"))"));
        lines.push("            .GET()".to_string());
        lines.push("            .build();".to_string());
        lines.push(
            "        HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());"
                .to_string(),
        );
        lines.push(
            "        assertTrue(response.statusCode() >= 200 && response.statusCode() < 600);"
                .to_string(),
        );
        lines.push("    }".to_string());
    }

    for (idx, case) in test_cases.iter().enumerate() {
        let resolved = case.resolve(endpoint);
        let desc = match resolved.description {
            Some(d) => d.to_string(),
            None => format!("case {idx}"),
        };
        let method_name = format!(
            "test{idx}_{}",
            sanitize(&desc, IdentCasing::StripKeepCase, NAME_CAP)
        );
        let api = escape(resolved.api, QuoteStyle::Double);

        lines.push(String::new());
        lines.push("    @Test".to_string());
        lines.push(format!(
            "    @DisplayName(\"{}\")",
            escape(&desc, QuoteStyle::Double)
        ));
        lines.push(format!("    void {method_name}() throws Exception {{"));

        if resolved.has_body() {
            if let Some(body) = resolved.body {
                lines.push(format!(
                    "        String jsonBody = {};",
                    json_string(&json_minified(body)?)?
                ));
            }
            lines.push("        HttpRequest request = HttpRequest.newBuilder()".to_string());
            lines.push(format!("            .uri(URI.create(BASE_URL + \"{api}\"))"));
            lines.push("            .header(\"Content-Type\", \"application/json\")".to_string());
            push_headers(&mut lines, &resolved);
            lines.push(format!(
                "            .method(\"{}\", HttpRequest.BodyPublishers.ofString(jsonBody))",
                resolved.method
            ));
            lines.push("            .build();".to_string());
        } else {
            lines.push("        HttpRequest request = HttpRequest.newBuilder()".to_string());
            lines.push(format!("            .uri(URI.create(BASE_URL + \"{api}\"))"));
            push_headers(&mut lines, &resolved);
            lines.push(format!(
                "            .method(\"{}\", HttpRequest.BodyPublishers.noBody())",
                resolved.method
            ));
            lines.push("            .build();".to_string());
        }

        lines.push(
            "        HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());"
                .to_string(),
        );

        if let Some(code) = resolved.expected.status_code {
            lines.push(format!("        assertEquals({code}, response.statusCode());"));
        }
        if let Some(message) = resolved.expected.message() {
            lines.push(format!(
                "        assertTrue(response.body().contains(\"{}\"));",
                escape(message, QuoteStyle::Double)
            ));
        }
        lines.push("    }".to_string());
    }

    lines.push("}".to_string());
    lines.push(String::new());
    Ok(lines.join("\n"))
}

fn push_headers(lines: &mut Vec<String>, resolved: &crate::domain::ResolvedCase<'_>) {
    for (key, value) in resolved.headers {
        lines.push(format!(
            "            .header(\"{}\", \"{}\")",
            escape(key, QuoteStyle::Double),
            escape(&header_text(value), QuoteStyle::Double)
        ));
    }
}
