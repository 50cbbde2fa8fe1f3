//! PHPUnit renderer.
//!
//! Generated suites drive curl directly. Request bodies are embedded as a
//! single-quoted PHP string holding the minified JSON, handed straight to
//! `CURLOPT_POSTFIELDS`.

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::escape::{escape, sanitize, IdentCasing, QuoteStyle};
use crate::render::{class_name, header_text, json_minified, BASE_URL};

const NAME_CAP: usize = 30;

pub fn render(test_cases: &[TestCase], endpoint: &EndpointDescriptor) -> Result<String, Error> {
    let class = class_name(endpoint);
    let mut lines: Vec<String> = Vec::new();
    lines.push("<?php".to_string());
    lines.push(String::new());
    lines.push("use PHPUnit\\Framework\\TestCase;".to_string());
    lines.push(String::new());
    lines.push("/**".to_string());
    lines.push(format!(
        " * Auto-generated PHPUnit test suite for {} {}",
        endpoint.method_or("GET"),
        endpoint.api_or("/")
    ));
    lines.push(" */".to_string());
    lines.push(format!("class {class}Test extends TestCase"));
    lines.push("{".to_string());
    lines.push(format!("    private string $baseUrl = '{BASE_URL}';"));
    lines.push(String::new());

    if test_cases.is_empty() {
        let api = escape(endpoint.api_or("/health"), QuoteStyle::Single);
        lines.push("    public function testSmokeEndpointResponds(): void".to_string());
        lines.push("    {".to_string());
        lines.push(format!("        $ch = curl_init($this->baseUrl . '{api}');"));
        lines.push("        curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);".to_string());
        lines.push("        $response = curl_exec($ch);".to_string());
        lines.push("        $statusCode = curl_getinfo($ch, CURLINFO_HTTP_CODE);".to_string());
        lines.push("        curl_close($ch);".to_string());
        lines.push("        $this->assertGreaterThanOrEqual(200, $statusCode);".to_string());
        lines.push("        $this->assertLessThan(600, $statusCode);".to_string());
        lines.push("    }".to_string());
    }

    for (idx, case) in test_cases.iter().enumerate() {
        let resolved = case.resolve(endpoint);
        let desc = match resolved.description {
            Some(d) => d.to_string(),
            None => format!("case {idx}"),
        };
        let method_name = format!(
            "test{idx}{}",
            sanitize(&desc, IdentCasing::StripKeepCase, NAME_CAP)
        );
        let api = escape(resolved.api, QuoteStyle::Single);

        lines.push(String::new());
        lines.push(format!("    /** {desc} */"));
        lines.push(format!("    public function {method_name}(): void"));
        lines.push("    {".to_string());
        lines.push(format!("        $ch = curl_init($this->baseUrl . '{api}');"));
        lines.push("        curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);".to_string());
        lines.push(format!(
            "        curl_setopt($ch, CURLOPT_CUSTOMREQUEST, '{}');",
            resolved.method
        ));

        if resolved.has_body() {
            if let Some(body) = resolved.body {
                lines.push(format!(
                    "        curl_setopt($ch, CURLOPT_POSTFIELDS, '{}');",
                    escape(&json_minified(body)?, QuoteStyle::Single)
                ));
            }
        }

        let mut header_list = vec!["'Content-Type: application/json'".to_string()];
        for (key, value) in resolved.headers {
            header_list.push(format!(
                "'{}: {}'",
                escape(key, QuoteStyle::Single),
                escape(&header_text(value), QuoteStyle::Single)
            ));
        }
        lines.push(format!(
            "        curl_setopt($ch, CURLOPT_HTTPHEADER, [{}]);",
            header_list.join(", ")
        ));

        lines.push("        $response = curl_exec($ch);".to_string());
        lines.push("        $statusCode = curl_getinfo($ch, CURLINFO_HTTP_CODE);".to_string());
        lines.push("        curl_close($ch);".to_string());

        if let Some(code) = resolved.expected.status_code {
            lines.push(format!("        $this->assertEquals({code}, $statusCode);"));
        }
        if let Some(message) = resolved.expected.message() {
            lines.push(format!(
                "        $this->assertStringContainsString('{}', $response);",
                escape(message, QuoteStyle::Single)
            ));
        }
        lines.push("    }".to_string());
    }

    lines.push("}".to_string());
    lines.push(String::new());
    Ok(lines.join("\n"))
}
