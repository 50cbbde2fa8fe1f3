//! # Test case data model
//!
//! The abstract inputs a renderer consumes: the endpoint under test and the
//! scenarios to render against it. These arrive as JSON from the upstream
//! dispatch layer, so every field is optional and deserialization is
//! lenient; fallbacks are resolved per case at render time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept any JSON for an optional field: a value of the wrong type counts
/// as absent instead of failing the whole parse. Renderers degrade to
/// defaults for malformed optional input rather than erroring, so the data
/// model must not reject upstream JSON the original would have rendered.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// The default HTTP method/path a generated suite targets absent a per-case
/// override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl EndpointDescriptor {
    /// The normalized descriptor the dispatcher substitutes when the caller
    /// supplies no endpoint at all.
    pub fn root() -> Self {
        Self {
            api: Some("/".to_string()),
            method: Some("GET".to_string()),
        }
    }

    /// The endpoint path, or `default` when absent/empty.
    pub fn api_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(&self.api).unwrap_or(default)
    }

    /// The endpoint method, or `default` when absent/empty.
    pub fn method_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(&self.method).unwrap_or(default)
    }
}

/// Per-case overrides of the endpoint's request shape.
///
/// Headers keep their insertion order (`serde_json` is built with
/// `preserve_order`), which is also the order they are attached to the
/// generated request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseInput {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Map::is_empty")]
    pub headers: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Assertions to embed in the generated test. Absent fields mean "emit no
/// assertion for this", not failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expected {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Expected {
    /// The expected response substring, when present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.status_code.is_none() && self.message.is_none()
    }
}

/// One scenario to render.
///
/// The request shape may live under `input` or flattened directly on the
/// case itself (shorthand records); `resolve` prefers `input` when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub input: Option<CaseInput>,
    #[serde(flatten)]
    pub inline: CaseInput,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Expected::is_empty")]
    pub expected: Expected,
}

impl TestCase {
    /// Resolve the effective request shape for this case against the
    /// enclosing endpoint: case input first, then the endpoint, then the
    /// hard defaults (`POST` / `/`). A JSON `null` body counts as no body.
    pub fn resolve<'a>(&'a self, endpoint: &'a EndpointDescriptor) -> ResolvedCase<'a> {
        let input = self.input.as_ref().unwrap_or(&self.inline);
        let method = non_empty(&input.method)
            .or_else(|| non_empty(&endpoint.method))
            .unwrap_or("POST")
            .to_uppercase();
        let api = non_empty(&input.api).unwrap_or_else(|| endpoint.api_or("/"));
        let body = input.body.as_ref().filter(|b| !b.is_null());

        ResolvedCase {
            description: non_empty(&self.description),
            method,
            api,
            headers: &input.headers,
            body,
            expected: &self.expected,
        }
    }
}

/// A test case with every fallback applied, ready for emission.
#[derive(Debug)]
pub struct ResolvedCase<'a> {
    pub description: Option<&'a str>,
    /// Effective HTTP method, uppercased.
    pub method: String,
    pub api: &'a str,
    pub headers: &'a Map<String, Value>,
    pub body: Option<&'a Value>,
    pub expected: &'a Expected,
}

impl ResolvedCase<'_> {
    /// Whether the generated request carries a payload: a body is attached
    /// only when present and the method is not `GET`.
    pub fn has_body(&self) -> bool {
        self.body.is_some() && self.method != "GET"
    }
}

/// Treat absent and empty strings alike, mirroring the truthiness rules the
/// upstream JSON producers assume.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
