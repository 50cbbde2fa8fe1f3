//! # Dialect dispatch
//!
//! Maps the upstream `framework`/`language` selector strings onto the set of
//! applicable dialect renderers, invokes each once, and collects the results
//! into a path → source-text mapping. The two selectors are independent,
//! non-exclusive hints: either may pick a dialect, and one call can yield
//! several unrelated dialect outputs. When nothing matches, the Jest
//! renderer fires alone so the result is never empty.

use std::collections::BTreeMap;

use crate::domain::{EndpointDescriptor, TestCase};
use crate::error::Error;
use crate::render::Dialect;

/// Default framework selector assumed when the caller supplies none.
const DEFAULT_FRAMEWORK: &str = "jest+supertest";

/// Render test files for every dialect the selectors pick.
///
/// Each selected dialect's output is published under two paths at once, a
/// `tests/` path and a bare root-level file name, so downstream consumers
/// expecting either layout both succeed. Absent `test_cases` normalizes to
/// an empty sequence (which renders one smoke test per dialect); an absent
/// `endpoint` normalizes to `{api: "/", method: "GET"}`.
pub fn generate(
    test_cases: Option<&[TestCase]>,
    endpoint: Option<&EndpointDescriptor>,
    framework: Option<&str>,
    language: Option<&str>,
) -> Result<BTreeMap<String, String>, Error> {
    let cases = test_cases.unwrap_or(&[]);
    let default_endpoint;
    let endpoint = match endpoint {
        Some(ep) => ep,
        None => {
            default_endpoint = EndpointDescriptor::root();
            &default_endpoint
        }
    };
    let framework = framework
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FRAMEWORK)
        .to_lowercase();
    let language = language.unwrap_or("");

    let mut files = BTreeMap::new();
    for dialect in Dialect::ALL {
        if dialect.matches(&framework, language) {
            log::debug!("rendering {dialect} for framework `{framework}` / language `{language}`");
            insert_outputs(&mut files, dialect, cases, endpoint)?;
        }
    }

    // Fallback fires only when zero dialects matched.
    if files.is_empty() {
        log::debug!(
            "no dialect matched framework `{framework}` / language `{language}`, falling back to {}",
            Dialect::Jest
        );
        insert_outputs(&mut files, Dialect::Jest, cases, endpoint)?;
    }

    Ok(files)
}

/// Jest-only entry point kept for upstream callers that predate the
/// multi-framework dispatcher.
pub fn generate_jest(
    test_cases: &[TestCase],
    endpoint: &EndpointDescriptor,
) -> Result<BTreeMap<String, String>, Error> {
    generate(
        Some(test_cases),
        Some(endpoint),
        Some(DEFAULT_FRAMEWORK),
        Some("javascript"),
    )
}

fn insert_outputs(
    files: &mut BTreeMap<String, String>,
    dialect: Dialect,
    cases: &[TestCase],
    endpoint: &EndpointDescriptor,
) -> Result<(), Error> {
    let content = dialect.render(cases, endpoint)?;
    let name = dialect.file_name(endpoint);
    files.insert(format!("tests/{name}"), content.clone());
    files.insert(name, content);
    Ok(())
}
