//! # Testman
//!
//! Renders abstract HTTP endpoint test cases into complete, runnable test
//! source files for several target test frameworks:
//!
//! - Jest + Supertest (JavaScript/TypeScript, in-process requests)
//! - pytest (Python, `requests` against a running instance)
//! - JUnit5 (Java, `java.net.http.HttpClient`)
//! - PHPUnit (PHP, curl)
//! - Go `testing` (`net/http`)
//!
//! The entry point is [`dispatch::generate`]: it maps the requested
//! framework/language selectors onto one or more dialect renderers and
//! returns a mapping of output path to source text. Rendering is pure and
//! deterministic; malformed or missing optional input degrades to documented
//! defaults instead of failing.

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod escape;
pub mod protocol;
pub mod render;

pub use dispatch::{generate, generate_jest};
pub use domain::{CaseInput, EndpointDescriptor, Expected, TestCase};
pub use error::Error;
pub use render::Dialect;
