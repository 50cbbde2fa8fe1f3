use thiserror::Error;

/// Errors surfaced by the generator.
///
/// The taxonomy is deliberately narrow: missing or malformed optional input
/// degrades to defaults inside the renderers, so the only failure that
/// propagates is a JSON serialization fault while embedding a request body
/// or header map into generated source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize value into generated source: {0}")]
    Serialize(#[from] serde_json::Error),
}
