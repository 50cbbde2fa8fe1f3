//! # Literal escaping and identifier sanitization
//!
//! Dialect-agnostic helpers shared by every renderer: making arbitrary text
//! safe to embed inside a quoted source-language string literal, and turning
//! free-form text (descriptions, API paths) into identifiers that satisfy
//! the target dialect's grammar.

/// Which delimiter the escaped text will be embedded between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

/// Escape `text` so that embedding the result verbatim between the chosen
/// quote characters yields a string literal whose runtime value equals
/// `text` exactly. Backslashes are escaped first, then the delimiter
/// matching `quote`.
///
/// The double-quote regime additionally escapes `\n`/`\r`/`\t`: every
/// consumer of that regime (JS, Java, Go, Python) interprets those
/// sequences, and a raw newline would split the literal. The single-quote
/// regime stays delimiter-only — its consumers include PHP single-quoted
/// strings, where `\n` is not an escape sequence but a raw newline is a
/// legal part of the literal.
pub fn escape(text: &str, quote: QuoteStyle) -> String {
    let escaped = text.replace('\\', "\\\\");
    match quote {
        QuoteStyle::Single => escaped.replace('\'', "\\'"),
        QuoteStyle::Double => escaped
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t"),
    }
}

/// How a sanitized identifier is cased and separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentCasing {
    /// Lowercase everything; runs of illegal characters collapse to a
    /// single `_` (pytest function names).
    SnakeLower,
    /// Keep the original casing; illegal characters are stripped outright
    /// (Java/PHP/Go method and class names).
    StripKeepCase,
}

/// Reduce free-form text to the target dialect's identifier grammar
/// (ASCII letters/digits, plus `_` for the snake_case regime), capped at
/// `max_len` characters. Callers prepend their own `test`/`Test` prefix, so
/// a leading digit in the result is fine.
pub fn sanitize(text: &str, casing: IdentCasing, max_len: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_len));
    match casing {
        IdentCasing::SnakeLower => {
            let mut in_run = false;
            for ch in text.to_lowercase().chars() {
                if out.len() == max_len {
                    break;
                }
                if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                    out.push(ch);
                    in_run = false;
                } else if !in_run {
                    out.push('_');
                    in_run = true;
                }
            }
        }
        IdentCasing::StripKeepCase => {
            for ch in text.chars().filter(char::is_ascii_alphanumeric) {
                if out.len() == max_len {
                    break;
                }
                out.push(ch);
            }
        }
    }
    out
}
