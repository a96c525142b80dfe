//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_slice`, `ParseFailureCategory`, categorize/hint helpers.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Documents are decoded from raw bytes so UTF-8 validation stays a parse concern.
//! Invariants: Category mapping is deterministic for representative errors.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Eof,
    NumericRange,
    DepthLimit,
    Utf8,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "unexpected-eof",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Utf8 => "utf8",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    if err.classify() == Category::Eof {
        return ParseFailureCategory::Eof;
    }
    categorize_message(&err.to_string())
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    if message.contains("recursion limit exceeded") {
        return ParseFailureCategory::DepthLimit;
    }
    if message.contains("number out of range") {
        return ParseFailureCategory::NumericRange;
    }
    if message.contains("invalid unicode code point") || message.contains("lone leading surrogate")
    {
        return ParseFailureCategory::Utf8;
    }
    ParseFailureCategory::Syntax
}

/// One-based line/column of the failure, when the parser knows it.
pub(crate) fn position(err: &serde_json::Error) -> Option<(usize, usize)> {
    if err.line() == 0 {
        return None;
    }
    Some((err.line(), err.column()))
}

pub(crate) fn hint_for_error(err: &serde_json::Error) -> String {
    let category = categorize_error(err);
    match position(err) {
        Some((line, column)) => format!(
            "Check the document around line {line}, column {column} (parse category: {}).",
            category.label()
        ),
        None => format!(
            "Check the document syntax (parse category: {}).",
            category.label()
        ),
    }
}
