//! Purpose: Serialize a JSON value with fixed four-space indentation.
//! Exports: `render`.
//! Role: Small, pure formatter used by the rewrite pipeline.
//! Invariants: Output is the serde_json pretty form with a four-space indent unit.
//! Invariants: Output never carries a trailing newline; the pipeline appends exactly one.
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::error::{Error, ErrorKind};

const INDENT: &[u8] = b"    ";

pub fn render(value: &Value) -> Result<String, Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to serialize JSON document")
            .with_source(err)
    })?;
    String::from_utf8(buf).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("serializer produced invalid UTF-8")
            .with_source(err)
    })
}
