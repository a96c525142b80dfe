//! Purpose: Implement the in-place JSON rewrite for one file path.
//! Exports: `rewrite_file`, `RewriteSummary`.
//! Role: Orchestrate read -> parse -> render -> write with domain error mapping.
//! Invariants: The target file is never written unless parse and render succeeded.
//! Invariants: Written output ends with exactly one trailing newline.
//! Invariants: File handles are scoped inside std::fs calls; nothing leaks on error paths.
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::error::{Error, ErrorKind};
use crate::core::render::render;
use crate::json::parse;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RewriteSummary {
    pub bytes_read: usize,
    pub bytes_written: usize,
}

pub fn rewrite_file(path: &Path) -> Result<RewriteSummary, Error> {
    let bytes = read_document(path)?;
    debug!(bytes = bytes.len(), path = %path.display(), "read JSON document");
    let value = parse_document(&bytes, path)?;
    let mut output = render(&value)?;
    output.push('\n');
    write_document(path, output.as_bytes())?;
    debug!(bytes = output.len(), path = %path.display(), "wrote formatted document");
    Ok(RewriteSummary {
        bytes_read: bytes.len(),
        bytes_written: output.len(),
    })
}

fn read_document(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to read JSON document")
            .with_path(path)
            .with_source(err)
    })
}

fn parse_document(bytes: &[u8], path: &Path) -> Result<Value, Error> {
    parse::from_slice(bytes).map_err(|err| {
        let mut mapped = Error::new(ErrorKind::Parse)
            .with_message("input is not valid JSON")
            .with_path(path)
            .with_hint(parse::hint_for_error(&err));
        if let Some((line, column)) = parse::position(&err) {
            mapped = mapped.with_line(line).with_column(column);
        }
        mapped.with_source(err)
    })
}

fn write_document(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    std::fs::write(path, bytes).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to write formatted document")
            .with_path(path)
            .with_source(err)
    })
}

fn map_io_error_kind(err: &std::io::Error) -> ErrorKind {
    match err.kind() {
        std::io::ErrorKind::NotFound => ErrorKind::NotFound,
        std::io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}
