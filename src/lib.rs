//! Purpose: Shared core library crate used by the `jsonfmt` CLI and tests.
//! Exports: `core` (rendering, rewrite pipeline, errors).
//! Role: Internal library backing the binary; not a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;

pub(crate) mod json;
