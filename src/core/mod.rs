// Core modules implementing rendering, rewriting, and error modeling.
pub mod error;
pub mod render;
pub mod rewrite;
