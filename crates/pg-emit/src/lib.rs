//! Code emission and escaped-literal formatting for phosgen.
//!
//! Deux sorties : le source Rust des tables construites (tables.rs), et la
//! représentation texte échappée `\xHH` des fichiers ANSI binaires
//! (escape.rs).

pub mod escape;
pub mod tables;

pub use escape::wrapped_escape_literal;
pub use tables::{emit_module, emit_table};
