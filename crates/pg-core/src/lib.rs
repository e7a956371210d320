//! Encoding table model and builder for phosgen.
//!
//! This crate contains the byte→Unicode table representation, the per-codec
//! decoding backends, the mapping-file parser, and the registry of built-in
//! legacy encodings.

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod glyphs;
mod mapping;
pub mod registry;
pub mod spec;
pub mod table;

pub use builder::build;
pub use codec::Codec;
pub use error::TableError;
pub use registry::builtin_encodings;
pub use spec::{EncodingSpec, TableSource};
pub use table::EncodingTable;
