//! Blueprint location documents and their line-oriented text form.
//!
//! A document is a header block (`#Name:`, `#Creator:`, `#Description:`)
//! followed by sections of entry lines. `parser.rs` turns lines into a
//! `BlueprintLocation`; `serializer.rs` does the reverse. Which sections are
//! legal is decided once by the `Format` variant.

pub mod blueprint_location;
pub mod error;
pub mod format;
pub mod location_config;
pub mod parser;
pub mod serializer;

pub use blueprint_location::BlueprintLocation;
pub use error::DocumentError;
pub use format::{Format, Section};
pub use location_config::{Biome, GroupName, LocationConfig};
pub use parser::parse_lines;
pub use serializer::{serialize_lines, LocationConfigOutput, SerializeOptions};
