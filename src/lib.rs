//! @ai:module:intent enumgen library for extracting ENUM(...) declarations and building enum value models
//! @ai:module:layer infrastructure
//! @ai:module:public_api builder, extractor, parser, config, model, output, error
//! @ai:module:stateless true
//!
//! # enumgen
//!
//! Scans Go doc comments for `ENUM(...)` annotations and turns each one into an
//! [`EnumDeclaration`]: ordered members with display names, generated
//! identifiers and sequential values, ready for a rendering step.
//!
//! ## Example
//!
//! ```rust
//! use enumgen::{build_declaration, DeclarationSource, GeneratorConfig};
//!
//! let source = DeclarationSource::new("Color", "int", "// ENUM(red, green=5, blue)").unwrap();
//! let decl = build_declaration(&source, &GeneratorConfig::default())
//!     .unwrap()
//!     .unwrap();
//!
//! let values: Vec<String> = decl.members.iter().map(|m| m.literal.to_string()).collect();
//! assert_eq!(values, ["0", "5", "6"]);
//! assert_eq!(decl.members[2].identifier, "ColorBlue");
//! ```

pub mod block;
pub mod builder;
pub mod comment;
pub mod config;
pub mod error;
pub mod escape;
pub mod extractor;
pub mod model;
pub mod output;
pub mod parser;
pub mod sanitize;
pub mod value;

pub use builder::build_declaration;
pub use config::{Aliases, GeneratorConfig};
pub use error::{Error, Result};
pub use extractor::{extract_directory, extract_file, extract_path, extract_source};
pub use model::{
    BaseType, DeclarationSource, Diagnostic, EnumDeclaration, EnumMember, Literal, Location,
    ParsedFile, ParsedProject, Severity,
};
pub use output::{format_diagnostics, format_parsed_file, format_project, OutputFormat};
pub use value::EnumValue;
