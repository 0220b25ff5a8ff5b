//! @ai:module:intent Define the enum value model handed to the rendering step
//! @ai:module:layer domain
//! @ai:module:public_api BaseType, EnumDeclaration, EnumMember, Literal, Diagnostic, Severity, Location, ParsedFile, ParsedProject
//! @ai:module:stateless true

use crate::value::EnumValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Reserved member name: consumes a value slot, emits no member.
pub const SKIP_PLACEHOLDER: &str = "_";

/// @ai:intent Represents a source code location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
}

impl Location {
    /// @ai:intent Create a new Location
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self { file, line }
    }
}

/// @ai:intent Underlying representation governing value parsing and increment rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    Signed,
    Unsigned,
    String,
}

impl BaseType {
    /// @ai:intent Classify a Go base type name
    /// @ai:example ("uint8") -> Some(Unsigned)
    /// @ai:example ("string") -> Some(String)
    /// @ai:example ("float64") -> None
    /// @ai:effects pure
    pub fn from_go_type(name: &str) -> Option<Self> {
        match name {
            "string" => Some(BaseType::String),
            "uint" | "uint8" | "uint16" | "uint32" | "uint64" | "uintptr" | "byte" => {
                Some(BaseType::Unsigned)
            }
            "int" | "int8" | "int16" | "int32" | "int64" | "rune" => Some(BaseType::Signed),
            _ => None,
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BaseType::Signed => "signed integer",
            BaseType::Unsigned => "unsigned integer",
            BaseType::String => "string",
        };
        f.write_str(name)
    }
}

/// @ai:intent A candidate type handed over by declaration discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSource {
    pub name: String,
    pub go_type: String,
    pub base_type: BaseType,
    /// Doc comment exactly as authored, markers included.
    pub comment: String,
    pub line: usize,
}

impl DeclarationSource {
    /// @ai:intent Create a source with the base type derived from the Go type
    /// @ai:post None when go_type is not an integer or string type
    pub fn new(name: &str, go_type: &str, comment: &str) -> Option<Self> {
        Some(Self {
            name: name.to_string(),
            go_type: go_type.to_string(),
            base_type: BaseType::from_go_type(go_type)?,
            comment: comment.to_string(),
            line: 0,
        })
    }
}

/// @ai:intent Value a member contributes to generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(EnumValue),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// @ai:intent One named value inside an enum declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Token before any `=`, trimmed.
    pub raw_name: String,
    /// Title-cased raw name.
    pub display_name: String,
    /// Prefixed, sanitized and case-transformed identifier.
    pub identifier: String,
    /// Running counter slot this member occupies. For string bases this is a
    /// derived position (reset by integer overrides, saturating at the top of
    /// the range), never the emitted value.
    pub ordinal: EnumValue,
    pub literal: Literal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// @ai:intent Severity level for diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// @ai:intent A non-model finding reported to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    /// @ai:intent Create a warning diagnostic without a location
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.into(),
            location: None,
        }
    }

    /// @ai:intent Create an error diagnostic without a location
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.into(),
            location: None,
        }
    }

    /// @ai:intent Attach a location to the diagnostic
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// @ai:intent One annotated type, fully populated in one parsing pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDeclaration {
    pub name: String,
    /// Declared Go base type, e.g. `uint8`.
    pub go_type: String,
    pub base_type: BaseType,
    pub prefix: String,
    /// Free text preceding the `ENUM(` marker.
    pub comment: String,
    pub members: Vec<EnumMember>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl EnumDeclaration {
    /// @ai:intent Expose (name, value) pairs for the rendering step
    /// @ai:effects pure
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.members
            .iter()
            .map(|m| (m.raw_name.as_str(), &m.literal))
    }

    /// @ai:intent Look up a member by its display name
    pub fn member(&self, display_name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.display_name == display_name)
    }
}

/// @ai:intent Complete extraction result for a file
#[derive(Debug, Clone, Serialize, Default)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub declarations: Vec<EnumDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    /// @ai:intent Count declarations that failed to parse
    pub fn failures(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }
}

/// @ai:intent Complete extraction result for a directory
#[derive(Debug, Clone, Serialize, Default)]
pub struct ParsedProject {
    pub files: Vec<ParsedFile>,
    pub total_declarations: usize,
    pub failed_declarations: usize,
}

impl ParsedProject {
    /// @ai:intent Add a file result and update counts
    pub fn push(&mut self, file: ParsedFile) {
        self.total_declarations += file.declarations.len();
        self.failed_declarations += file.failures();
        self.files.push(file);
    }

    /// @ai:intent Check if every declaration parsed
    pub fn passed(&self) -> bool {
        self.failed_declarations == 0
    }
}
