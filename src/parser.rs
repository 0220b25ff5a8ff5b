//! @ai:module:intent Locate Go type specs and their doc comments
//! @ai:module:layer application
//! @ai:module:public_api parse_file, parse_source, CommentBlock, TypeSpecLocation, ParsedSource
//! @ai:module:depends_on model, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::model::DeclarationSource;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// @ai:intent A run of adjacent comment lines, kept verbatim
#[derive(Debug, Clone)]
pub struct CommentBlock {
    pub lines: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
}

/// @ai:intent Location of a `type Name Base` spec in source
#[derive(Debug, Clone)]
pub struct TypeSpecLocation {
    pub name: String,
    pub go_type: String,
    pub line: usize,
    pub preceding_comment_block: Option<usize>,
}

/// @ai:intent Parsed source file with comments and type specs
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub comment_blocks: Vec<CommentBlock>,
    pub type_specs: Vec<TypeSpecLocation>,
}

/// @ai:intent Check if a file should be scanned for enums
/// @ai:example ("color.go") -> true
/// @ai:example ("color.rs") -> false
/// @ai:effects pure
pub fn is_supported_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "go").unwrap_or(false)
}

/// @ai:intent Parse a Go file and extract comment blocks and type specs
/// @ai:pre path exists and is readable
/// @ai:effects fs:read
pub fn parse_file(path: &Path) -> Result<ParsedSource> {
    if !is_supported_file(path) {
        return Err(Error::UnsupportedFileType(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_source(&content))
}

/// @ai:intent Parse Go source text
/// @ai:effects pure
pub fn parse_source(content: &str) -> ParsedSource {
    let comment_blocks = extract_comment_blocks(content);
    let type_specs = extract_type_specs(content, &comment_blocks);

    ParsedSource {
        comment_blocks,
        type_specs,
    }
}

/// @ai:intent Extract all comment blocks from source content
/// @ai:post blank lines and code lines end a block
/// @ai:effects pure
fn extract_comment_blocks(content: &str) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();
    let mut current_block: Option<CommentBlock> = None;
    let mut in_block_comment = false;

    for (line_idx, line) in content.lines().enumerate() {
        let line_number = line_idx + 1;
        let trimmed = line.trim();

        let is_comment = if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            true
        } else if trimmed.starts_with("//") {
            true
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            in_block_comment = !rest.contains("*/");
            true
        } else {
            false
        };

        if is_comment {
            match &mut current_block {
                Some(block) => {
                    block.lines.push(line.to_string());
                    block.end_line = line_number;
                }
                None => {
                    current_block = Some(CommentBlock {
                        lines: vec![line.to_string()],
                        start_line: line_number,
                        end_line: line_number,
                    });
                }
            }
        } else if let Some(block) = current_block.take() {
            blocks.push(block);
        }
    }

    if let Some(block) = current_block {
        blocks.push(block);
    }

    blocks
}

fn type_spec_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*type\s+([A-Za-z_]\w*)\s+([A-Za-z_]\w*)\s*(?://.*)?$")
            .expect("Invalid regex")
    })
}

fn grouped_spec_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_]\w*)\s+([A-Za-z_]\w*)\s*(?://.*)?$").expect("Invalid regex")
    })
}

fn group_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*type\s*\(\s*(?://.*)?$").expect("Invalid regex"))
}

/// @ai:intent Extract `type Name Base` specs, including those inside `type ( ... )` groups
/// @ai:effects pure
fn extract_type_specs(content: &str, comment_blocks: &[CommentBlock]) -> Vec<TypeSpecLocation> {
    let mut locations = Vec::new();
    let mut in_group = false;
    let mut brace_depth = 0usize;

    for (line_idx, line) in content.lines().enumerate() {
        let line_number = line_idx + 1;

        let captures = if in_group {
            if brace_depth == 0 && line.trim_start().starts_with(')') {
                in_group = false;
                continue;
            }
            let captures = if brace_depth == 0 {
                grouped_spec_regex().captures(line)
            } else {
                None
            };
            // struct and interface bodies inside the group hold fields, not specs
            brace_depth += line.matches('{').count();
            brace_depth = brace_depth.saturating_sub(line.matches('}').count());
            captures
        } else if group_start_regex().is_match(line) {
            in_group = true;
            continue;
        } else {
            type_spec_regex().captures(line)
        };

        if let Some(captures) = captures {
            locations.push(TypeSpecLocation {
                name: captures[1].to_string(),
                go_type: captures[2].to_string(),
                line: line_number,
                preceding_comment_block: find_preceding_comment_block(line_number, comment_blocks),
            });
        }
    }

    locations
}

/// @ai:intent Find the comment block ending directly above a line
/// @ai:effects pure
fn find_preceding_comment_block(line: usize, blocks: &[CommentBlock]) -> Option<usize> {
    blocks.iter().position(|block| block.end_line + 1 == line)
}

impl CommentBlock {
    /// @ai:intent Raw comment text with original line breaks
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl ParsedSource {
    /// @ai:intent Candidate declarations: documented specs with integer or string bases
    /// @ai:effects pure
    pub fn declaration_sources(&self) -> Vec<DeclarationSource> {
        self.type_specs
            .iter()
            .filter_map(|spec| {
                let block = self.comment_blocks.get(spec.preceding_comment_block?)?;
                let mut source = DeclarationSource::new(&spec.name, &spec.go_type, &block.text())?;
                source.line = spec.line;
                Some(source)
            })
            .collect()
    }
}
