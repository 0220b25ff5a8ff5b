//! @ai:module:intent Locate the balanced ENUM(...) block and flatten it into one declaration string
//! @ai:module:layer domain
//! @ai:module:public_api BlockScan, extract_enum_block, split_inline_comment, ENUM_MARKER, COMMENT_MARKER
//! @ai:module:depends_on escape
//! @ai:module:stateless true

use crate::escape::escape_comment;

/// Opens an enum declaration inside a doc comment.
pub const ENUM_MARKER: &str = "ENUM(";

/// Separates a member from its inline comment.
pub const COMMENT_MARKER: &str = "//";

/// @ai:intent Outcome of scanning comment lines for an ENUM block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockScan {
    /// No marker in any line.
    NotFound,
    /// Comma-joined member text between the marker and its matching `)`.
    Closed(String),
    /// Lines ran out with `depth` parentheses still open.
    Dangling { depth: usize },
}

/// @ai:intent Extract the flattened member text of the first ENUM block
/// @ai:pre lines are normalized comment lines (markers removed)
/// @ai:post Closed text never contains the marker or the closing paren
/// @ai:example ([" ENUM(a, b=0b1(0)", "c)"]) -> Closed("a, b=0b1(0),c")
/// @ai:effects pure
pub fn extract_enum_block(lines: &[String]) -> BlockScan {
    let mut parts: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut started = false;

    for line in lines {
        let mut text = line.as_str();

        if !started {
            match line.find(ENUM_MARKER) {
                Some(idx) => {
                    started = true;
                    depth = 1;
                    text = &line[idx + ENUM_MARKER.len()..];
                }
                None => continue,
            }
        }

        let mut close = None;
        for (idx, c) in text.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(idx);
                        break;
                    }
                }
                _ => {}
            }
        }

        if let Some(idx) = close {
            text = &text[..idx];
        }

        let member_text = split_inline_comment(text);
        if !member_text.is_empty() {
            parts.push(member_text);
        }

        if close.is_some() {
            return BlockScan::Closed(parts.join(","));
        }
    }

    if started {
        BlockScan::Dangling { depth }
    } else {
        BlockScan::NotFound
    }
}

/// @ai:intent Separate a line's member text from its trailing `//` comment
/// @ai:post comment (if any) is re-attached escaped, after COMMENT_MARKER
/// @ai:example ("  red-orange, // has a , in it") -> "red-orange//has+a+%2C+in+it"
/// @ai:effects pure
pub fn split_inline_comment(line: &str) -> String {
    let (value, comment) = match line.find(COMMENT_MARKER) {
        Some(idx) => (&line[..idx], Some(&line[idx + COMMENT_MARKER.len()..])),
        None => (line, None),
    };

    let value = value.trim();
    let mut member_text = value.strip_suffix(',').unwrap_or(value).trim().to_string();

    if let Some(comment) = comment {
        member_text.push_str(COMMENT_MARKER);
        member_text.push_str(&escape_comment(comment.trim()));
    }

    member_text
}
