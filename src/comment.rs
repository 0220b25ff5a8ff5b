//! @ai:module:intent Normalize raw doc comments into plain text lines
//! @ai:module:layer domain
//! @ai:module:public_api CommentStyle, normalize_comment, leading_text
//! @ai:module:stateless true

/// @ai:intent Comment syntax markers recognized in Go doc comments
#[derive(Debug, Clone)]
pub struct CommentStyle {
    pub single_line: &'static str,
    pub block_start: &'static str,
    pub block_end: &'static str,
    pub block_line_prefix: char,
}

/// Go comment syntax.
pub const GO_STYLE: CommentStyle = CommentStyle {
    single_line: "//",
    block_start: "/*",
    block_end: "*/",
    block_line_prefix: '*',
};

/// @ai:intent Split a raw comment into lines with comment markers removed
/// @ai:pre raw is a run of `//` lines, one or more `/* */` blocks, or a mix
/// @ai:post one output line per input line, original order, inner whitespace kept
/// @ai:example ("// ENUM(a,\n// b)") -> [" ENUM(a,", " b)"]
/// @ai:effects pure
pub fn normalize_comment(raw: &str) -> Vec<String> {
    let style = &GO_STYLE;
    let mut lines = Vec::new();
    let mut in_block = false;

    for line in raw.lines() {
        let mut text = line;

        if in_block {
            let trimmed = text.trim_start();
            if trimmed.starts_with(style.block_end) {
                text = trimmed;
            } else if let Some(rest) = trimmed.strip_prefix(style.block_line_prefix) {
                text = rest;
            }
        } else {
            let trimmed = text.trim_start();
            if let Some(rest) = trimmed.strip_prefix(style.single_line) {
                lines.push(rest.to_string());
                continue;
            }
            match trimmed.strip_prefix(style.block_start) {
                Some(rest) => {
                    in_block = true;
                    text = rest;
                }
                None => {
                    lines.push(text.to_string());
                    continue;
                }
            }
        }

        match text.find(style.block_end) {
            Some(end) => {
                in_block = false;
                lines.push(text[..end].to_string());
            }
            None => lines.push(text.to_string()),
        }
    }

    lines
}

/// @ai:intent Free text of a comment that precedes the marker
/// @ai:post leading/trailing whitespace removed, lines joined with '\n'
/// @ai:effects pure
pub fn leading_text(lines: &[String], marker: &str) -> String {
    let text = lines
        .iter()
        .map(|line| {
            let line = line.strip_prefix(' ').unwrap_or(line);
            line.trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n");

    match text.find(marker) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_comments() {
        let lines = normalize_comment("// Color is an enum\n// ENUM(red, green)");
        assert_eq!(lines, vec![" Color is an enum", " ENUM(red, green)"]);
    }

    #[test]
    fn test_block_comment_multiline() {
        let raw = "/* ENUM(\n\tred,\n\tgreen\n)\n*/";
        let lines = normalize_comment(raw);
        assert_eq!(lines, vec![" ENUM(", "\tred,", "\tgreen", ")", ""]);
    }

    #[test]
    fn test_block_comment_star_decoration() {
        let raw = "/*\n * ENUM(a,\n * b)\n */";
        let lines = normalize_comment(raw);
        assert_eq!(lines, vec!["", " ENUM(a,", " b)", ""]);
    }

    #[test]
    fn test_single_line_block() {
        assert_eq!(normalize_comment("/* ENUM(a) */"), vec![" ENUM(a) "]);
    }

    #[test]
    fn test_mixed_styles_keep_order() {
        let raw = "// Intro\n/* ENUM(a,\nb) */\n// trailing";
        let lines = normalize_comment(raw);
        assert_eq!(lines, vec![" Intro", " ENUM(a,", "b) ", " trailing"]);
    }

    #[test]
    fn test_empty_comment() {
        assert!(normalize_comment("").is_empty());
    }

    #[test]
    fn test_leading_text() {
        let lines = normalize_comment("// Color is an enum.\n// It has colors.\n// ENUM(red)");
        assert_eq!(
            leading_text(&lines, "ENUM("),
            "Color is an enum.\nIt has colors."
        );
    }
}
