//! @ai:module:intent Parse member specs of an ENUM block and build the value model
//! @ai:module:layer application
//! @ai:module:public_api build_declaration, parse_members
//! @ai:module:depends_on comment, block, escape, value, sanitize, config, model, error
//! @ai:module:stateless true

use crate::block::{extract_enum_block, BlockScan, COMMENT_MARKER, ENUM_MARKER};
use crate::comment::{leading_text, normalize_comment};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::escape::unescape_comment;
use crate::model::{
    BaseType, DeclarationSource, Diagnostic, EnumDeclaration, EnumMember, Literal, SKIP_PLACEHOLDER,
};
use crate::sanitize::{make_identifier, title_case};
use crate::value::{parse_signed, parse_unsigned, EnumValue, LiteralError};

/// @ai:intent Build the enum model for one annotated type
/// @ai:pre source.comment is the raw doc comment of the type
/// @ai:post Ok(None) when the comment has no ENUM( marker
/// @ai:post on Err no partial model is produced
/// @ai:effects pure
pub fn build_declaration(
    source: &DeclarationSource,
    config: &GeneratorConfig,
) -> Result<Option<EnumDeclaration>> {
    let lines = normalize_comment(&source.comment);

    let body = match extract_enum_block(&lines) {
        BlockScan::NotFound => return Ok(None),
        BlockScan::Dangling { depth } => {
            return Err(Error::UnbalancedBlock {
                type_name: source.name.clone(),
                depth,
            })
        }
        BlockScan::Closed(body) => body,
    };

    let prefix = config.prefix_for(&source.name);
    let (members, diagnostics) = parse_members(source, &prefix, &body, config)?;

    Ok(Some(EnumDeclaration {
        name: source.name.clone(),
        go_type: source.go_type.clone(),
        base_type: source.base_type,
        prefix,
        comment: leading_text(&lines, ENUM_MARKER),
        members,
        diagnostics,
    }))
}

/// @ai:intent Parse the flattened ENUM body into members
/// @ai:pre body is the output of extract_enum_block (comments escaped)
/// @ai:post placeholder members advance the counter but are not returned
/// @ai:post a comment-only line is attached to the next member
/// @ai:effects pure
pub fn parse_members(
    source: &DeclarationSource,
    prefix: &str,
    body: &str,
    config: &GeneratorConfig,
) -> Result<(Vec<EnumMember>, Vec<Diagnostic>)> {
    let mut members = Vec::new();
    let mut diagnostics = Vec::new();
    let mut next = Some(EnumValue::zero(source.base_type));
    let mut pending_comment: Option<String> = None;

    for spec in body.split(',') {
        let (value_text, comment) = match spec.find(COMMENT_MARKER) {
            Some(idx) => {
                let comment = unescape_comment(&spec[idx + COMMENT_MARKER.len()..]);
                (&spec[..idx], Some(comment.trim().to_string()))
            }
            None => (spec, None),
        };

        let comment = comment.filter(|c| !c.is_empty());
        let value_text = value_text.trim();
        if value_text.is_empty() {
            if let Some(comment) = comment {
                pending_comment = Some(match pending_comment.take() {
                    Some(previous) => format!("{}\n{}", previous, comment),
                    None => comment,
                });
            }
            continue;
        }

        let mut raw_name = value_text;
        let mut text_value = value_text.to_string();
        let mut explicit = None;

        if let Some(eq) = value_text.find('=') {
            let data = value_text[eq + 1..].trim();

            if data.is_empty() {
                raw_name = value_text.strip_suffix('=').unwrap_or(value_text);
                let message = format!(
                    "Ignoring '=' without a value on `{}` in `{}`",
                    raw_name.trim(),
                    source.name
                );
                tracing::warn!("{}", message);
                diagnostics.push(Diagnostic::warning("W001", message));
            } else {
                raw_name = &value_text[..eq];
                text_value = data.to_string();

                let invalid = |e: LiteralError| Error::InvalidNumericLiteral {
                    type_name: source.name.clone(),
                    member: raw_name.trim().to_string(),
                    literal: data.to_string(),
                    base: source.base_type,
                    source: e,
                };

                match source.base_type {
                    BaseType::String => {
                        if let Ok(value) = parse_signed(data) {
                            explicit = Some(EnumValue::Signed(value));
                            text_value = raw_name.trim().to_string();
                        } else if let Some(unquoted) = unquote(data) {
                            text_value = unquoted.to_string();
                        }
                    }
                    BaseType::Unsigned => {
                        explicit = Some(EnumValue::Unsigned(parse_unsigned(data).map_err(invalid)?));
                    }
                    BaseType::Signed => {
                        explicit = Some(EnumValue::Signed(parse_signed(data).map_err(invalid)?));
                    }
                }
            }
        }

        let raw_name = raw_name.trim();

        let ordinal = match explicit.or(next) {
            Some(value) => value,
            None => {
                return Err(Error::CounterOverflow {
                    type_name: source.name.clone(),
                    member: raw_name.to_string(),
                })
            }
        };
        next = match source.base_type {
            // string literals never read the counter; it saturates
            BaseType::String => ordinal.checked_increment().or(Some(ordinal)),
            BaseType::Signed | BaseType::Unsigned => ordinal.checked_increment(),
        };

        if raw_name == SKIP_PLACEHOLDER {
            continue;
        }

        let display_name = title_case(raw_name);
        let identifier = make_identifier(prefix, &display_name, config);

        let literal = match source.base_type {
            BaseType::String => Literal::Text(apply_forced_case(text_value.trim(), config)),
            BaseType::Signed | BaseType::Unsigned => Literal::Number(ordinal),
        };

        members.push(EnumMember {
            raw_name: raw_name.to_string(),
            display_name,
            identifier,
            ordinal,
            literal,
            comment: match (pending_comment.take(), comment) {
                (Some(leading), Some(own)) => Some(format!("{}\n{}", leading, own)),
                (leading, own) => own.or(leading),
            },
        });
    }

    Ok((members, diagnostics))
}

/// @ai:intent Strip matching quote delimiters
/// @ai:example ("\"20\"") -> Some("20")
/// @ai:example ("20") -> None
/// @ai:effects pure
fn unquote(text: &str) -> Option<&str> {
    ['"', '\'', '`'].iter().find_map(|&quote| {
        text.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

fn apply_forced_case(text: &str, config: &GeneratorConfig) -> String {
    if config.force_upper {
        text.to_uppercase()
    } else if config.force_lower {
        text.to_lowercase()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source(go_type: &str, comment: &str) -> DeclarationSource {
        DeclarationSource::new("Color", go_type, comment).unwrap()
    }

    fn build(go_type: &str, comment: &str) -> EnumDeclaration {
        build_declaration(&source(go_type, comment), &GeneratorConfig::default())
            .unwrap()
            .unwrap()
    }

    fn numbers(decl: &EnumDeclaration) -> Vec<String> {
        decl.members.iter().map(|m| m.literal.to_string()).collect()
    }

    #[test]
    fn test_auto_increment_is_monotonic() {
        let decl = build("int", "// ENUM(a, b, c, d, e)");
        for (i, member) in decl.members.iter().enumerate() {
            assert_eq!(member.ordinal, EnumValue::Signed(i as i64));
            assert_eq!(member.literal, Literal::Number(EnumValue::Signed(i as i64)));
        }
    }

    #[test]
    fn test_override_resets_counter() {
        let decl = build("int", "// ENUM(A, B=5, C)");
        assert_eq!(numbers(&decl), vec!["0", "5", "6"]);
    }

    #[test]
    fn test_skip_placeholder_consumes_slot() {
        let decl = build("int", "// ENUM(_, A, B)");
        assert_eq!(decl.members.len(), 2);
        assert_eq!(decl.members[0].raw_name, "A");
        assert_eq!(numbers(&decl), vec!["1", "2"]);
    }

    #[test]
    fn test_binary_literal_on_signed() {
        let decl = build("int", "// ENUM(B6=0b110, B7)");
        assert_eq!(numbers(&decl), vec!["6", "7"]);
    }

    #[test]
    fn test_negative_literal_on_signed() {
        let decl = build("int8", "// ENUM(neg=-2, next, zero)");
        assert_eq!(numbers(&decl), vec!["-2", "-1", "0"]);
    }

    #[test]
    fn test_negative_literal_on_unsigned_is_fatal() {
        let result = build_declaration(
            &source("uint", "// ENUM(a, b=-1, c)"),
            &GeneratorConfig::default(),
        );
        match result {
            Err(Error::InvalidNumericLiteral {
                member,
                literal,
                source: cause,
                ..
            }) => {
                assert_eq!(member, "b");
                assert_eq!(literal, "-1");
                assert_eq!(cause, LiteralError::Sign);
            }
            other => panic!("expected InvalidNumericLiteral, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_signed_literal_is_fatal() {
        let result = build_declaration(
            &source("int", "// ENUM(a=12abc)"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(result, Err(Error::InvalidNumericLiteral { .. })));
    }

    #[test]
    fn test_unsigned_values() {
        let decl = build("uint64", "// ENUM(a=0xFFFFFFFFFFFFFFFE, b)");
        assert_eq!(
            decl.members[1].literal,
            Literal::Number(EnumValue::Unsigned(u64::MAX))
        );
    }

    #[test]
    fn test_counter_overflow_only_when_used() {
        let ok = build("uint64", "// ENUM(a=18446744073709551615)");
        assert_eq!(ok.members.len(), 1);

        let result = build_declaration(
            &source("uint64", "// ENUM(a=18446744073709551615, b)"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(result, Err(Error::CounterOverflow { member, .. }) if member == "b"));
    }

    #[test]
    fn test_empty_override_falls_back_to_counter() {
        let decl = build("int", "// ENUM(a, b=, c)");
        assert_eq!(decl.members[1].raw_name, "b");
        assert_eq!(numbers(&decl), vec!["0", "1", "2"]);
        assert_eq!(decl.diagnostics.len(), 1);
        assert_eq!(decl.diagnostics[0].code, "W001");
    }

    #[test]
    fn test_string_counter_saturates_instead_of_failing() {
        let decl = build("string", "// ENUM(a=9223372036854775807, b, c)");
        assert_eq!(decl.members.len(), 3);
        assert_eq!(decl.members[1].literal, Literal::Text("b".to_string()));
        assert_eq!(decl.members[2].ordinal, EnumValue::Signed(i64::MAX));
    }

    #[test]
    fn test_comment_only_line_attaches_to_next_member() {
        let comment = "// ENUM(\n//   // primary colors\n//   red,\n//   // cool\n//   blue, // sky\n//   _,\n// )";
        let decl = build("int", comment);
        assert_eq!(decl.members.len(), 2);
        assert_eq!(decl.members[0].comment.as_deref(), Some("primary colors"));
        assert_eq!(decl.members[1].comment.as_deref(), Some("cool\nsky"));
        assert_eq!(numbers(&decl), vec!["0", "1"]);
    }

    #[test]
    fn test_string_quoted_literal() {
        let decl = build("string", r#"// ENUM(athena="20", zeus)"#);
        assert_eq!(decl.members[0].literal, Literal::Text("20".to_string()));
        assert_eq!(decl.members[1].literal, Literal::Text("zeus".to_string()));
    }

    #[test]
    fn test_string_integer_override_resets_counter() {
        let decl = build("string", "// ENUM(athena=20, zeus)");
        assert_eq!(decl.members[0].literal, Literal::Text("athena".to_string()));
        assert_eq!(decl.members[0].ordinal, EnumValue::Signed(20));
        assert_eq!(decl.members[1].ordinal, EnumValue::Signed(21));
    }

    #[test]
    fn test_string_unquoted_text_override() {
        let decl = build("string", "// ENUM(apple=fruit, 'single'='x')");
        assert_eq!(decl.members[0].literal, Literal::Text("fruit".to_string()));
        assert_eq!(decl.members[1].literal, Literal::Text("x".to_string()));
    }

    #[test]
    fn test_forced_case_on_strings() {
        let config = GeneratorConfig {
            force_upper: true,
            ..Default::default()
        };
        let decl = build_declaration(&source("string", "// ENUM(mixedCase)"), &config)
            .unwrap()
            .unwrap();
        assert_eq!(decl.members[0].literal, Literal::Text("MIXEDCASE".to_string()));
        assert_eq!(decl.members[0].identifier, "ColorMixedCase");
    }

    #[test]
    fn test_names_and_identifiers() {
        let decl = build("int", "// ENUM(red-orange, light_blue, 2nd)");
        let names: Vec<_> = decl
            .members
            .iter()
            .map(|m| (m.display_name.as_str(), m.identifier.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Red-Orange", "ColorRedOrange"),
                ("Light_blue", "ColorLightBlue"),
                ("2nd", "Color2nd"),
            ]
        );
    }

    #[test]
    fn test_no_prefix_and_aliases() {
        let mut config = GeneratorConfig {
            no_prefix: true,
            ..Default::default()
        };
        config.aliases.insert("+", "Plus");

        let decl = build_declaration(&source("int", "// ENUM(+, 1)"), &config)
            .unwrap()
            .unwrap();
        assert_eq!(decl.prefix, "");
        assert_eq!(decl.members[0].identifier, "Plus");
        assert_eq!(decl.members[1].identifier, "X1");
    }

    #[test]
    fn test_inline_comment_round_trip() {
        let comment = "// Color is an enum.\n// ENUM(\n//   red-orange, // has a , in it\n//   blue // (cold)\n// )";
        let decl = build("int", comment);
        assert_eq!(decl.comment, "Color is an enum.");
        assert_eq!(decl.members.len(), 2);
        assert_eq!(decl.members[0].comment.as_deref(), Some("has a , in it"));
        assert_eq!(decl.members[1].comment.as_deref(), Some("(cold)"));
        assert_eq!(numbers(&decl), vec!["0", "1"]);
    }

    #[test]
    fn test_name_value_pairs() {
        let decl = build("string", "// ENUM(north, south=\"S\")");
        let pairs: Vec<_> = decl
            .pairs()
            .map(|(name, literal)| (name, literal.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![("north", "\"north\"".to_string()), ("south", "\"S\"".to_string())]
        );
        assert_eq!(
            decl.member("South").map(|m| m.identifier.as_str()),
            Some("ColorSouth")
        );
    }

    #[test]
    fn test_no_marker_is_not_an_enum() {
        let result = build_declaration(
            &source("int", "// Color is a plain int"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_dangling_paren_is_fatal() {
        let result = build_declaration(
            &source("int", "// ENUM(\n// a,\n// b"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::UnbalancedBlock { depth: 1, .. })
        ));
    }

    #[test]
    fn test_empty_block_has_no_members() {
        let decl = build("int", "// ENUM()");
        assert!(decl.members.is_empty());
    }

    #[test]
    fn test_trailing_separators_are_ignored() {
        let decl = build("int", "/* ENUM(\n  a,\n  b,\n  ,\n) */");
        assert_eq!(numbers(&decl), vec!["0", "1"]);
    }
}
