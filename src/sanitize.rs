//! @ai:module:intent Turn member names into legal generated identifiers
//! @ai:module:layer domain
//! @ai:module:public_api title_case, sanitize_identifier, camel_case, make_identifier
//! @ai:module:depends_on config, model
//! @ai:module:stateless true

use crate::config::{Aliases, GeneratorConfig};
use crate::model::SKIP_PLACEHOLDER;

/// Inserted when an identifier would not start with a letter.
const SYNTHETIC_LEADER: char = 'X';

/// @ai:intent Capitalize the first letter of every word, rest unchanged
/// @ai:example ("red-orange") -> "Red-Orange"
/// @ai:example ("one_two") -> "One_two"
/// @ai:example ("aBC") -> "ABC"
/// @ai:effects pure
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for c in raw.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_' || c == '\'');
    }

    out
}

/// @ai:intent Apply aliases, drop illegal characters, force a letter first
/// @ai:post result only holds letters, digits and '_' and starts with a letter (or is empty)
/// @ai:example ("Color+", {"+": "Plus"}) -> "ColorPlus"
/// @ai:example ("1st", {}) -> "X1st"
/// @ai:effects pure
pub fn sanitize_identifier(value: &str, aliases: &Aliases) -> String {
    if value == SKIP_PLACEHOLDER {
        return value.to_string();
    }

    let replaced = aliases.replace_all(value);
    let mut out = String::with_capacity(replaced.len() + 1);

    for (idx, c) in replaced.chars().enumerate() {
        if idx == 0 && !c.is_alphabetic() {
            out.push(SYNTHETIC_LEADER);
        }
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
        }
    }

    out
}

/// @ai:intent Convert snake_case to CamelCase
/// @ai:example ("Color_light_blue") -> "ColorLightBlue"
/// @ai:effects pure
pub fn camel_case(value: &str) -> String {
    if value == SKIP_PLACEHOLDER {
        return value.to_string();
    }

    value
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// @ai:intent Build the generated identifier for one member
/// @ai:pre display_name is already title-cased
/// @ai:effects pure
pub fn make_identifier(prefix: &str, display_name: &str, config: &GeneratorConfig) -> String {
    if display_name == SKIP_PLACEHOLDER {
        return display_name.to_string();
    }

    let sanitized = sanitize_identifier(&format!("{}{}", prefix, display_name), &config.aliases);
    if config.leave_snake_case {
        sanitized
    } else {
        camel_case(&sanitized)
    }
}
