//! @ai:module:intent Per-run generator configuration and alias table
//! @ai:module:layer infrastructure
//! @ai:module:public_api GeneratorConfig, Aliases
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// @ai:intent Symbol to word substitutions applied while sanitizing identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aliases(BTreeMap<String, String>);

impl Aliases {
    /// @ai:intent Parse `key:value` entries, several per entry separated by commas
    /// @ai:example (["+:Plus,#:Sharp"]) -> {"+": "Plus", "#": "Sharp"}
    /// @ai:effects pure
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut map = BTreeMap::new();

        for entry in entries {
            for pair in entry.as_ref().split(',') {
                let pair = pair.trim();
                if pair.is_empty() {
                    continue;
                }
                match pair.split(':').collect::<Vec<_>>().as_slice() {
                    [key, value] if !key.is_empty() => {
                        map.insert(key.to_string(), value.to_string());
                    }
                    _ => return Err(Error::InvalidAlias(pair.to_string())),
                }
            }
        }

        Ok(Self(map))
    }

    /// @ai:intent Add or replace a single alias
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// @ai:intent Merge another table over this one
    pub fn extend(&mut self, other: Aliases) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// @ai:intent Replace every alias key occurring in text
    /// @ai:post scan is left-to-right, longest key wins at each position
    /// @ai:effects pure
    pub fn replace_all(&self, text: &str) -> String {
        if self.0.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            let hit = self
                .0
                .iter()
                .filter(|(key, _)| !key.is_empty() && rest.starts_with(key.as_str()))
                .max_by_key(|(key, _)| key.len());

            match hit {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }
}

/// @ai:intent Options read-only for the duration of a generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Do not prefix identifiers with the type name.
    pub no_prefix: bool,
    /// Prepended to the type-name prefix, or used alone with `no_prefix`.
    pub prefix: Option<String>,
    /// Keep snake_case identifiers as written.
    pub leave_snake_case: bool,
    pub force_lower: bool,
    pub force_upper: bool,
    pub aliases: Aliases,
}

impl GeneratorConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// @ai:intent Identifier prefix used for members of a type
    /// @ai:example (default, "Color") -> "Color"
    /// @ai:example (prefix "My", "Color") -> "MyColor"
    /// @ai:effects pure
    pub fn prefix_for(&self, type_name: &str) -> String {
        let base = if self.no_prefix { "" } else { type_name };
        match &self.prefix {
            Some(custom) => format!("{}{}", custom, base),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_aliases() {
        let aliases = Aliases::parse(&["+:Plus,#:Sharp", "-:Minus"]).unwrap();
        assert_eq!(aliases.replace_all("C#"), "CSharp");
        assert_eq!(aliases.replace_all("+-"), "PlusMinus");
    }

    #[test]
    fn test_parse_aliases_rejects_bad_entries() {
        assert!(matches!(
            Aliases::parse(&["nocolon"]),
            Err(Error::InvalidAlias(entry)) if entry == "nocolon"
        ));
        assert!(Aliases::parse(&["a:b:c"]).is_err());
        assert!(Aliases::parse(&[":Empty"]).is_err());
    }

    #[test]
    fn test_longest_alias_wins() {
        let mut aliases = Aliases::default();
        aliases.insert("+", "Plus");
        aliases.insert("++", "Increment");
        assert_eq!(aliases.replace_all("a+++"), "aIncrementPlus");
    }

    #[test]
    fn test_prefix_for() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.prefix_for("Color"), "Color");

        config.prefix = Some("My".to_string());
        assert_eq!(config.prefix_for("Color"), "MyColor");

        config.no_prefix = true;
        assert_eq!(config.prefix_for("Color"), "My");

        config.prefix = None;
        assert_eq!(config.prefix_for("Color"), "");
    }

    #[test]
    fn test_load_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"no_prefix = true
leave_snake_case = true

[aliases]
"+" = "Plus""#
        )
        .unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert!(config.no_prefix);
        assert!(config.leave_snake_case);
        assert!(!config.force_lower);
        assert_eq!(config.aliases.replace_all("+"), "Plus");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "no_prefix = \"maybe\"").unwrap();

        assert!(matches!(
            GeneratorConfig::load(file.path()),
            Err(Error::Config { .. })
        ));
    }
}
