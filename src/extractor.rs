//! @ai:module:intent Extract enum declarations from Go files and directories
//! @ai:module:layer application
//! @ai:module:public_api extract_source, extract_file, extract_directory, extract_path
//! @ai:module:depends_on parser, builder, model, config, error
//! @ai:module:stateless true

use crate::builder::build_declaration;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::model::{Diagnostic, Location, ParsedFile, ParsedProject};
use crate::parser::{is_supported_file, parse_file, parse_source, ParsedSource};
use std::path::Path;
use walkdir::WalkDir;

/// Suffix of files this tool's rendering step writes.
const GENERATED_SUFFIX: &str = "_enum.go";

/// @ai:intent Extract all enum declarations from a Go file
/// @ai:pre path exists and is a .go file
/// @ai:effects fs:read
pub fn extract_file(path: &Path, config: &GeneratorConfig) -> Result<ParsedFile> {
    let parsed = parse_file(path)?;
    Ok(extract_from_parsed(&parsed, path, config))
}

/// @ai:intent Extract all enum declarations from in-memory Go source
/// @ai:effects pure
pub fn extract_source(path: &Path, content: &str, config: &GeneratorConfig) -> ParsedFile {
    extract_from_parsed(&parse_source(content), path, config)
}

/// @ai:intent Build every candidate declaration, isolating failures per declaration
/// @ai:post a failing declaration never removes its siblings
/// @ai:effects pure
fn extract_from_parsed(parsed: &ParsedSource, path: &Path, config: &GeneratorConfig) -> ParsedFile {
    let mut file = ParsedFile {
        path: path.to_path_buf(),
        ..Default::default()
    };

    for source in parsed.declaration_sources() {
        let location = Location::new(path.to_path_buf(), source.line);

        match build_declaration(&source, config) {
            Ok(Some(mut declaration)) => {
                for diagnostic in declaration.diagnostics.iter_mut() {
                    diagnostic.location = Some(location.clone());
                }

                if declaration.members.is_empty() {
                    tracing::warn!(
                        "Skipping `{}` at {}:{}: ENUM declaration has no members",
                        source.name,
                        path.display(),
                        source.line
                    );
                    file.diagnostics.extend(declaration.diagnostics);
                    file.diagnostics.push(
                        Diagnostic::warning(
                            "W002",
                            format!("`{}` declares no enum members", source.name),
                        )
                        .at(location),
                    );
                    continue;
                }

                file.diagnostics.extend(declaration.diagnostics.iter().cloned());
                file.declarations.push(declaration);
            }
            Ok(None) => {
                tracing::debug!("`{}` has no ENUM declaration", source.name);
            }
            Err(e) => {
                tracing::warn!("Skipping `{}` at {}:{}: {}", source.name, path.display(), source.line, e);
                file.diagnostics
                    .push(Diagnostic::error(e.code(), e.to_string()).at(location));
            }
        }
    }

    file
}

/// @ai:intent Extract a single file or every Go file under a directory
/// @ai:pre path exists
/// @ai:effects fs:read
pub fn extract_path(path: &Path, config: &GeneratorConfig) -> Result<ParsedProject> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.is_file() {
        let mut project = ParsedProject::default();
        project.push(extract_file(path, config)?);
        Ok(project)
    } else {
        Ok(extract_directory(path, config))
    }
}

/// @ai:intent Extract declarations from all Go files under a directory
/// @ai:post files are visited in path order; unreadable files and directories become E000 diagnostics
/// @ai:effects fs:read
pub fn extract_directory(path: &Path, config: &GeneratorConfig) -> ParsedProject {
    let mut project = ParsedProject::default();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let failed_path = e.path().unwrap_or(path).to_path_buf();
                tracing::warn!("Failed to walk {}: {}", failed_path.display(), e);
                let error = Error::FileRead {
                    path: failed_path.clone(),
                    source: e.into(),
                };
                project.push(unreadable(&failed_path, &error));
                continue;
            }
        };

        let file_path = entry.path();

        if !entry.file_type().is_file() || !is_candidate_file(file_path) {
            continue;
        }

        match extract_file(file_path, config) {
            Ok(file) => project.push(file),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", file_path.display(), e);
                project.push(unreadable(file_path, &e));
            }
        }
    }

    project
}

/// @ai:intent Skip tests and previously generated output
/// @ai:effects pure
fn is_candidate_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    is_supported_file(path) && !name.ends_with("_test.go") && !name.ends_with(GENERATED_SUFFIX)
}

fn unreadable(path: &Path, error: &Error) -> ParsedFile {
    ParsedFile {
        path: path.to_path_buf(),
        declarations: Vec::new(),
        diagnostics: vec![Diagnostic::error(
            "E000",
            format!("Failed to read file: {}", error),
        )
        .at(Location::new(path.to_path_buf(), 0))],
    }
}
