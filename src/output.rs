//! @ai:module:intent Format extraction results for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_parsed_file, format_project, format_diagnostics
//! @ai:module:depends_on model
//! @ai:module:stateless true

use crate::model::{Diagnostic, EnumDeclaration, ParsedFile, ParsedProject, Severity};
use colored::Colorize;
use serde::Serialize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a file's declarations as a string
/// @ai:effects pure
pub fn format_parsed_file(file: &ParsedFile, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_parsed_file_text(file),
        _ => to_json(file, format),
    }
}

/// @ai:intent Format a directory result as a string
/// @ai:effects pure
pub fn format_project(project: &ParsedProject, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output: String = project.files.iter().map(format_parsed_file_text).collect();
            output.push_str(&format_summary(project));
            output
        }
        _ => to_json(project, format),
    }
}

/// @ai:intent Format only the diagnostics of a directory result
/// @ai:effects pure
pub fn format_diagnostics(project: &ParsedProject, format: OutputFormat) -> String {
    let diagnostics: Vec<&Diagnostic> = project
        .files
        .iter()
        .flat_map(|f| f.diagnostics.iter())
        .collect();

    match format {
        OutputFormat::Text => {
            let mut output: String = diagnostics.iter().map(|d| format_diagnostic_text(d)).collect();
            output.push_str(&format_summary(project));
            output
        }
        _ => to_json(&diagnostics, format),
    }
}

fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::JsonPretty => serde_json::to_string_pretty(value).unwrap_or_default(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// @ai:intent Format a file's declarations as human-readable text
/// @ai:effects pure
fn format_parsed_file_text(file: &ParsedFile) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", file.path.display().to_string().bold()));

    for declaration in &file.declarations {
        output.push_str(&format_declaration_text(declaration));
    }

    for diagnostic in &file.diagnostics {
        output.push_str(&format_diagnostic_text(diagnostic));
    }

    output
}

fn format_declaration_text(declaration: &EnumDeclaration) -> String {
    let mut output = format!(
        "  {} {} ({} members)\n",
        declaration.name.cyan(),
        declaration.go_type.dimmed(),
        declaration.members.len()
    );

    if !declaration.comment.is_empty() {
        output.push_str(&format!("    {}\n", declaration.comment.replace('\n', " ")));
    }

    for member in &declaration.members {
        output.push_str(&format!("    {} = {}", member.identifier, member.literal));
        if let Some(comment) = &member.comment {
            output.push_str(&format!(" {}", format!("// {}", comment).dimmed()));
        }
        output.push('\n');
    }

    output
}

fn format_diagnostic_text(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "ERROR".red().bold(),
        Severity::Warning => "WARN".yellow().bold(),
    };

    let location = diagnostic
        .location
        .as_ref()
        .map(|l| format!("{}:{}", l.file.display(), l.line))
        .unwrap_or_default();

    format!(
        "{} {} - {} ({})\n",
        severity,
        location.dimmed(),
        diagnostic.message,
        diagnostic.code.dimmed()
    )
}

fn format_summary(project: &ParsedProject) -> String {
    let mut output = format!(
        "\nScanned {} files, {} enum declarations\n",
        project.files.len(),
        project.total_declarations
    );

    if project.failed_declarations > 0 {
        output.push_str(&format!(
            "{} declarations failed\n",
            project.failed_declarations.to_string().red().bold()
        ));
    } else {
        output.push_str(&format!("{} No failures\n", "OK".green().bold()));
    }

    output
}
