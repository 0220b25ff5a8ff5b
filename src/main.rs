//! @ai:module:intent CLI entry point for enumgen
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on extractor, output, config

use clap::{Args, Parser, Subcommand, ValueEnum};
use enumgen::{extract_path, output, Aliases, GeneratorConfig, OutputFormat, ParsedProject};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enumgen")]
#[command(author, version, about = "Extract ENUM(...) declarations from Go doc comments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the enum value model of a file or directory
    Extract {
        /// Path to a Go file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "json-pretty")]
        format: Format,

        #[command(flatten)]
        options: GeneratorArgs,
    },

    /// Report declarations that fail to parse
    Check {
        /// Path to a Go file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,

        #[command(flatten)]
        options: GeneratorArgs,
    },
}

#[derive(Args)]
struct GeneratorArgs {
    /// TOML file with generator options
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Do not prefix identifiers with the type name
    #[arg(long)]
    noprefix: bool,

    /// Prefix prepended to every generated identifier
    #[arg(long)]
    prefix: Option<String>,

    /// Keep snake_case identifiers instead of converting to CamelCase
    #[arg(long)]
    nocamel: bool,

    /// Symbol substitution in the form key:value (repeatable, comma-separated)
    #[arg(long = "alias", short = 'a')]
    aliases: Vec<String>,

    /// Lowercase string enum values
    #[arg(long)]
    forcelower: bool,

    /// Uppercase string enum values
    #[arg(long)]
    forceupper: bool,
}

impl GeneratorArgs {
    /// @ai:intent Load the config file (if any) and overlay command line flags
    /// @ai:effects fs:read
    fn resolve(self) -> enumgen::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        config.no_prefix |= self.noprefix;
        config.leave_snake_case |= self.nocamel;
        config.force_lower |= self.forcelower;
        config.force_upper |= self.forceupper;
        if self.prefix.is_some() {
            config.prefix = self.prefix;
        }
        config.aliases.extend(Aliases::parse(self.aliases.as_slice())?);

        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enumgen=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            path,
            format,
            options,
        } => match scan(&path, options) {
            Ok(project) => {
                println!("{}", output::format_project(&project, format.into()));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Check {
            path,
            format,
            options,
        } => match scan(&path, options) {
            Ok(project) => {
                println!("{}", output::format_diagnostics(&project, format.into()));

                if project.passed() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

/// @ai:intent Extract a single file or a whole directory
/// @ai:effects fs:read
fn scan(path: &Path, options: GeneratorArgs) -> enumgen::Result<ParsedProject> {
    let config = options.resolve()?;
    extract_path(path, &config)
}
