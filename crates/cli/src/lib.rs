pub mod descriptor;
mod imports;
mod parse_type;
pub mod render;
mod schema;

use clap::{Parser, Subcommand};
use immutagen_api::ModelError;
use immutagen_runtime::GeneratorConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "immutagen",
    version,
    about = "Render immutable Java value classes from JSON class descriptors",
    long_about = "immutagen turns a JSON description of a class (fields, constructors, methods, \
                  interfaces and annotations) into Java source with a resolved, deduplicated \
                  and sorted import block."
)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a class descriptor to Java source
    #[command(
        long_about = "Builds the class described by DESCRIPTOR and renders it. The source is \
                      written to <DIR>/<package path>/<Name>.java when an output directory is \
                      configured, and printed to stdout otherwise."
    )]
    Render {
        /// Path to the JSON class descriptor
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: PathBuf,
        /// Output directory (overrides the configured one)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Print the import statements a class descriptor needs
    Imports {
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: PathBuf,
    },
    /// Parse a type signature such as java.util.Map$Entry<K, V>
    ParseType {
        #[arg(value_name = "SIGNATURE")]
        signature: String,
        /// Print the parsed components as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON Schema of the class descriptor format
    Schema,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;

    let component = match &cli.command {
        Commands::Render { .. } => "render",
        Commands::Imports { .. } => "imports",
        Commands::ParseType { .. } => "parse-type",
        Commands::Schema => "schema",
    };
    let _guard = immutagen_runtime::init_logging(
        component,
        &config.resolved_log_dir(),
        &config.log_filter,
        cli.verbose,
    )?;

    match cli.command {
        Commands::Render { descriptor, out } => {
            if out.is_some() {
                config.output_dir = out;
            }
            render::run(&descriptor, &config)
        }
        Commands::Imports { descriptor } => imports::run(&descriptor, &config),
        Commands::ParseType { signature, json } => parse_type::run(&signature, json),
        Commands::Schema => schema::run(),
    }
}

/// One-line report of a failed run. Model errors anywhere in the chain are
/// tagged with their kind, e.g. `error[malformed-type-signature]: ...`.
pub fn error_report(err: &anyhow::Error) -> String {
    match err.chain().find_map(|cause| cause.downcast_ref::<ModelError>()) {
        Some(model) => format!("error[{}]: {:#}", model.kind(), err),
        None => format!("error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_report_tags_model_errors() {
        let err = Err::<(), _>(ModelError::MalformedTypeSignature("1x".to_string()))
            .context("field 'x'")
            .unwrap_err();
        assert_eq!(
            error_report(&err),
            "error[malformed-type-signature]: field 'x': Malformed type signature: 1x"
        );
    }

    #[test]
    fn test_error_report_plain() {
        let err = anyhow::anyhow!("descriptor not found");
        assert_eq!(error_report(&err), "error: descriptor not found");
    }
}
