//! frontgen CLI entrypoint
//! Parses command-line arguments and dispatches to the element generator.
#![deny(unsafe_code)]
mod application;
mod core;
mod generation;
mod infrastructure;

// Internal imports (std, crate)
use crate::application::{AddElementUseCase, describe_types};
use crate::core::{config::GeneratorConfig, templates::TemplateRegistry};
use crate::infrastructure::FileSystemOutputService;
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frontgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the front-end project
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Add a component, reducer or action to the project
    Add {
        /// Name of the element to add
        name: String,
        /// Type of element to add
        #[arg(short = 't', long = "type", default_value = "component")]
        element_type: String,
    },
    /// List the element types that can be added
    Types {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, command output to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Add { name, element_type } => {
            let config = GeneratorConfig::new(&cli.project_dir, element_type, name);
            add_element(&config).await?
        }
        Commands::Types { json } => list_types(*json)?,
    }
    Ok(())
}

/// Scaffold one element into the project
async fn add_element(config: &GeneratorConfig) -> anyhow::Result<()> {
    info!(
        element_type = %config.element_type,
        name = %config.element_name,
        "Adding element"
    );

    let use_case = AddElementUseCase::new(
        TemplateRegistry::global(),
        Arc::new(FileSystemOutputService::new()),
    );
    let response = use_case
        .execute(config)
        .await
        .with_context(|| format!("Failed to add {} '{}'", config.element_type, config.element_name))?;

    for path in &response.report.written {
        println!("created {}", path.display());
    }
    for failure in &response.report.failed {
        eprintln!("failed  {} ({})", failure.path.display(), failure.reason);
    }

    // Per-file failures do not change the exit status
    println!(
        "\n✅ {} '{}' added ({} of {} files written)",
        response.kind,
        response.real_name,
        response.report.written.len(),
        response.report.written.len() + response.report.failed.len()
    );
    Ok(())
}

/// Print every element type with its keys and file layout
fn list_types(json: bool) -> anyhow::Result<()> {
    let types = describe_types(TemplateRegistry::global());

    if json {
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    println!("Available element types:");
    for info in &types {
        println!("\n  {} ({})", info.kind, info.keys.join(", "));
        println!("    directory:  {}", info.root_dir);
        println!("    capitalize: {}", info.capitalize);
        for file in &info.files {
            println!("    - {}", file);
        }
    }
    Ok(())
}
