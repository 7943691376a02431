use std::fs::read_to_string;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use serde_json::Value;

use k8_provider::ManifestProvider;
use k8_provider::ProviderConfig;

/// Render and import Kubernetes manifests of the supported resource kinds
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// provider configuration, defaults to $K8S_MANIFEST_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// list resource types
    List,
    /// print the attribute schema of a resource type as JSON
    Schema { type_name: String },
    /// render input attributes (YAML or JSON) into resource state
    Render {
        type_name: String,
        #[arg(long)]
        input: PathBuf,
        /// print the manifest only
        #[arg(long)]
        yaml_only: bool,
    },
    /// build resource state from an existing manifest
    Import {
        type_name: String,
        #[arg(long)]
        manifest: PathBuf,
    },
}

fn main() {
    fluvio_future::subscriber::init_tracer(None);

    if let Err(err) = run(Args::parse()) {
        eprintln!("{:#}", err);
        exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ProviderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ProviderConfig::load()?,
    };
    let provider = ManifestProvider::new(config)?;

    match args.command {
        Command::List => {
            for resource in provider.resources() {
                let metadata = resource.metadata();
                println!(
                    "{}\t{}\t{}",
                    metadata.type_name, metadata.api_version, metadata.kind
                );
            }
        }
        Command::Schema { type_name } => {
            let resource = provider.resource(&type_name)?;
            println!("{}", serde_json::to_string_pretty(&resource.schema())?);
        }
        Command::Render {
            type_name,
            input,
            yaml_only,
        } => {
            let resource = provider.resource(&type_name)?;
            let content = read_to_string(&input)
                .with_context(|| format!("reading input {}", input.display()))?;
            let input: Value = serde_yaml::from_str(&content).context("parsing input")?;
            if yaml_only {
                print!("{}", resource.render_yaml(&input)?);
            } else {
                let state = resource.create(&input)?;
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
        }
        Command::Import {
            type_name,
            manifest,
        } => {
            let resource = provider.resource(&type_name)?;
            let content = read_to_string(&manifest)
                .with_context(|| format!("reading manifest {}", manifest.display()))?;
            let state = resource.import(&content)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }
    Ok(())
}
