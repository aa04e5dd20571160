//! `solid-profile` — resolve, inspect, and write Solid profile documents.
//!
//! **Usage:**
//! ```text
//! solid-profile resolve --dataset card.nt --web-id <iri> [--json]
//! solid-profile show    --dataset card.nt [--format turtle|json|ntriples]
//! solid-profile write   --root pods/ --pod-url <iri>
//! solid-profile vocab
//! ```
//!
//! Exits non-zero on IO or parse failure; profile resolution itself
//! never fails and prints a default-laden record for unknown WebIDs.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use solid_graph::{parse_ntriples, to_json, to_ntriples, to_turtle, Dataset};
use solid_pod::{AppState, FilePod};
use solid_profile_resolver::{resolve_profile, ProfileRecord};

/// Resolve and write Solid profile documents from the command line.
#[derive(Parser)]
#[command(
    name = "solid-profile",
    about = "Resolve and write Solid profile documents"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a flat profile record from an N-Triples WebID document.
    Resolve {
        /// Path to the N-Triples document.
        #[arg(long)]
        dataset: PathBuf,
        /// WebID of the profile owner.
        #[arg(long)]
        web_id: String,
        /// Print the record as JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },
    /// Re-serialize an N-Triples document.
    Show {
        /// Path to the N-Triples document.
        #[arg(long)]
        dataset: PathBuf,
        /// Output serialization.
        #[arg(long, value_enum, default_value = "turtle")]
        format: Format,
    },
    /// Write the example entity into a pod document under a local root.
    Write {
        /// Directory holding the file-backed pod.
        #[arg(long)]
        root: PathBuf,
        /// URL of the pod document to write.
        #[arg(long)]
        pod_url: String,
    },
    /// List the vCard terms the resolver consumes.
    Vocab,
}

/// Output serialization for `show`.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Turtle with vcard-prefixed predicates.
    Turtle,
    /// JSON-LD-shaped JSON.
    Json,
    /// N-Triples, as stored.
    Ntriples,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Resolve { dataset, web_id, json } => {
            let dataset = load_dataset(&dataset)?;
            let record = resolve_profile(&dataset, &web_id);
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&web_id, &record);
            }
        }
        Command::Show { dataset, format } => {
            let dataset = load_dataset(&dataset)?;
            match format {
                Format::Turtle => print!("{}", to_turtle(&dataset)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&to_json(&dataset))?),
                Format::Ntriples => print!("{}", to_ntriples(&dataset)),
            }
        }
        Command::Write { root, pod_url } => {
            let pod = FilePod::new(root);
            let mut app = AppState::new();
            app.pod_url = Some(pod_url.clone());
            app.write_pod(&pod)
                .with_context(|| format!("Failed to write pod document {pod_url}"))?;
            println!("Wrote {pod_url} to {}", pod.document_path(&pod_url).display());
        }
        Command::Vocab => print_vocab(),
    }

    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_ntriples(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_vocab() {
    let module = solid_vocab::vcard::module();
    println!("{} <{}>", module.namespace.label, module.namespace.iri);
    println!();
    for prop in &module.properties {
        let kind = match prop.kind {
            solid_vocab::PropertyKind::Datatype => "datatype",
            solid_vocab::PropertyKind::Object => "object  ",
        };
        println!(
            "  [{kind}] {}:{}  —  {}",
            module.namespace.prefix, prop.label, prop.comment
        );
    }
}

fn print_record(web_id: &str, record: &ProfileRecord) {
    println!("Profile for {web_id}");
    println!("=============={}", "=".repeat(web_id.len()));
    println!("Name:          {}", record.name);
    println!("Role:          {}", record.role);
    println!("Organization:  {}", record.organization);
    println!("Note:          {}", record.note);
    println!("Street:        {}", record.address.street);
    println!("Postal code:   {}", record.address.postal_code);
    println!("Country:       {}", record.address.country);
    println!("Phone:         {}", record.phone);
}
