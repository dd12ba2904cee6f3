//! Command-line identifier generator for itty-id.
//!
//! Generates the same identifiers as the HTTP service without running it,
//! and inspects the route catalog.
//!
//! # Usage
//!
//! ```bash
//! # List documented routes
//! cargo run --bin idgen -- routes
//!
//! # Print the help payload the service returns for a path
//! cargo run --bin idgen -- help /alpha/8
//!
//! # Generate identifiers
//! cargo run --bin idgen -- hash 12
//! cargo run --bin idgen -- hash --set uppercase-numeric 8
//! cargo run --bin idgen -- hash --from abc123 4
//! cargo run --bin idgen -- uuid v7
//! cargo run --bin idgen -- uuid-v5 example.com url
//! cargo run --bin idgen -- nanoid
//! cargo run --bin idgen -- typeid user
//! ```
//!
//! # Environment Variables
//!
//! - `DEFAULT_LENGTH` (optional): hash length when none is given (default: 10)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use itty_id::api::dto::help::{SERVICE_NAME, USAGE};
use itty_id::api::middleware::help;
use itty_id::catalog::{RouteCatalog, RouteExample};
use itty_id::config;
use itty_id::generator::{self, Charset, UuidVersion, nanoid, typeid, uuids};

/// Random identifier generator.
#[derive(Parser)]
#[command(name = "idgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List documented routes
    Routes,

    /// Print the help payload for a request path
    Help {
        /// Request path, e.g. /alpha/8
        #[arg(default_value = "/")]
        path: String,
    },

    /// Generate a random hash
    Hash {
        /// Hash length
        length: Option<String>,

        /// Named character set (alpha, numeric, uppercase, lowercase,
        /// uppercase-numeric, lowercase-numeric, alpha-symbols, only-symbols)
        #[arg(short, long, default_value = "alpha-numeric", conflicts_with = "from")]
        set: String,

        /// Custom character set
        #[arg(short, long)]
        from: Option<String>,
    },

    /// Generate a UUID (v4, v6 or v7)
    Uuid {
        #[arg(default_value = "v4")]
        version: String,
    },

    /// Generate a name-based UUID v5
    UuidV5 {
        value: String,
        /// dns, url, oid, x500 or a UUID
        namespace: Option<String>,
    },

    /// Generate a nanoid
    Nanoid,

    /// Generate a typeid
    Typeid { prefix: Option<String> },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Routes => {
            let catalog = RouteCatalog::builtin(config.default_length)?;
            list_routes(&catalog);
        }
        Commands::Help { path } => {
            let catalog = RouteCatalog::builtin(config.default_length)?;
            let payload = help::respond(&catalog, &path, config.default_length);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Commands::Hash { length, set, from } => {
            let length = itty_id::api::length::resolve(
                length.as_deref(),
                None,
                config.default_length,
            )
            .min(config.max_length) as usize;

            let hash = match from {
                Some(characters) => generator::generate_from(length, &characters),
                None => {
                    let charset = Charset::by_name(&set)
                        .with_context(|| format!("Unknown character set '{set}'"))?;
                    generator::generate_hash(length, &charset)
                }
            };
            println!("{hash}");
        }
        Commands::Uuid { version } => {
            let version: UuidVersion = version.parse()?;
            println!("{}", uuids::generate(version));
        }
        Commands::UuidV5 { value, namespace } => {
            println!("{}", uuids::generate_v5(&value, namespace.as_deref())?);
        }
        Commands::Nanoid => println!("{}", nanoid::generate()),
        Commands::Typeid { prefix } => println!("{}", typeid::generate(prefix.as_deref())?),
    }

    Ok(())
}

fn list_routes(catalog: &RouteCatalog) {
    println!("{}", SERVICE_NAME.bold());
    println!("{}", USAGE.dimmed());
    println!();

    for route in catalog.routes() {
        println!("{}", route.path.as_str().green().bold());
        println!("  {}", route.description);

        for (name, doc) in &route.parameters {
            println!("  {} {}", format!("{name}:").cyan(), doc);
        }

        match &route.example {
            Some(RouteExample::Request { path, response }) => {
                println!("  {} {} → {}", "e.g.".dimmed(), path.yellow(), response);
            }
            Some(RouteExample::Response(response)) => {
                println!("  {} {}", "e.g.".dimmed(), response);
            }
            None => {}
        }
        println!();
    }

    println!("Total: {} routes", catalog.len().to_string().yellow());
}
