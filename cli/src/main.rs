//! hashparam CLI - Command Line Interface

use clap::{Parser, Subcommand};
use hashparam_cli::{format_map, format_value, init_logging, parse_pairs, parse_value};
use hashparam_codec::{create_link, decode, encode, fragment_path, strip_marker, type_cast};
use hashparam_core::HashParamConfig;
use hashparam_state::{create_memory_location, ParameterStore};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "hashparam")]
#[command(about = "hashparam - typed parameters in the URL fragment")]
#[command(version)]
struct Cli {
    /// Page URL the store operates on
    #[arg(short, long, global = true, default_value = "http://localhost/")]
    url: String,

    /// Configuration file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print parameters as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a fragment into parameters and path
    Decode {
        /// Fragment, with or without the leading '#'
        fragment: String,
    },

    /// Encode key=value pairs into a parameter string
    Encode {
        /// Pairs such as page=2 or tags=a,b
        pairs: Vec<String>,
    },

    /// Build a '#path/params' link
    Link {
        /// View path
        path: String,

        /// Pairs such as page=2 or tags=a,b
        pairs: Vec<String>,
    },

    /// Print one parameter of --url
    Get {
        key: String,
    },

    /// Print one parameter of --url as a sequence
    GetArray {
        key: String,
    },

    /// Print every parameter of --url
    List,

    /// Set one parameter and print the resulting URL
    Set {
        key: String,

        /// Value, cast like a fragment token
        value: String,
    },

    /// Set one parameter to a sequence and print the resulting URL
    SetArray {
        key: String,

        /// Sequence items, each cast like a fragment token
        values: Vec<String>,
    },

    /// Remove one parameter and print the resulting URL
    Remove {
        key: String,
    },

    /// Merge key=value pairs into the parameters and print the resulting URL
    Update {
        pairs: Vec<String>,
    },

    /// Remove every parameter and print the resulting URL
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HashParamConfig::load(path)?,
        None => HashParamConfig::default(),
    };
    init_logging(&config.log_level);

    let location = create_memory_location(&cli.url)?;
    let store = ParameterStore::with_config(location.clone(), config.sync.clone());
    debug!("Operating on {}", location.href());

    match cli.command {
        Commands::Decode { fragment } => {
            let fragment = strip_marker(&fragment);
            let params = decode(fragment);
            if cli.json {
                println!("{}", format_map(&params, true)?);
            } else {
                println!("Path:       {}", fragment_path(fragment).join("/"));
                println!("Parameters: {}", params.len());
                if !params.is_empty() {
                    println!("{}", format_map(&params, false)?);
                }
            }
        }

        Commands::Encode { pairs } => {
            let params = parse_pairs(&pairs)?;
            println!("{}", encode(&params));
        }

        Commands::Link { path, pairs } => {
            let params = parse_pairs(&pairs)?;
            println!("{}", create_link(&path, &params));
        }

        Commands::Get { key } => match store.get(&key) {
            Some(value) => println!("{}", format_value(&value)?),
            None => {
                eprintln!("Error: parameter '{}' not found", key);
                std::process::exit(1);
            }
        },

        Commands::GetArray { key } => match store.get_array(&key) {
            Some(items) => println!("{}", serde_json::to_string(&items)?),
            None => {
                eprintln!("Error: parameter '{}' not found", key);
                std::process::exit(1);
            }
        },

        Commands::List => {
            println!("{}", format_map(&store.get_all(), cli.json)?);
        }

        Commands::Set { key, value } => {
            store.set(&key, parse_value(&value));
            println!("{}", location.href());
        }

        Commands::SetArray { key, values } => {
            let items: Vec<_> = values.iter().map(|v| type_cast(v)).collect();
            store.set_array(&key, items)?;
            println!("{}", location.href());
        }

        Commands::Remove { key } => {
            if store.remove(&key).is_none() {
                eprintln!("Parameter '{}' was not set", key);
            }
            println!("{}", location.href());
        }

        Commands::Update { pairs } => {
            let changes = parse_pairs(&pairs)?;
            store.update(&changes);
            println!("{}", location.href());
        }

        Commands::Clear => {
            store.clear();
            println!("{}", location.href());
        }
    }

    Ok(())
}
