use clap::{Parser, Subcommand};
use recipes_cli::{open_book, RecipeFields};
use std::path::PathBuf;

mod commands;

use commands::{cmd_add, cmd_delete, cmd_edit, cmd_export, cmd_list, cmd_search, cmd_show};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(version, about = "Ocean Recipes - cook, curate, and create", long_about = None)]
struct Cli {
    /// Config file (defaults to $RECIPES_CONFIG, ./recipes.yml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the recipe store (overrides the config file)
    #[arg(long, global = true, value_name = "DIR", env = "RECIPES_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// Log config and storage activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recipes, newest first
    List,

    /// Find recipes by name, description, ingredient, step or tag
    Search {
        /// Text to look for (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Show a recipe in full
    Show {
        /// Recipe id or unique id prefix
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Create a recipe
    Add {
        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Change fields of a recipe; fields not given are kept
    Edit {
        /// Recipe id or unique id prefix
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id or unique id prefix
        #[arg(value_name = "ID")]
        id: String,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// Write the collection as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = open_book(cli.config.as_deref(), cli.store_dir).and_then(|mut book| {
        match cli.command {
            Commands::List => cmd_list(&book),
            Commands::Search { query } => cmd_search(&mut book, query),
            Commands::Show { id } => cmd_show(&mut book, &id),
            Commands::Add { fields } => cmd_add(&mut book, fields),
            Commands::Edit { id, fields } => cmd_edit(&mut book, &id, fields),
            Commands::Delete { id, yes } => cmd_delete(&mut book, &id, yes),
            Commands::Export { out } => cmd_export(&book, out),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
