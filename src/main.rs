use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use card_catalog::catalog::{load_decklist, read_catalog_file};
use card_catalog::session::{self, Console, Session, CATALOG_PROMPT, DEFAULT_DISPLAY_LIMIT};
use card_catalog::{CardCollection, Category};

#[derive(Parser)]
#[command(name = "card-catalog")]
#[command(about = "Browse, search and price-check a trading card catalog", long_about = None)]
struct Cli {
    /// Catalog CSV file (prompted for when omitted in interactive mode)
    #[arg(short, long, env = "CARD_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Maximum rows shown when listing the whole catalog
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT, global = true)]
    display_limit: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Interactive,

    /// List the catalog with price statistics
    List,

    /// Search one field of every card for a substring
    Search {
        /// Text to look for (case-sensitive)
        #[arg(short, long)]
        query: String,

        /// One of: id, name, type, desc, race, archetype, "card price"
        #[arg(short = 'k', long)]
        category: String,
    },

    /// Price a decklist file (one card id per line)
    Deck {
        /// Decklist file
        decklist: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            interactive(cli.catalog, cli.display_limit)?;
        }
        Commands::List => {
            let catalog = load_catalog(cli.catalog)?;
            session::write_catalog_listing(&mut io::stdout().lock(), &catalog, cli.display_limit)?;
        }
        Commands::Search { query, category } => {
            let catalog = load_catalog(cli.catalog)?;
            let category: Category = category.parse()?;
            let results = catalog.search(&query, category);
            session::write_search_results(&mut io::stdout().lock(), &results, &query, category)?;
        }
        Commands::Deck { decklist } => {
            let catalog = load_catalog(cli.catalog)?;
            let deck = load_decklist(&decklist, &catalog)
                .with_context(|| format!("Failed to read decklist {}", decklist.display()))?;
            session::write_decklist(&mut io::stdout().lock(), &deck)?;
        }
    }

    Ok(())
}

fn interactive(catalog: Option<PathBuf>, display_limit: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let catalog = match catalog {
        Some(path) => read_catalog_file(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => console
            .prompt_file(CATALOG_PROMPT, read_catalog_file)
            .context("Failed to load catalog")?,
    };

    Session::new(catalog, console)
        .with_display_limit(display_limit)
        .run()?;
    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<CardCollection> {
    let path = path.context("A catalog file is required: pass --catalog or set CARD_CATALOG")?;
    read_catalog_file(&path).with_context(|| format!("Failed to load catalog {}", path.display()))
}
