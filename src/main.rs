//! Librarian CLI - lend books from a local collection
//!
//! Usage: librarian [OPTIONS] <COMMAND>
//!
//! Commands:
//!   add     Add a book to the collection
//!   get     Show one book
//!   borrow  Lend a book to someone
//!   return  Take a lent book back
//!   list    Show every book
//!   demo    Walk through a lending scenario in memory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use librarian::config::{Config, EventSink, StoreBackend};
use librarian::infrastructure::InMemoryBookRepository;
use librarian::presentation::factory::{create_collection, create_collection_with, create_dispatcher};
use librarian::presentation::output::{render_record, render_records, OutputFormat};
use librarian::{Book, BookError, BookId, Borrower};

/// Librarian - lend books from a local collection
#[derive(Parser, Debug)]
#[command(name = "librarian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Store file (implies the TOML backend)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Where events go
    #[arg(long, global = true, value_parser = parse_sink)]
    events: Option<EventSink>,

    /// Config file to load instead of the usual lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book to the collection
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Book ISBN
        #[arg(long)]
        isbn: String,
    },

    /// Show one book
    Get {
        /// Book ID
        id: String,
    },

    /// Lend a book to someone
    Borrow {
        /// Book ID
        id: String,

        /// Borrower name
        #[arg(long = "by")]
        by: String,
    },

    /// Take a lent book back
    Return {
        /// Book ID
        id: String,
    },

    /// Show every book
    List,

    /// Walk through a lending scenario in memory
    Demo,
}

fn parse_sink(value: &str) -> Result<EventSink, String> {
    value.parse()
}

fn main() {
    let cli = Cli::parse();
    librarian::logging::init(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        if json {
            let output = serde_json::json!({
                "event": "error",
                "message": format!("{:#}", err),
            });
            println!("{}", output);
        } else {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let format = OutputFormat::from_flag(cli.json);

    match cli.command {
        Commands::Add { title, isbn } => cmd_add(&config, &title, &isbn, format),
        Commands::Get { id } => cmd_get(&config, &id, format),
        Commands::Borrow { id, by } => cmd_borrow(&config, &id, &by, format),
        Commands::Return { id } => cmd_return(&config, &id, format),
        Commands::List => cmd_list(&config, format),
        Commands::Demo => cmd_demo(&config, format),
    }
}

/// Resolve configuration, then let CLI flags win over everything else
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in warnings {
                tracing::warn!("{}", warning);
            }
            librarian::config::with_env_overrides(config)
        }
        None => Config::load_or_default(Some(Path::new("."))),
    };

    if let Some(store) = &cli.store {
        config.store.backend = StoreBackend::Toml;
        config.store.path = Some(store.clone());
    }
    if let Some(sink) = cli.events {
        config.events.sink = sink;
    }

    Ok(config)
}

fn parse_id(raw: &str) -> Result<BookId> {
    Ok(raw.parse::<BookId>()?)
}

fn cmd_add(config: &Config, title: &str, isbn: &str, format: OutputFormat) -> Result<()> {
    let collection = create_collection(config);
    let record = collection.add_book(Book::new(title, isbn)?)?;
    println!("{}", render_record(&record, format));
    Ok(())
}

fn cmd_get(config: &Config, id: &str, format: OutputFormat) -> Result<()> {
    let collection = create_collection(config);
    let record = collection.get_book(parse_id(id)?)?;
    println!("{}", render_record(&record, format));
    Ok(())
}

fn cmd_borrow(config: &Config, id: &str, by: &str, format: OutputFormat) -> Result<()> {
    let collection = create_collection(config);
    let record = collection.borrow_book(parse_id(id)?, Borrower::new(by)?)?;
    println!("{}", render_record(&record, format));
    Ok(())
}

fn cmd_return(config: &Config, id: &str, format: OutputFormat) -> Result<()> {
    let collection = create_collection(config);
    let record = collection.return_book(parse_id(id)?)?;
    println!("{}", render_record(&record, format));
    Ok(())
}

fn cmd_list(config: &Config, format: OutputFormat) -> Result<()> {
    let collection = create_collection(config);
    let records = collection.get_all_books()?;
    println!("{}", render_records(&records, format));
    Ok(())
}

/// Add a book, lend it to Bob, refuse it to Amy, take it back
fn cmd_demo(config: &Config, format: OutputFormat) -> Result<()> {
    let collection = create_collection_with(
        Arc::new(InMemoryBookRepository::new()),
        create_dispatcher(config.events.sink),
        config.ids.max_attempts,
    );
    let text = format == OutputFormat::Text;

    let record = collection.add_book(Book::new("The Martian", "978-0553418026")?)?;
    if text {
        println!("added:    {}", render_record(&record, format));
    } else {
        println!("{}", render_record(&record, format));
    }

    let record = collection.borrow_book(record.id(), Borrower::new("Bob")?)?;
    if text {
        println!("borrowed: {}", render_record(&record, format));
    } else {
        println!("{}", render_record(&record, format));
    }

    match collection.borrow_book(record.id(), Borrower::new("Amy")?) {
        Err(err @ BookError::AlreadyBorrowed { .. }) => {
            if text {
                println!("refused:  {}", err);
            }
        }
        Ok(_) => anyhow::bail!("book {} was lent twice", record.id()),
        Err(err) => return Err(err.into()),
    }

    let record = collection.return_book(record.id())?;
    if text {
        println!("returned: {}", render_record(&record, format));
    } else {
        println!("{}", render_record(&record, format));
    }

    Ok(())
}
