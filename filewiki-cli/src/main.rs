//! FileWiki CLI - Browse the extension catalog
//!
//! Usage:
//!   filewiki list [--category <cat>] [--search <text>] [--long] [--json]
//!   filewiki show <ext> [--json]
//!   filewiki categories
//!   filewiki ask <question> [--ext <ext> | --context <text>]   (requires assist feature)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filewiki_core::{Catalog, CategoryFilter, ExtensionRecord, QueryState, CATALOG_VERSION};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "filewiki")]
#[command(about = "FileWiki - Reference catalog of file extensions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries, optionally filtered
    List {
        /// Category id (image, audio, ..., game) or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive text matched against extension, name and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show the short description under each entry
        #[arg(short, long)]
        long: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the full detail view of one extension
    Show {
        /// Extension, with or without the leading dot
        extension: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories with their record counts
    Categories,

    /// Ask the AI assistant a question about file formats
    #[cfg(feature = "assist")]
    Ask {
        /// The question
        question: String,

        /// Use a catalog entry as context
        #[arg(long, conflicts_with = "context")]
        ext: Option<String>,

        /// Free-text context
        #[arg(long)]
        context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::List { category, search, long, json } => {
            list_records(catalog, QueryState::new(category, search), long, json)
        }
        Commands::Show { extension, json } => show_record(catalog, &extension, json),
        Commands::Categories => {
            show_categories(catalog);
            Ok(())
        }
        #[cfg(feature = "assist")]
        Commands::Ask { question, ext, context } => {
            ask(catalog, &question, ext.as_deref(), context.as_deref()).await
        }
    }
}

fn list_records(catalog: &Catalog, state: QueryState, long: bool, json: bool) -> Result<()> {
    let results = state.apply(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{:<40} {:>2}", state.category.label().to_uppercase(), format!("{:02}", results.len()));
    println!("{}", "-".repeat(80));

    if results.is_empty() {
        println!("Объекты не найдены в секторе");
        return Ok(());
    }

    println!("{:<8} {:<36} {:<18} {:>5}", "EXT", "NAME", "CATEGORY", "POP");
    for record in results {
        println!(
            "{:<8} {:<36} {:<18} {:>5}",
            record.extension,
            truncate(record.display_name, 36),
            record.category.label(),
            record.popularity_score
        );
        if long {
            println!("         {}", record.short_description);
        }
    }

    Ok(())
}

fn show_record(catalog: &Catalog, extension: &str, json: bool) -> Result<()> {
    let record = catalog
        .get(extension)
        .with_context(|| format!("Unknown extension: {}", extension))?;

    if json {
        let value = serde_json::json!({
            "record": record,
            "stats": record.detail_stats(),
            "accent": record.category.accent(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_detail(record);
    Ok(())
}

fn print_detail(record: &ExtensionRecord) {
    let accent = record.category.accent();

    println!("{}  [{}]", record.extension, record.category.label().to_uppercase());
    println!("{}", record.display_name);
    println!("{}", "=".repeat(60));
    println!();
    println!("{}", record.short_description);
    println!();
    println!("{}", record.long_description);
    println!();

    print_list("Платформы", record.platform_compatibility);
    print_list("Технологии", record.associated_technologies);
    print_list("Преимущества", record.strengths);
    print_list("Недостатки", record.weaknesses);

    println!("Статистика ({} {}):", accent.name(), accent.hex());
    for (label, value) in record.detail_stats().rows() {
        println!("  {:<14} {:>3} {}", label, value, bar(value));
    }
}

fn print_list(title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
    println!();
}

/// 20-cell bar for a 0..=100 value
fn bar(value: u8) -> String {
    let filled = usize::from(value.min(100)) / 5;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", cut)
    }
}

fn show_categories(catalog: &Catalog) {
    println!("FileWiki catalog v{} ({} entries)", CATALOG_VERSION, catalog.len());
    println!();
    println!("{:<12} {:<18} {:<9} {:>5}", "ID", "LABEL", "ACCENT", "COUNT");
    for (category, count) in catalog.category_counts() {
        println!(
            "{:<12} {:<18} {:<9} {:>5}",
            category.id(),
            category.label(),
            category.accent().name(),
            count
        );
    }
}

#[cfg(feature = "assist")]
async fn ask(
    catalog: &Catalog,
    question: &str,
    ext: Option<&str>,
    context: Option<&str>,
) -> Result<()> {
    use filewiki_core::assist::record_context;
    use filewiki_core::AssistClient;

    let context = match ext {
        Some(ext) => {
            let record = catalog
                .get(ext)
                .with_context(|| format!("Unknown extension: {}", ext))?;
            Some(record_context(record))
        }
        None => context.map(str::to_string),
    };

    let client = AssistClient::from_env();
    let answer = client.ask(question, context.as_deref()).await;
    println!("{}", answer);

    Ok(())
}
