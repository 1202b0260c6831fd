use anyhow::Result;
use clap::Parser;
use estate_search::models::PropertyRecord;
use estate_search::query::{self, format, QueryParameters, SortBy, ViewMode, PAGE_SIZE};
use estate_search::source::{sample_listings, FixtureSource, ListingSource, RestSource};
use std::path::PathBuf;
use tracing::{info, Level};

/// Search a property listing collection from the command line.
#[derive(Parser)]
#[command(name = "estate-search")]
struct Cli {
    /// URL query string, e.g. "q=villa&purpose=buy&price=50000-100000"
    query: Option<String>,

    /// Hosted store base URL; falls back to built-in sample listings
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Store api key, used with --url
    #[arg(long, requires = "url")]
    api_key: Option<String>,

    /// Local JSON file holding an array of listings
    #[arg(long)]
    file: Option<PathBuf>,

    /// Result ordering: newest, oldest, price-high, price-low, alphabetical
    #[arg(long, default_value = "newest")]
    sort: String,

    /// Render results as a flat list instead of cards
    #[arg(long)]
    list: bool,

    /// Zero-based result page
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Write the matching listings to this JSON file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("🏠 Estate Search");
    info!("================");

    let records = fetch_records(&cli).await?;
    info!("Collection holds {} listings", records.len());

    let mut params = QueryParameters::parse(cli.query.as_deref().unwrap_or(""));
    // Sort and view mode are session-local, so they come from flags rather
    // than the query string.
    params.sort_by = match SortBy::from_token(&cli.sort) {
        Some(sort) => sort,
        None => anyhow::bail!(
            "Unknown sort '{}' (expected newest, oldest, price-high, price-low or alphabetical)",
            cli.sort
        ),
    };
    if cli.list {
        params.view_mode = ViewMode::List;
    }

    let chips = params.active_filters();
    if !chips.is_empty() {
        println!("Active filters:");
        for chip in &chips {
            println!("  [{}]", chip.label);
        }
        println!();
    }

    let results = query::search(&records, &params);
    let label = if results.len() == 1 {
        "property"
    } else {
        "properties"
    };
    println!("{} {} found", results.len(), label);
    println!("Share: {}", params.share_url());
    println!();

    if results.is_empty() {
        println!("No properties found. Try adjusting your search or filter criteria.");
        return Ok(());
    }

    let pages = query::page_count(results.len(), PAGE_SIZE);
    let page = query::page(&results, cli.page, PAGE_SIZE);
    if pages > 1 {
        println!("Page {} of {}", cli.page + 1, pages);
        println!();
    }

    for (i, listing) in page.iter().copied().enumerate() {
        let index = cli.page * PAGE_SIZE + i + 1;
        match params.view_mode {
            ViewMode::Grid => print_card(index, listing),
            ViewMode::List => print_row(index, listing),
        }
    }

    if let Some(out) = &cli.out {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(out, json).await?;
        info!("💾 Saved {} listings to {}", results.len(), out.display());
    }

    Ok(())
}

async fn fetch_records(cli: &Cli) -> Result<Vec<PropertyRecord>> {
    if let Some(file) = &cli.file {
        let source = FixtureSource::new(file);
        info!("Fetching listings from source: {}", source.source_name());
        return source.fetch_all().await;
    }
    if let Some(url) = &cli.url {
        let mut source = RestSource::new(url)?;
        if let Some(key) = &cli.api_key {
            source = source.with_api_key(key);
        }
        info!("Fetching listings from source: {}", source.source_name());
        return source.fetch_all().await;
    }
    Ok(sample_listings())
}

fn print_card(index: usize, listing: &PropertyRecord) {
    println!(
        "{}. {} [{}]",
        index,
        listing.name,
        format::purpose_badge(listing.purpose.as_deref())
    );
    if let Some(genre) = &listing.genre {
        println!("   Type: {}", genre);
    }
    println!(
        "   {} · {}",
        listing.location.as_deref().unwrap_or("Location not specified"),
        format::format_area(listing.area)
    );
    println!("   {}", format::format_price(listing.price));
    let listed = format::format_date(listing.created_at);
    if !listed.is_empty() {
        println!("   Listed: {}", listed);
    }
    println!("   View: {}", listing.detail_route());
    println!();
}

fn print_row(index: usize, listing: &PropertyRecord) {
    println!(
        "{}. {} [{}] · {} · {} · {} · {}",
        index,
        listing.name,
        format::purpose_badge(listing.purpose.as_deref()),
        listing.location.as_deref().unwrap_or("Location not specified"),
        format::format_price(listing.price),
        format::format_area(listing.area),
        listing.detail_route()
    );
}
