use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use soko_directory::booking;
use soko_directory::catalog::CatalogStore;
use soko_directory::config::Config;
use soko_directory::error::DirectoryError;
use soko_directory::graphql::schema::GraphQLContext;
use soko_directory::logging;
use soko_directory::registry::{AccountRegistry, InMemoryUserStore};
use soko_directory::search;
use soko_directory::seed;
use soko_directory::server;
use soko_directory::taxonomy::{CategoryTaxonomy, ALL_CATEGORIES};

#[derive(Parser)]
#[command(name = "soko_directory")]
#[command(about = "Service marketplace directory")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the GraphQL API over HTTP
    Serve {
        /// Port to bind (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Search the catalog from the command line
    Search {
        /// Free-text query
        query: Option<String>,
        /// Category id to filter by ("all" for no filter)
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Show a single listing by id
    Show { id: String },
}

fn load_seeds(config: &Config) -> Result<(CatalogStore, CategoryTaxonomy), DirectoryError> {
    let catalog = seed::load_catalog(&config.seed.catalog)?;
    let taxonomy = seed::load_taxonomy(&config.seed.taxonomy)?;
    Ok((catalog, taxonomy))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;

    match cli.command {
        Commands::Serve { port } => {
            let (catalog, taxonomy) = load_seeds(&config)?;
            let registry = AccountRegistry::new(Arc::new(InMemoryUserStore::new()));

            info!("Starting directory server");
            let context = GraphQLContext {
                catalog: Arc::new(catalog),
                taxonomy: Arc::new(taxonomy),
                registry: Arc::new(registry),
            };
            server::start_server(context, port.unwrap_or(config.server.port)).await?;
        }
        Commands::Search { query, category } => {
            let (catalog, taxonomy) = load_seeds(&config)?;
            let query = query.unwrap_or_default();

            let results = search::search(catalog.all(), &taxonomy, &query, &category);
            println!("\n📊 {} of {} listings matched:", results.len(), catalog.len());
            for listing in &results {
                println!(
                    "   {} | {} ({}, Ksh {} - {})",
                    listing.id, listing.name, listing.location, listing.min_price, listing.max_price
                );
            }
        }
        Commands::Show { id } => {
            let (catalog, _taxonomy) = load_seeds(&config)?;
            let listing = catalog
                .get_by_id(&id)
                .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;

            println!("\n🏷️  {} ({})", listing.name, listing.id);
            println!("   Category: {} / {}", listing.category, listing.subcategory);
            println!("   Location: {}", listing.location);
            println!("   Price:    Ksh {} - {}", listing.min_price, listing.max_price);
            if let Some(description) = &listing.description {
                println!("   About:    {description}");
            }
            match booking::contact_url(listing) {
                Ok(url) => {
                    println!("   Chat:     {url}");
                    // tel_url cannot fail if contact_url succeeded
                    println!("   Call:     {}", booking::tel_url(listing)?);
                }
                Err(DirectoryError::MissingContact) => {
                    println!("   Contact:  not provided by the seller");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}
