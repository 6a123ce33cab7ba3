use crate::catalog::CatalogStore;
use crate::domain::{Category, ServiceListing};
use crate::error::{DirectoryError, Result};
use crate::taxonomy::{CategoryTaxonomy, ALL_CATEGORIES};
use std::collections::HashSet;
use std::fs;
use tracing::info;

/// Load the catalog seed: an ordered JSON array of service listings.
pub fn load_catalog(path: &str) -> Result<CatalogStore> {
    let content = fs::read_to_string(path).map_err(|e| {
        DirectoryError::Config(format!("Failed to read catalog seed '{path}': {e}"))
    })?;
    let listings: Vec<ServiceListing> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for listing in &listings {
        if !seen.insert(listing.id.as_str()) {
            return Err(DirectoryError::Seed(format!(
                "duplicate listing id: {}",
                listing.id
            )));
        }
        if listing.min_price < 0.0 || listing.max_price < 0.0 {
            return Err(DirectoryError::Seed(format!(
                "listing {} has a negative price",
                listing.id
            )));
        }
        if listing.min_price > listing.max_price {
            return Err(DirectoryError::Seed(format!(
                "listing {} has min_price above max_price",
                listing.id
            )));
        }
    }

    info!("Loaded {} listings from {}", listings.len(), path);
    Ok(CatalogStore::new(listings))
}

/// Load the taxonomy seed: an ordered JSON array of {id, title} pairs.
pub fn load_taxonomy(path: &str) -> Result<CategoryTaxonomy> {
    let content = fs::read_to_string(path).map_err(|e| {
        DirectoryError::Config(format!("Failed to read taxonomy seed '{path}': {e}"))
    })?;
    let categories: Vec<Category> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for category in &categories {
        if category.id == ALL_CATEGORIES {
            return Err(DirectoryError::Seed(
                "taxonomy seed may not use the reserved id 'all'".to_string(),
            ));
        }
        if !seen.insert(category.id.as_str()) {
            return Err(DirectoryError::Seed(format!(
                "duplicate category id: {}",
                category.id
            )));
        }
    }

    info!("Loaded {} categories from {}", categories.len(), path);
    Ok(CategoryTaxonomy::new(categories))
}
