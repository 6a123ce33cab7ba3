use anyhow::Result;
use soko_directory::error::DirectoryError;
use soko_directory::seed::{load_catalog, load_taxonomy};
use std::fs;
use tempfile::tempdir;

fn write_seed(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn loads_a_valid_catalog_seed() -> Result<()> {
    let dir = tempdir()?;
    let path = write_seed(
        &dir,
        "services.json",
        r#"[
            {
                "id": "1",
                "name": "Glow Spa",
                "minPrice": 1500,
                "maxPrice": 5000,
                "location": "Nairobi",
                "image": "https://images.example.com/1.jpg",
                "category": "Beauty",
                "subcategory": "Spa",
                "whatsapp": "+254712345678"
            },
            {
                "id": "2",
                "name": "Fix Auto",
                "minPrice": 0,
                "maxPrice": 0,
                "location": "Nairobi",
                "image": "https://images.example.com/2.jpg",
                "category": "Auto",
                "subcategory": "Repairs"
            }
        ]"#,
    );

    let catalog = load_catalog(&path)?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get_by_id("1").unwrap().name, "Glow Spa");
    // Optional fields default to absent.
    assert!(catalog.get_by_id("2").unwrap().whatsapp.is_none());
    Ok(())
}

#[test]
fn rejects_inverted_price_range() -> Result<()> {
    let dir = tempdir()?;
    let path = write_seed(
        &dir,
        "services.json",
        r#"[{
            "id": "1", "name": "Glow Spa", "minPrice": 5000, "maxPrice": 1500,
            "location": "Nairobi", "image": "x.jpg",
            "category": "Beauty", "subcategory": "Spa"
        }]"#,
    );

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, DirectoryError::Seed(_)));
    Ok(())
}

#[test]
fn rejects_duplicate_listing_ids() -> Result<()> {
    let dir = tempdir()?;
    let path = write_seed(
        &dir,
        "services.json",
        r#"[
            {"id": "1", "name": "A", "minPrice": 1, "maxPrice": 2,
             "location": "Nairobi", "image": "a.jpg", "category": "Beauty", "subcategory": "Spa"},
            {"id": "1", "name": "B", "minPrice": 1, "maxPrice": 2,
             "location": "Nairobi", "image": "b.jpg", "category": "Beauty", "subcategory": "Spa"}
        ]"#,
    );

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, DirectoryError::Seed(_)));
    Ok(())
}

#[test]
fn loads_taxonomy_in_configured_order() -> Result<()> {
    let dir = tempdir()?;
    let path = write_seed(
        &dir,
        "categories.json",
        r#"[
            {"id": "beauty", "title": "Beauty"},
            {"id": "auto", "title": "Auto"}
        ]"#,
    );

    let taxonomy = load_taxonomy(&path)?;
    let ids: Vec<&str> = taxonomy.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["beauty", "auto"]);
    assert_eq!(taxonomy.resolve_title("auto"), Some("Auto"));
    Ok(())
}

#[test]
fn rejects_reserved_all_id_in_taxonomy() -> Result<()> {
    let dir = tempdir()?;
    let path = write_seed(
        &dir,
        "categories.json",
        r#"[{"id": "all", "title": "Everything"}]"#,
    );

    let err = load_taxonomy(&path).unwrap_err();
    assert!(matches!(err, DirectoryError::Seed(_)));
    Ok(())
}

#[test]
fn missing_seed_file_is_a_config_error() {
    let err = load_catalog("does/not/exist.json").unwrap_err();
    assert!(matches!(err, DirectoryError::Config(_)));
}
