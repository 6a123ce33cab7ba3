use crate::domain::ServiceListing;
use crate::taxonomy::{CategoryTaxonomy, ALL_CATEGORIES};

/// Filter listings by free text and category selection.
///
/// The text step keeps a listing when its name, description, location, or
/// category contains the (lowercased, trimmed) query as a substring; blank
/// queries pass everything. The category step passes everything for the
/// reserved `"all"` id, matches the resolved title exactly (case-sensitive)
/// for known ids, and yields an empty result for unknown ids rather than
/// falling back to "all". Input order is preserved; there is no ranking.
pub fn search(
    listings: &[ServiceListing],
    taxonomy: &CategoryTaxonomy,
    search_text: &str,
    category_id: &str,
) -> Vec<ServiceListing> {
    let query = search_text.trim().to_lowercase();

    let category_title = if category_id == ALL_CATEGORIES {
        None
    } else {
        match taxonomy.resolve_title(category_id) {
            Some(title) => Some(title.to_string()),
            // Unknown category: no error, no match.
            None => return Vec::new(),
        }
    };

    listings
        .iter()
        .filter(|listing| matches_text(listing, &query))
        .filter(|listing| match &category_title {
            Some(title) => listing.category == *title,
            None => true,
        })
        .cloned()
        .collect()
}

fn matches_text(listing: &ServiceListing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    listing.name.to_lowercase().contains(query)
        || listing
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
        || listing.location.to_lowercase().contains(query)
        || listing.category.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn listing(id: &str, name: &str, category: &str) -> ServiceListing {
        ServiceListing {
            id: id.to_string(),
            name: name.to_string(),
            min_price: 500.0,
            max_price: 1500.0,
            location: "Nairobi".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            category: category.to_string(),
            subcategory: "General".to_string(),
            description: None,
            whatsapp: None,
        }
    }

    fn taxonomy() -> CategoryTaxonomy {
        CategoryTaxonomy::new(vec![
            Category {
                id: "beauty".to_string(),
                title: "Beauty".to_string(),
            },
            Category {
                id: "auto".to_string(),
                title: "Auto".to_string(),
            },
        ])
    }

    #[test]
    fn text_matches_name_case_insensitively() {
        let listings = vec![
            listing("1", "Glow Spa", "Beauty"),
            listing("2", "Fix Auto", "Auto"),
        ];
        let result = search(&listings, &taxonomy(), "glow", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn blank_text_and_all_category_pass_everything_in_order() {
        let listings = vec![
            listing("1", "Glow Spa", "Beauty"),
            listing("2", "Fix Auto", "Auto"),
        ];
        let result = search(&listings, &taxonomy(), "   ", ALL_CATEGORIES);
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn unknown_category_yields_empty_regardless_of_text() {
        let listings = vec![listing("1", "Glow Spa", "Beauty")];
        assert!(search(&listings, &taxonomy(), "", "plumbing").is_empty());
        assert!(search(&listings, &taxonomy(), "glow", "plumbing").is_empty());
    }

    #[test]
    fn category_match_is_exact_on_title_casing() {
        let listings = vec![
            listing("1", "Glow Spa", "Beauty"),
            listing("2", "Shine Spa", "beauty"),
        ];
        let result = search(&listings, &taxonomy(), "", "beauty");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn text_matches_description_when_present() {
        let mut with_description = listing("1", "Quiet Room", "Beauty");
        with_description.description = Some("Deep tissue massage".to_string());
        let listings = vec![with_description, listing("2", "Other", "Beauty")];
        let result = search(&listings, &taxonomy(), "massage", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn text_and_category_steps_compose_with_and() {
        let listings = vec![
            listing("1", "Glow Spa", "Beauty"),
            listing("2", "Glow Garage", "Auto"),
        ];
        let result = search(&listings, &taxonomy(), "glow", "auto");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }
}
