use crate::domain::Category;

/// Reserved category id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Static hierarchical mapping of selectable category ids to display titles.
/// Seeded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

impl CategoryTaxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Ordered category entries, stable as configured.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a category id to its display title. The reserved `"all"` id
    /// and unknown ids both resolve to `None`; callers that want "all passes
    /// everything" must branch on the reserved id before resolving.
    pub fn resolve_title(&self, category_id: &str) -> Option<&str> {
        if category_id == ALL_CATEGORIES {
            return None;
        }
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> CategoryTaxonomy {
        CategoryTaxonomy::new(vec![
            Category {
                id: "beauty".to_string(),
                title: "Beauty".to_string(),
            },
            Category {
                id: "fashion".to_string(),
                title: "Fashion".to_string(),
            },
        ])
    }

    #[test]
    fn resolves_known_id_to_title() {
        assert_eq!(taxonomy().resolve_title("beauty"), Some("Beauty"));
    }

    #[test]
    fn all_and_unknown_ids_resolve_to_none() {
        let tax = taxonomy();
        assert_eq!(tax.resolve_title(ALL_CATEGORIES), None);
        assert_eq!(tax.resolve_title("plumbing"), None);
    }

    #[test]
    fn categories_keep_configured_order() {
        let tax = taxonomy();
        let ids: Vec<&str> = tax.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["beauty", "fashion"]);
    }
}
