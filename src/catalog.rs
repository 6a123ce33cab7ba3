use crate::domain::ServiceListing;

/// Immutable set of service listings for a session. Constructed explicitly
/// at startup and shared by reference; there is no process-global catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    listings: Vec<ServiceListing>,
}

impl CatalogStore {
    pub fn new(listings: Vec<ServiceListing>) -> Self {
        Self { listings }
    }

    /// All listings in their seeded order.
    pub fn all(&self) -> &[ServiceListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a single listing by id. Unknown, empty, and whitespace-only
    /// ids are all "absent", never an error.
    pub fn get_by_id(&self, id: &str) -> Option<&ServiceListing> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.listings.iter().find(|l| l.id == id)
    }
}
