use crate::booking;
use crate::domain::ServiceListing;
use async_graphql::{Object, ID};

/// GraphQL representation of a service listing
#[derive(Clone)]
pub struct Service {
    pub inner: ServiceListing,
}

impl From<ServiceListing> for Service {
    fn from(listing: ServiceListing) -> Self {
        Self { inner: listing }
    }
}

#[Object]
impl Service {
    /// The unique identifier for the listing
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Display name of the service
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Lower bound of the price range, in Ksh
    async fn min_price(&self) -> f64 {
        self.inner.min_price
    }

    /// Upper bound of the price range, in Ksh
    async fn max_price(&self) -> f64 {
        self.inner.max_price
    }

    async fn location(&self) -> &str {
        &self.inner.location
    }

    /// Image reference for the listing
    async fn image(&self) -> &str {
        &self.inner.image
    }

    async fn category(&self) -> &str {
        &self.inner.category
    }

    async fn subcategory(&self) -> &str {
        &self.inner.subcategory
    }

    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Raw contact handle, when the seller supplied one
    async fn whatsapp(&self) -> Option<&str> {
        self.inner.whatsapp.as_deref()
    }

    /// Chat hand-off URL, absent when the listing has no contact handle
    async fn whatsapp_url(&self) -> Option<String> {
        booking::contact_url(&self.inner).ok()
    }

    /// Direct-dial hand-off URL, absent when the listing has no contact handle
    async fn tel_url(&self) -> Option<String> {
        booking::tel_url(&self.inner).ok()
    }
}
