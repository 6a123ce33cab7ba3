use crate::packages::SellerPackageTier as DomainTier;
use async_graphql::Object;

/// GraphQL representation of one seller tier from the package catalog
#[derive(Clone, Copy)]
pub struct SellerPackageTier {
    pub inner: DomainTier,
}

#[Object]
impl SellerPackageTier {
    /// Tier identifier: basic, standard, or premium
    async fn id(&self) -> &str {
        self.inner.id.as_str()
    }

    async fn name(&self) -> &str {
        self.inner.name
    }

    /// Price in Ksh
    async fn price(&self) -> u32 {
        self.inner.price
    }

    async fn recommended(&self) -> bool {
        self.inner.recommended
    }

    async fn features(&self) -> Vec<String> {
        self.inner.features.iter().map(|f| f.to_string()).collect()
    }

    /// Canonical photo upload quota for this tier
    async fn photo_uploads(&self) -> u32 {
        self.inner.id.quota().0
    }

    /// Canonical video upload quota for this tier
    async fn video_uploads(&self) -> u32 {
        self.inner.id.quota().1
    }
}
