use crate::domain::{SellerPackage as DomainSellerPackage, User as DomainUser};
use async_graphql::{Object, ID};

/// GraphQL representation of a registered account. The opaque credential is
/// deliberately not exposed.
#[derive(Clone)]
pub struct User {
    pub inner: DomainUser,
}

impl From<DomainUser> for User {
    fn from(user: DomainUser) -> Self {
        Self { inner: user }
    }
}

#[Object]
impl User {
    /// The unique identifier for the account
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    async fn user_name(&self) -> &str {
        &self.inner.user_name
    }

    /// Normalized (trimmed, lowercased) email
    async fn email(&self) -> &str {
        &self.inner.email
    }

    async fn phone_number(&self) -> &str {
        &self.inner.phone_number
    }

    /// "buyer" or "seller"
    async fn account_type(&self) -> &str {
        self.inner.account.as_str()
    }

    /// Package details, present exactly when the account is a seller
    async fn seller_package(&self) -> Option<SellerPackage> {
        self.inner
            .account
            .seller_package()
            .map(|pkg| SellerPackage { inner: pkg.clone() })
    }

    /// When the account was registered
    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.inner.created_at
    }
}

/// GraphQL representation of a seller's package
#[derive(Clone)]
pub struct SellerPackage {
    pub inner: DomainSellerPackage,
}

#[Object]
impl SellerPackage {
    async fn package_id(&self) -> &str {
        self.inner.package_id.as_str()
    }

    async fn photo_uploads(&self) -> u32 {
        self.inner.photo_uploads
    }

    async fn video_uploads(&self) -> u32 {
        self.inner.video_uploads
    }
}
