use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single service offering in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    pub id: String,
    pub name: String,
    pub min_price: f64,
    pub max_price: f64,
    pub location: String,
    pub image: String,
    pub category: String,
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact handle used for the booking hand-off, when the seller has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// One selectable entry in the category taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
}

/// A registered account. `id` is assigned by the store at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<Uuid>,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub account: AccountType,
    pub created_at: DateTime<Utc>,
}

/// Account variant. A seller always carries a package; a buyer never does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AccountType {
    Buyer,
    Seller(SellerPackage),
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Buyer => "buyer",
            AccountType::Seller(_) => "seller",
        }
    }

    pub fn seller_package(&self) -> Option<&SellerPackage> {
        match self {
            AccountType::Buyer => None,
            AccountType::Seller(pkg) => Some(pkg),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerPackage {
    pub package_id: PackageId,
    pub photo_uploads: u32,
    pub video_uploads: u32,
}

/// Seller package tier, gating upload quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Basic,
    Standard,
    Premium,
}

impl PackageId {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(PackageId::Basic),
            "standard" => Some(PackageId::Standard),
            "premium" => Some(PackageId::Premium),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Basic => "basic",
            PackageId::Standard => "standard",
            PackageId::Premium => "premium",
        }
    }

    /// Canonical (photo, video) upload quota for this tier.
    pub fn quota(&self) -> (u32, u32) {
        match self {
            PackageId::Basic => (1, 0),
            PackageId::Standard => (2, 0),
            PackageId::Premium => (3, 1),
        }
    }
}
