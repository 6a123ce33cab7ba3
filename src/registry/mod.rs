mod in_memory;

pub use in_memory::InMemoryUserStore;

use crate::domain::{AccountType, PackageId, SellerPackage, User};
use crate::error::{DirectoryError, Result};
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());

/// Keyed persistence boundary for accounts. `user_name` and `email` are
/// independent unique keys; `insert_if_absent` must check both and insert in
/// a single atomic step so concurrent registrations cannot admit duplicates.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_user_name(&self, user_name: &str) -> Result<Option<User>>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Assigns the user id and inserts, or fails with `DuplicateKey` without
    /// writing anything.
    async fn insert_if_absent(&self, user: &mut User) -> Result<()>;
}

/// Registration request as submitted by a client, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub account_type: String,
    pub seller_package: Option<SellerPackageRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct SellerPackageRequest {
    pub package_id: Option<String>,
    pub photo_uploads: Option<i64>,
    pub video_uploads: Option<i64>,
}

/// Validates and persists user accounts. The only component with shared
/// mutable state; everything else in the core is read-only after load.
pub struct AccountRegistry {
    store: Arc<dyn UserStore>,
}

impl AccountRegistry {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new account. First failure wins, field-scoped:
    /// presence, phone format, uniqueness (email before user name), then the
    /// conditional seller schema. On success the record is inserted
    /// atomically and returned immutable.
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        let required = [
            ("userName", &request.user_name),
            ("email", &request.email),
            ("password", &request.password),
            ("phoneNumber", &request.phone_number),
            ("accountType", &request.account_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DirectoryError::validation(field, "is required"));
            }
        }

        let phone_number = request.phone_number.trim();
        if !PHONE_PATTERN.is_match(phone_number) {
            return Err(DirectoryError::validation(
                "phoneNumber",
                "must be 10 to 15 digits with an optional leading +",
            ));
        }

        let email = request.email.trim().to_lowercase();
        let user_name = request.user_name.trim().to_string();

        if self.store.get_by_email(&email).await?.is_some() {
            return Err(DirectoryError::duplicate("email", &email));
        }
        if self.store.get_by_user_name(&user_name).await?.is_some() {
            return Err(DirectoryError::duplicate("userName", &user_name));
        }

        let account = match request.account_type.trim() {
            "buyer" => AccountType::Buyer,
            "seller" => AccountType::Seller(validate_seller_package(
                request.seller_package.as_ref(),
            )?),
            _ => {
                return Err(DirectoryError::validation(
                    "accountType",
                    "must be one of buyer, seller",
                ))
            }
        };

        let mut user = User {
            id: None,
            user_name,
            email,
            password: request.password,
            phone_number: phone_number.to_string(),
            account,
            created_at: Utc::now(),
        };

        // The store re-checks both keys under its own critical section, so a
        // concurrent registration that slipped past the reads above still
        // loses here instead of creating a duplicate.
        self.store.insert_if_absent(&mut user).await?;

        info!(
            user_name = %user.user_name,
            account_type = user.account.as_str(),
            "registered account"
        );
        Ok(user)
    }
}

/// Seller-only schema: package id and both upload counts must be supplied.
/// The stored quota is derived from the canonical table for the chosen tier;
/// client-supplied counts are presence-checked, then discarded.
fn validate_seller_package(input: Option<&SellerPackageRequest>) -> Result<SellerPackage> {
    let package = input.ok_or_else(|| {
        DirectoryError::validation("sellerPackage.packageId", "is required for seller accounts")
    })?;

    let package_id = package
        .package_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            DirectoryError::validation(
                "sellerPackage.packageId",
                "is required for seller accounts",
            )
        })?;
    let package_id = PackageId::parse(package_id).ok_or_else(|| {
        DirectoryError::validation(
            "sellerPackage.packageId",
            "must be one of basic, standard, premium",
        )
    })?;

    if package.photo_uploads.is_none() {
        return Err(DirectoryError::validation(
            "sellerPackage.photoUploads",
            "is required for seller accounts",
        ));
    }
    if package.video_uploads.is_none() {
        return Err(DirectoryError::validation(
            "sellerPackage.videoUploads",
            "is required for seller accounts",
        ));
    }

    let (photo_uploads, video_uploads) = package_id.quota();
    Ok(SellerPackage {
        package_id,
        photo_uploads,
        video_uploads,
    })
}
