use crate::domain::PackageId;

/// Marketing metadata for one seller tier. Quotas come from
/// [`PackageId::quota`]; this table only adds the storefront copy.
#[derive(Debug, Clone, Copy)]
pub struct SellerPackageTier {
    pub id: PackageId,
    pub name: &'static str,
    /// Price in Ksh.
    pub price: u32,
    pub recommended: bool,
    pub features: &'static [&'static str],
}

const TIERS: &[SellerPackageTier] = &[
    SellerPackageTier {
        id: PackageId::Basic,
        name: "Basic",
        price: 800,
        recommended: false,
        features: &[
            "1 Photo Upload",
            "Book Appointment Feature",
            "Basic Visibility",
            "Community Access",
        ],
    },
    SellerPackageTier {
        id: PackageId::Standard,
        name: "Standard",
        price: 1500,
        recommended: true,
        features: &[
            "2 Photo Uploads",
            "Book Appointment Feature",
            "Enhanced Visibility",
            "Community Access",
        ],
    },
    SellerPackageTier {
        id: PackageId::Premium,
        name: "Premium",
        price: 2500,
        recommended: false,
        features: &[
            "3 Photo Uploads",
            "1 Video Upload",
            "Book Appointment Feature",
            "Premium Visibility",
            "Featured Listing",
            "Community Access",
        ],
    },
];

/// Ordered static catalog of the three seller tiers.
pub fn seller_packages() -> &'static [SellerPackageTier] {
    TIERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_follow_the_canonical_table() {
        assert_eq!(PackageId::Basic.quota(), (1, 0));
        assert_eq!(PackageId::Standard.quota(), (2, 0));
        assert_eq!(PackageId::Premium.quota(), (3, 1));
    }

    #[test]
    fn tiers_are_ordered_basic_to_premium() {
        let ids: Vec<PackageId> = seller_packages().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![PackageId::Basic, PackageId::Standard, PackageId::Premium]
        );
    }
}
