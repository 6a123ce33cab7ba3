use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Category, SellerPackageTier, Service};
use crate::search;
use crate::taxonomy::ALL_CATEGORIES;
use async_graphql::{Context, FieldResult, Object, ID};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Search listings by free text and category selection
    async fn services(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        category: Option<String>,
    ) -> FieldResult<Vec<Service>> {
        let context = ctx.data::<GraphQLContext>()?;

        let search_text = search.unwrap_or_default();
        let category_id = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());

        let results = search::search(
            context.catalog.all(),
            &context.taxonomy,
            &search_text,
            &category_id,
        );
        Ok(results.into_iter().map(|l| l.into()).collect())
    }

    /// Get a single listing by id
    async fn service(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Service>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context.catalog.get_by_id(id.as_str()).cloned().map(|l| l.into()))
    }

    /// All selectable categories in configured order
    async fn categories(&self, ctx: &Context<'_>) -> FieldResult<Vec<Category>> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(context
            .taxonomy
            .categories()
            .iter()
            .cloned()
            .map(|c| c.into())
            .collect())
    }

    /// The three seller tiers with quotas and marketing copy
    async fn seller_packages(&self) -> Vec<SellerPackageTier> {
        crate::packages::seller_packages()
            .iter()
            .map(|t| SellerPackageTier { inner: *t })
            .collect()
    }
}
