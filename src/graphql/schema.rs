use crate::catalog::CatalogStore;
use crate::graphql::resolvers::{Mutation, Query};
use crate::registry::AccountRegistry;
use crate::taxonomy::CategoryTaxonomy;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub catalog: Arc<CatalogStore>,
    pub taxonomy: Arc<CategoryTaxonomy>,
    pub registry: Arc<AccountRegistry>,
}

/// The complete GraphQL schema
pub type DirectorySchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema with the given application state
pub fn create_schema(context: GraphQLContext) -> DirectorySchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(context)
        .finish()
}
