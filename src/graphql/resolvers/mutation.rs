use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::User;
use crate::registry::{RegisterRequest, SellerPackageRequest};
use async_graphql::{Context, FieldResult, InputObject, Object};

/// Root mutation object for GraphQL
pub struct Mutation;

#[derive(InputObject)]
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    /// "buyer" or "seller"
    pub account_type: String,
    pub seller_package: Option<SellerPackageInput>,
}

#[derive(InputObject)]
pub struct SellerPackageInput {
    pub package_id: Option<String>,
    pub photo_uploads: Option<i64>,
    pub video_uploads: Option<i64>,
}

impl From<RegisterInput> for RegisterRequest {
    fn from(input: RegisterInput) -> Self {
        Self {
            user_name: input.user_name,
            email: input.email,
            password: input.password,
            phone_number: input.phone_number,
            account_type: input.account_type,
            seller_package: input.seller_package.map(|p| SellerPackageRequest {
                package_id: p.package_id,
                photo_uploads: p.photo_uploads,
                video_uploads: p.video_uploads,
            }),
        }
    }
}

#[Object]
impl Mutation {
    /// Register a new buyer or seller account
    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> FieldResult<User> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.registry.register(input.into()).await {
            Ok(user) => Ok(user.into()),
            Err(e) => Err(e.into()),
        }
    }
}
