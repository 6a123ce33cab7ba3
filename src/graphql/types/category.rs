use crate::domain::Category as DomainCategory;
use async_graphql::Object;

/// GraphQL representation of a taxonomy entry
#[derive(Clone)]
pub struct Category {
    pub inner: DomainCategory,
}

impl From<DomainCategory> for Category {
    fn from(category: DomainCategory) -> Self {
        Self { inner: category }
    }
}

#[Object]
impl Category {
    /// Selectable category identifier
    async fn id(&self) -> &str {
        &self.inner.id
    }

    /// Display title, matched exactly against listing categories
    async fn title(&self) -> &str {
        &self.inner.title
    }
}
