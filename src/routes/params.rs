use serde::Deserialize;
use utoipa::ToSchema;

/// Listing query: optional substring search plus a page number. Page sizes
/// are fixed per endpoint and not caller-configurable.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<i64>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}
