use serde::Serialize;
use utoipa::ToSchema;

/// Envelope applied at every boundary.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// List payload: the page of rows plus the page cursor bookkeeping.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, path: &str, page: i64, per_page: i64, total: i64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let page_url = |n: i64| format!("{}?page={}", path, n);
        let links = PageLinks {
            first: page_url(1),
            last: page_url(last_page),
            prev: (page > 1).then(|| page_url(page - 1)),
            next: (page < last_page).then(|| page_url(page + 1)),
        };
        Self {
            data,
            links,
            current_page: page,
            last_page,
            per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_computes_last_page_and_links() {
        let page: Paginated<i32> = Paginated::new(vec![1, 2, 3], "/admin/categories", 2, 5, 12);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.links.prev.as_deref(), Some("/admin/categories?page=1"));
        assert_eq!(page.links.next.as_deref(), Some("/admin/categories?page=3"));
        assert_eq!(page.links.last, "/admin/categories?page=3");
    }

    #[test]
    fn paginated_empty_set_still_has_one_page() {
        let page: Paginated<i32> = Paginated::new(vec![], "/web/products", 1, 10, 0);
        assert_eq!(page.last_page, 1);
        assert!(page.links.prev.is_none());
        assert!(page.links.next.is_none());
    }
}
