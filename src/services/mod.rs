pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod category_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod image_service;
pub mod invoice_service;
pub mod product_service;
pub mod review_service;
pub mod shipping_service;
pub mod slider_service;
pub mod user_service;

/// Derive a URL slug from a display name: lowercase alphanumerics with
/// single dashes, no leading or trailing dash.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("New Category"), "new-category");
        assert_eq!(slugify("Updated Category"), "updated-category");
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("  Baju -- Anak!  "), "baju-anak");
        assert_eq!(slugify("Kaos 100% Katun"), "kaos-100-katun");
    }
}
