//! Catalog entities: products, categories and product listings.

use serde::{Deserialize, Serialize};
use sm_shared::utils::image_url;
use sm_shared::{Id, PageInfo};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

/// Product offered by a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    /// Gallery paths, possibly relative
    #[serde(default)]
    pub images: Vec<String>,
    /// Cover image path, possibly relative
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<Id>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub seller_id: Option<Id>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Absolute URL of the cover image, falling back to the first gallery image
    pub fn cover_image_url(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, self.image_url.as_deref())
            .or_else(|| image_url(image_base_url, self.images.first().map(String::as_str)))
    }

    /// Absolute URLs of every gallery image that resolves
    pub fn gallery_urls(&self, image_base_url: &str) -> Vec<String> {
        self.images
            .iter()
            .filter_map(|path| image_url(image_base_url, Some(path)))
            .collect()
    }
}

/// Listing payload; the backend returns either a bare array or a page object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
    Page {
        #[serde(alias = "products", alias = "data")]
        items: Vec<Product>,
        #[serde(default, alias = "meta")]
        pagination: Option<PageInfo>,
    },
    Plain(Vec<Product>),
}

/// One page of products
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page_info: PageInfo,
}

impl ProductPage {
    pub fn has_next(&self) -> bool {
        self.page_info.has_next()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<ProductListing> for ProductPage {
    fn from(listing: ProductListing) -> Self {
        match listing {
            ProductListing::Page { items, pagination } => {
                let page_info = pagination.unwrap_or_else(|| PageInfo::single_page(items.len()));
                Self { items, page_info }
            }
            ProductListing::Plain(items) => Self {
                page_info: PageInfo::single_page(items.len()),
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://img.test/";

    fn product(image_url: Option<&str>, images: &[&str]) -> Product {
        Product {
            id: Id::from(1u64),
            name: "Kopi Gayo".to_string(),
            description: None,
            price: 85_000.0,
            stock: 0,
            images: images.iter().map(|s| s.to_string()).collect(),
            image_url: image_url.map(str::to_string),
            category_id: None,
            category: None,
            seller_id: None,
            rating: None,
        }
    }

    #[test]
    fn test_cover_image_falls_back_to_gallery() {
        assert_eq!(
            product(None, &["/p/1.png"]).cover_image_url(BASE).as_deref(),
            Some("https://img.test/p/1.png")
        );
        assert_eq!(
            product(Some("hhttps://cdn.test/c.png"), &[]).cover_image_url(BASE).as_deref(),
            Some("https://cdn.test/c.png")
        );
        assert_eq!(product(Some(""), &[]).cover_image_url(BASE), None);
    }

    #[test]
    fn test_gallery_skips_blank_paths() {
        let urls = product(None, &["a.png", " ", "https://cdn.test/b.png"]).gallery_urls(BASE);
        assert_eq!(urls, vec!["https://img.test/a.png", "https://cdn.test/b.png"]);
    }

    #[test]
    fn test_listing_accepts_plain_array() {
        let listing: ProductListing =
            serde_json::from_str(r#"[{"id": 1, "name": "A", "price": 10}]"#).unwrap();
        let page = ProductPage::from(listing);
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next());
    }

    #[test]
    fn test_listing_accepts_page_object() {
        let listing: ProductListing = serde_json::from_str(
            r#"{"products": [{"id": 1, "name": "A", "price": 10, "stock": 3}],
                "pagination": {"page": 1, "limit": 1, "total": 2}}"#,
        )
        .unwrap();
        let page = ProductPage::from(listing);
        assert!(page.items[0].is_in_stock());
        assert!(page.has_next());
    }
}
