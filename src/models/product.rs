use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// URL completa de la imagen (la arma el backend)
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub product_count: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: i64,
    #[serde(default)]
    pub category_name: String,
    pub is_available: bool,
    #[serde(default)]
    pub image: Option<String>,
    pub stock: i32,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaginatedProducts {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Product>,
}

impl PaginatedProducts {
    pub fn empty() -> Self {
        Self { count: 0, next: None, previous: None, results: Vec::new() }
    }
}

/// Campos planos del formulario de producto; la imagen viaja aparte como
/// archivo dentro del multipart.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: i64,
    pub stock: String,
    pub is_available: bool,
}
