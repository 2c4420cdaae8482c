use web_sys::{File, FormData};

use crate::models::{Category, CategoryPayload, PaginatedProducts, Product, ProductFields};
use crate::services::http;

// ----------------------------------------------------------------------------
// Categorías
// ----------------------------------------------------------------------------

pub async fn get_categories() -> Result<Vec<Category>, String> {
    let response = http::get("/api/categories/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_category(payload: &CategoryPayload) -> Result<Category, String> {
    let response = http::post("/api/categories/")
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<Category>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_category(id: i64, payload: &CategoryPayload) -> Result<Category, String> {
    let response = http::put(&format!("/api/categories/{}/", id))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<Category>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_category(id: i64) -> Result<(), String> {
    let response = http::delete(&format!("/api/categories/{}/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

// ----------------------------------------------------------------------------
// Productos
// ----------------------------------------------------------------------------

/// Arma la query string de paginación/búsqueda del listado.
pub fn product_list_query(page: Option<u32>, page_size: Option<u32>, search: Option<&str>) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(page) = page {
        params.push(format!("page={}", page));
    }
    if let Some(page_size) = page_size {
        params.push(format!("page_size={}", page_size));
    }
    if let Some(search) = search {
        let search = search.trim();
        if !search.is_empty() {
            params.push(format!("search={}", search));
        }
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

pub async fn get_products(
    page: Option<u32>,
    page_size: Option<u32>,
    search: Option<&str>,
) -> Result<PaginatedProducts, String> {
    let path = format!("/api/products/{}", product_list_query(page, page_size, search));
    let response = http::get(&path)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<PaginatedProducts>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn get_product(id: i64) -> Result<Product, String> {
    let response = http::get(&format!("/api/products/{}/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Las mutaciones de producto viajan como multipart por la imagen.
fn product_form_data(fields: &ProductFields, image: Option<&File>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "No se pudo crear el FormData".to_string())?;

    let _ = form.append_with_str("name", &fields.name);
    let _ = form.append_with_str("description", &fields.description);
    let _ = form.append_with_str("price", &fields.price);
    let _ = form.append_with_str("category", &fields.category.to_string());
    let _ = form.append_with_str("stock", &fields.stock);
    let _ = form.append_with_str("is_available", if fields.is_available { "true" } else { "false" });

    if let Some(file) = image {
        let _ = form.append_with_blob_and_filename("image", file, &file.name());
    }

    Ok(form)
}

pub async fn create_product(fields: &ProductFields, image: Option<&File>) -> Result<Product, String> {
    let form = product_form_data(fields, image)?;

    let response = http::post("/api/products/")
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn update_product(
    id: i64,
    fields: &ProductFields,
    image: Option<&File>,
) -> Result<Product, String> {
    let form = product_form_data(fields, image)?;

    let response = http::put(&format!("/api/products/{}/", id))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error_text));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_product(id: i64) -> Result<(), String> {
    let response = http::delete(&format!("/api/products/{}/", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_empty_when_no_params() {
        assert_eq!(product_list_query(None, None, None), "");
        assert_eq!(product_list_query(None, None, Some("   ")), "");
    }

    #[test]
    fn query_joins_params() {
        assert_eq!(
            product_list_query(Some(2), Some(10), Some("cafe")),
            "?page=2&page_size=10&search=cafe"
        );
        assert_eq!(product_list_query(Some(1), None, None), "?page=1");
    }
}
