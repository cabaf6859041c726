use serde::{Deserialize, Serialize};

use super::form::parse_decimal;
use super::ItemId;
use crate::error::SyncResult;
use crate::sync::{DraftOf, SyncItem};

/// Producto del catálogo (`/products`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    pub price: f64,

    // Campos extra del listado remoto, se conservan al editar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl SyncItem for Product {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// Respuesta de `GET /products`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Campos editables de un producto, ya validados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
}

impl DraftOf<Product> for ProductDraft {
    fn build(&self, id: ItemId) -> Product {
        Product {
            id,
            title: self.title.clone(),
            price: self.price,
            description: None,
            category: None,
            thumbnail: None,
        }
    }

    fn overlay(&self, base: &Product) -> Product {
        Product {
            title: self.title.clone(),
            price: self.price,
            ..base.clone()
        }
    }
}

/// Valores crudos del formulario de producto (texto libre)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
}

impl ProductForm {
    /// Precarga el formulario de edición con un producto existente
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
        }
    }

    pub fn parse(&self) -> SyncResult<ProductDraft> {
        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            price: parse_decimal("price", &self.price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;

    #[test]
    fn overlay_keeps_id_and_catalog_fields() {
        let base = Product {
            id: 7,
            title: "Old".into(),
            price: 1.0,
            description: Some("desc".into()),
            category: Some("beauty".into()),
            thumbnail: None,
        };
        let draft = ProductDraft { title: "New".into(), price: 2.5 };

        let updated = draft.overlay(&base);
        assert_eq!(updated.id, 7);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.price, 2.5);
        assert_eq!(updated.category.as_deref(), Some("beauty"));
    }

    #[test]
    fn form_rejects_non_numeric_price() {
        let form = ProductForm { title: "Mascara".into(), price: "ten".into() };
        assert_eq!(form.parse(), Err(SyncError::validation("price", "ten")));
    }

    #[test]
    fn listing_ignores_unknown_fields() {
        let page: ProductsPage = serde_json::from_str(
            r#"{"products":[{"id":1,"title":"Apple","price":1.99,"rating":4.5,"tags":["fruits"]}],"total":194,"skip":0,"limit":30}"#,
        )
        .unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].title, "Apple");
        assert_eq!(page.total, Some(194));
    }
}
