use serde::{Deserialize, Serialize};

use super::form::{parse_decimal, parse_integer};
use super::ItemId;
use crate::error::SyncResult;
use crate::sync::{DraftOf, SyncItem};

/// Carrito remoto (`/carts`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: ItemId,
    #[serde(default)]
    pub products: Vec<CartProduct>,
    pub total: f64,
    pub discounted_total: f64,
    pub user_id: u64,
    pub total_products: u32,
    pub total_quantity: u32,
}

impl SyncItem for Cart {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// Línea de un carrito (producto + cantidades calculadas por el servidor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ItemId,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default, alias = "discountedPrice")]
    pub discounted_total: f64,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Respuesta de `GET /carts`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartsPage {
    pub carts: Vec<Cart>,
}

/// Cuerpo de `POST /carts/add` y `PUT /carts/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    pub user_id: u64,
    pub total_products: u32,
    pub total_quantity: u32,
    pub total: f64,
    pub discounted_total: f64,
}

impl DraftOf<Cart> for CartDraft {
    fn build(&self, id: ItemId) -> Cart {
        Cart {
            id,
            products: Vec::new(),
            total: self.total,
            discounted_total: self.discounted_total,
            user_id: self.user_id,
            total_products: self.total_products,
            total_quantity: self.total_quantity,
        }
    }

    fn overlay(&self, base: &Cart) -> Cart {
        Cart {
            total: self.total,
            discounted_total: self.discounted_total,
            user_id: self.user_id,
            total_products: self.total_products,
            total_quantity: self.total_quantity,
            ..base.clone()
        }
    }
}

/// Valores crudos del formulario de carritos (texto libre)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CartForm {
    /// Solo para update
    pub cart_id: String,
    pub user_id: String,
    pub total_products: String,
    pub total_quantity: String,
    pub total: String,
    pub discounted_total: String,
}

impl CartForm {
    /// Precarga el formulario con un carrito existente (para update)
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            cart_id: cart.id.to_string(),
            user_id: cart.user_id.to_string(),
            total_products: cart.total_products.to_string(),
            total_quantity: cart.total_quantity.to_string(),
            total: cart.total.to_string(),
            discounted_total: cart.discounted_total.to_string(),
        }
    }

    pub fn parse(&self) -> SyncResult<CartDraft> {
        Ok(CartDraft {
            user_id: parse_integer("userId", &self.user_id)?,
            total_products: parse_integer("totalProducts", &self.total_products)?,
            total_quantity: parse_integer("totalQuantity", &self.total_quantity)?,
            total: parse_decimal("total", &self.total)?,
            discounted_total: parse_decimal("discountedTotal", &self.discounted_total)?,
        })
    }

    /// Id del carrito a actualizar
    pub fn target_id(&self) -> SyncResult<ItemId> {
        parse_integer("cartId", &self.cart_id)
    }
}
