pub mod product;
pub mod cart;
pub mod auth;
pub mod sync;
pub mod form;

/// Identificador numérico de un item (único dentro de una colección)
pub type ItemId = u64;

pub use product::{Product, ProductDraft, ProductForm, ProductsPage};
pub use cart::{Cart, CartDraft, CartForm, CartProduct, CartsPage};
pub use auth::{AuthSession, Credential, LoginRequest, LoginResponse, UserProfile};
pub use sync::{MutationKind, SyncState};
