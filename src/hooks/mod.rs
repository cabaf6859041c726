pub mod use_collection;
pub mod use_auth;
pub mod use_products;
pub mod use_carts;

pub use use_collection::{use_collection, CollectionView, SyncHandle};
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_products::{use_products, ProductsHandle, UseProductsHandle};
pub use use_carts::{use_carts, CartsHandle, UseCartsHandle};
