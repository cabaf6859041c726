// ============================================================================
// ENDPOINTS - Adaptadores de la API remota para los synchronizers
// ============================================================================
// - Productos: solo lectura remota (sin token), mutaciones locales
// - Carritos:  CRUD remoto, credential explícito en el constructor
// ============================================================================

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::models::{Cart, CartDraft, Credential, ItemId, Product, ProductDraft};
use crate::services::ApiClient;
use crate::sync::{LocalOnly, NetworkBacked, RemoteResource, RemoteSource, Synchronizer};

pub type ProductSynchronizer = Synchronizer<LocalOnly<ProductsEndpoint, ProductDraft>>;
pub type CartSynchronizer = Synchronizer<NetworkBacked<CartsEndpoint>>;

/// Synchronizer de productos: carga remota, mutaciones locales
pub fn product_synchronizer(client: ApiClient) -> ProductSynchronizer {
    Synchronizer::new(LocalOnly::new(ProductsEndpoint::new(client)))
}

/// Synchronizer de carritos: cada mutación pasa por la red
pub fn cart_synchronizer(client: ApiClient, credential: Credential) -> CartSynchronizer {
    Synchronizer::new(NetworkBacked::new(CartsEndpoint::new(client, credential)))
}

#[derive(Clone, Debug)]
pub struct ProductsEndpoint {
    client: ApiClient,
}

impl ProductsEndpoint {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl RemoteSource for ProductsEndpoint {
    type Item = Product;

    fn name(&self) -> &str {
        "products"
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Product>> {
        self.client.list_products().await
    }
}

#[derive(Clone, Debug)]
pub struct CartsEndpoint {
    client: ApiClient,
    credential: Credential,
}

impl CartsEndpoint {
    pub fn new(client: ApiClient, credential: Credential) -> Self {
        Self { client, credential }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

#[async_trait(?Send)]
impl RemoteSource for CartsEndpoint {
    type Item = Cart;

    fn name(&self) -> &str {
        "carts"
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Cart>> {
        self.client.list_carts(&self.credential).await
    }
}

#[async_trait(?Send)]
impl RemoteResource for CartsEndpoint {
    type Draft = CartDraft;

    async fn create(&self, draft: &CartDraft) -> SyncResult<Cart> {
        self.client.create_cart(&self.credential, draft).await
    }

    async fn update(&self, id: ItemId, draft: &CartDraft) -> SyncResult<Cart> {
        self.client.update_cart(&self.credential, id, draft).await
    }

    async fn delete(&self, id: ItemId) -> SyncResult<()> {
        self.client.delete_cart(&self.credential, id).await
    }
}
