#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::oneshot;

use shop_dashboard_pwa::error::{SyncError, SyncResult};
use shop_dashboard_pwa::models::{Cart, CartDraft, ItemId, Product, ProductDraft, ProductsPage};
use shop_dashboard_pwa::sync::{
    DraftOf, LocalOnly, NetworkBacked, RemoteResource, RemoteSource, Synchronizer,
};

// ============================================================================
// Helpers
// ============================================================================

pub fn product(id: ItemId, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: None,
        category: None,
        thumbnail: None,
    }
}

pub fn product_draft(title: &str, price: f64) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        price,
    }
}

pub fn cart(id: ItemId, user_id: u64, total: f64) -> Cart {
    Cart {
        id,
        products: Vec::new(),
        total,
        discounted_total: total,
        user_id,
        total_products: 1,
        total_quantity: 1,
    }
}

pub fn cart_draft(user_id: u64, total: f64) -> CartDraft {
    CartDraft {
        user_id,
        total_products: 1,
        total_quantity: 1,
        total,
        discounted_total: total,
    }
}

pub fn ids<T: shop_dashboard_pwa::sync::SyncItem>(
    snapshot: &shop_dashboard_pwa::sync::Collection<T>,
) -> Vec<ItemId> {
    snapshot.ids()
}

// ============================================================================
// Fake products endpoint (solo lectura)
// ============================================================================

#[derive(Default)]
pub struct FakeProducts {
    pub items: RefCell<Vec<Product>>,
    pub fail: Cell<bool>,
    /// Responde 200 con un cuerpo que no encaja con `{ products: [...] }`
    pub malformed: Cell<bool>,
    pub fetches: Cell<usize>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeProducts {
    pub fn with_items(items: Vec<Product>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Self::default()
        }
    }

    /// El próximo fetch espera hasta que se envíe por el sender devuelto
    pub fn gate_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }
}

#[async_trait(?Send)]
impl RemoteSource for FakeProducts {
    type Item = Product;

    fn name(&self) -> &str {
        "fake-products"
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Product>> {
        self.fetches.set(self.fetches.get() + 1);
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        if self.fail.get() {
            return Err(SyncError::network("connection refused"));
        }
        if self.malformed.get() {
            let body = r#"{"products":[{"id":1,"title":"A"}]}"#;
            return serde_json::from_str::<ProductsPage>(body)
                .map(|page| page.products)
                .map_err(|e| SyncError::Deserialization(e.to_string()));
        }
        Ok(self.items.borrow().clone())
    }
}

pub type LocalProducts = Synchronizer<LocalOnly<FakeProducts, ProductDraft>>;

pub fn local_products(items: Vec<Product>) -> LocalProducts {
    Synchronizer::new(LocalOnly::new(FakeProducts::with_items(items)))
}

// ============================================================================
// Fake carts resource (CRUD, el servidor asigna ids)
// ============================================================================

pub struct FakeCarts {
    pub server: RefCell<Vec<Cart>>,
    pub fail: Cell<bool>,
    pub calls: Cell<usize>,
    /// Id devuelto en lugar del pedido (deriva del servidor)
    pub echo_id: Cell<Option<ItemId>>,
    next_id: Cell<ItemId>,
    update_gates: RefCell<HashMap<ItemId, oneshot::Receiver<()>>>,
}

impl FakeCarts {
    pub fn with_carts(carts: Vec<Cart>) -> Self {
        Self {
            server: RefCell::new(carts),
            fail: Cell::new(false),
            calls: Cell::new(0),
            echo_id: Cell::new(None),
            next_id: Cell::new(51),
            update_gates: RefCell::new(HashMap::new()),
        }
    }

    /// El próximo update de `id` espera al sender devuelto
    pub fn gate_update(&self, id: ItemId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.update_gates.borrow_mut().insert(id, rx);
        tx
    }

    fn check(&self) -> SyncResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail.get() {
            Err(SyncError::http(500, "Internal Server Error"))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl RemoteSource for FakeCarts {
    type Item = Cart;

    fn name(&self) -> &str {
        "fake-carts"
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Cart>> {
        self.check()?;
        Ok(self.server.borrow().clone())
    }
}

#[async_trait(?Send)]
impl RemoteResource for FakeCarts {
    type Draft = CartDraft;

    async fn create(&self, draft: &CartDraft) -> SyncResult<Cart> {
        self.check()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = draft.build(id);
        self.server.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ItemId, draft: &CartDraft) -> SyncResult<Cart> {
        let gate = self.update_gates.borrow_mut().remove(&id);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.check()?;

        let existing = self.server.borrow().iter().find(|c| c.id == id).cloned();
        let mut updated = match existing {
            Some(existing) => draft.overlay(&existing),
            None => draft.build(id),
        };
        if let Some(other) = self.echo_id.get() {
            updated.id = other;
        }
        Ok(updated)
    }

    async fn delete(&self, id: ItemId) -> SyncResult<()> {
        self.check()?;
        self.server.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }
}

pub type RemoteCarts = Synchronizer<NetworkBacked<FakeCarts>>;

pub fn remote_carts(carts: Vec<Cart>) -> RemoteCarts {
    Synchronizer::new(NetworkBacked::new(FakeCarts::with_carts(carts)))
}
