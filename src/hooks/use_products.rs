// ============================================================================
// USE PRODUCTS HOOK - Productos: carga remota, edición local
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_collection, SyncHandle};
use crate::models::{ItemId, Product, ProductDraft, ProductForm, SyncState};
use crate::services::{product_synchronizer, ApiClient, ProductsEndpoint};
use crate::sync::{Collection, LocalOnly};

pub type ProductsHandle = SyncHandle<LocalOnly<ProductsEndpoint, ProductDraft>>;

pub struct UseProductsHandle {
    pub items: Collection<Product>,
    pub state: SyncState,
    /// Error de validación del último formulario enviado
    pub form_error: Option<String>,
    pub add: Callback<ProductForm>,
    pub edit: Callback<(ItemId, ProductForm)>,
    pub remove: Callback<ItemId>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_products() -> UseProductsHandle {
    let synchronizer = use_memo((), |_| ProductsHandle::new(product_synchronizer(ApiClient::new())));
    let synchronizer: ProductsHandle = (*synchronizer).clone();
    let form_error = use_state(|| None::<String>);
    let view = use_collection(synchronizer.clone());

    // Carga inicial al montar
    {
        use_effect_with(synchronizer.clone(), move |synchronizer| {
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.load().await {
                    log::error!("❌ Error cargando productos: {}", e);
                }
            });
            || ()
        });
    }

    let add = {
        let synchronizer = synchronizer.clone();
        let form_error = form_error.clone();
        Callback::from(move |form: ProductForm| {
            let draft = match form.parse() {
                Ok(draft) => draft,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.create(draft).await {
                    log::error!("❌ Error creando producto: {}", e);
                }
            });
        })
    };

    let edit = {
        let synchronizer = synchronizer.clone();
        let form_error = form_error.clone();
        Callback::from(move |(id, form): (ItemId, ProductForm)| {
            let draft = match form.parse() {
                Ok(draft) => draft,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.update(id, draft).await {
                    log::error!("❌ Error actualizando producto {}: {}", id, e);
                }
            });
        })
    };

    let remove = {
        let synchronizer = synchronizer.clone();
        Callback::from(move |id: ItemId| {
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.delete(id).await {
                    log::error!("❌ Error eliminando producto {}: {}", id, e);
                }
            });
        })
    };

    // Descarta las ediciones locales
    let reload = {
        let synchronizer = synchronizer.clone();
        Callback::from(move |_| {
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.reload().await {
                    log::error!("❌ Error recargando productos: {}", e);
                }
            });
        })
    };

    UseProductsHandle {
        items: view.items,
        state: view.state,
        form_error: (*form_error).clone(),
        add,
        edit,
        remove,
        reload,
    }
}
