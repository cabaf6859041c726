// ============================================================================
// USE CARTS HOOK - Carritos: cada mutación pasa por la API
// ============================================================================
// Un synchronizer por credential: cambiar de usuario crea uno nuevo.
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_collection, SyncHandle};
use crate::models::{Cart, CartForm, Credential, ItemId, SyncState};
use crate::services::{cart_synchronizer, ApiClient, CartsEndpoint};
use crate::sync::{Collection, NetworkBacked};

pub type CartsHandle = SyncHandle<NetworkBacked<CartsEndpoint>>;

pub struct UseCartsHandle {
    pub items: Collection<Cart>,
    pub state: SyncState,
    pub form_error: Option<String>,
    pub add: Callback<CartForm>,
    pub update: Callback<CartForm>,
    pub remove: Callback<ItemId>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_carts(credential: Credential) -> UseCartsHandle {
    let synchronizer = use_memo(credential, |credential| {
        CartsHandle::new(cart_synchronizer(ApiClient::new(), credential.clone()))
    });
    let synchronizer: CartsHandle = (*synchronizer).clone();
    let form_error = use_state(|| None::<String>);
    let view = use_collection(synchronizer.clone());

    {
        use_effect_with(synchronizer.clone(), move |synchronizer| {
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.load().await {
                    log::error!("❌ Error cargando carritos: {}", e);
                }
            });
            || ()
        });
    }

    let add = {
        let synchronizer = synchronizer.clone();
        let form_error = form_error.clone();
        Callback::from(move |form: CartForm| {
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
                match synchronizer.create(draft).await {
                    Ok(cart) => log::info!("🛒 Carrito {} añadido", cart.id),
                    Err(e) => log::error!("❌ Error creando carrito: {}", e),
                }
            });
        })
    };

    // El id viene del propio formulario (campo "Cart ID")
    let update = {
        let synchronizer = synchronizer.clone();
        let form_error = form_error.clone();
        Callback::from(move |form: CartForm| {
            let parsed = form.target_id().and_then(|id| form.parse().map(|draft| (id, draft)));
            let (id, draft) = match parsed {
                Ok(parsed) => parsed,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.update(id, draft).await {
                    log::error!("❌ Error actualizando carrito {}: {}", id, e);
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
                    log::error!("❌ Error eliminando carrito {}: {}", id, e);
                }
            });
        })
    };

    let reload = {
        let synchronizer = synchronizer.clone();
        Callback::from(move |_| {
            let synchronizer = synchronizer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = synchronizer.reload().await {
                    log::error!("❌ Error recargando carritos: {}", e);
                }
            });
        })
    };

    UseCartsHandle {
        items: view.items,
        state: view.state,
        form_error: (*form_error).clone(),
        add,
        update,
        remove,
        reload,
    }
}
