// ============================================================================
// USE COLLECTION HOOK - Re-render ante cada cambio de un synchronizer
// ============================================================================

use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::SyncState;
use crate::sync::{Collection, MutationBackend, Synchronizer};

/// Synchronizer compartido entre el hook y sus tareas async.
/// Dos handles son iguales si apuntan a la misma instancia.
pub struct SyncHandle<B: MutationBackend>(Rc<Synchronizer<B>>);

impl<B: MutationBackend> SyncHandle<B> {
    pub fn new(synchronizer: Synchronizer<B>) -> Self {
        Self(Rc::new(synchronizer))
    }
}

impl<B: MutationBackend> Clone for SyncHandle<B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<B: MutationBackend> PartialEq for SyncHandle<B> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<B: MutationBackend> Deref for SyncHandle<B> {
    type Target = Synchronizer<B>;

    fn deref(&self) -> &Synchronizer<B> {
        &self.0
    }
}

/// Lo que un componente necesita para pintar: snapshot + estado
pub struct CollectionView<T> {
    pub items: Collection<T>,
    pub state: SyncState,
}

#[hook]
pub fn use_collection<B>(handle: SyncHandle<B>) -> CollectionView<B::Item>
where
    B: MutationBackend + 'static,
{
    let trigger = use_force_update();

    {
        use_effect_with(handle.clone(), move |handle| {
            let id = handle.subscribe(move || trigger.force_update());
            let handle = handle.clone();
            move || handle.unsubscribe(id)
        });
    }

    CollectionView {
        items: handle.snapshot(),
        state: handle.state(),
    }
}
