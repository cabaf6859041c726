// ============================================================================
// SYNCHRONIZER - Colección local reflejo de una colección remota
// ============================================================================
// Dueño exclusivo de la colección. La UI solo recibe snapshots.
// Todas las operaciones toman &self: una instancia se comparte vía Rc con las
// tareas async de la UI (executor single-thread).
// ============================================================================

use std::cell::{Cell, RefCell};

use super::backend::{MutationBackend, SyncItem, SyncPolicy};
use super::collection::{Collection, Effect};
use super::sequencer::{Sequencer, Ticket};
use crate::error::{SyncError, SyncResult};
use crate::models::{ItemId, MutationKind, SyncState};
use crate::state::{ReactiveState, SubscriptionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadPhase {
    NotLoaded,
    Loading,
    Loaded,
}

/// Intención en curso. Vive lo que dura una llamada a create/update/delete;
/// al soltarse libera su turno.
pub struct PendingMutation<'a, B: MutationBackend> {
    pub kind: MutationKind,
    pub target_id: Option<ItemId>,
    pub payload: Option<&'a B::Draft>,
    ticket: Option<Ticket<'a>>,
    owner: &'a Synchronizer<B>,
}

impl<B: MutationBackend> PendingMutation<'_, B> {
    pub fn seq(&self) -> u64 {
        self.ticket.as_ref().map_or(0, Ticket::seq)
    }

    /// Línea de log: `update #3 -> 2 {payload}`
    pub fn describe(&self) -> String {
        let mut line = format!("{} #{}", self.kind, self.seq());
        if let Some(id) = self.target_id {
            line.push_str(&format!(" -> {}", id));
        }
        if let Some(payload) = self.payload {
            line.push_str(&format!(" {:?}", payload));
        }
        line
    }

    async fn turn(&self) {
        if let Some(ticket) = &self.ticket {
            ticket.turn().await;
        }
    }
}

impl<B: MutationBackend> Drop for PendingMutation<'_, B> {
    fn drop(&mut self) {
        // Primero se libera el turno: los subscribers ya ven el contador actualizado
        drop(self.ticket.take());
        self.owner.collection.notify();
    }
}

pub struct Synchronizer<B: MutationBackend> {
    backend: B,
    collection: ReactiveState<Collection<B::Item>>,
    sequencer: RefCell<Sequencer>,
    phase: Cell<LoadPhase>,
    last_error: RefCell<Option<SyncError>>,
}

impl<B: MutationBackend> Synchronizer<B> {
    /// La política queda fijada por el backend elegido
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            collection: ReactiveState::new(Collection::default()),
            sequencer: RefCell::new(Sequencer::new()),
            phase: Cell::new(LoadPhase::NotLoaded),
            last_error: RefCell::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn policy(&self) -> SyncPolicy {
        self.backend.policy()
    }

    // ==========================================
    // LECTURA
    // ==========================================

    pub fn snapshot(&self) -> Collection<B::Item> {
        self.collection.get()
    }

    pub fn get(&self, id: ItemId) -> Option<B::Item> {
        self.collection.with(|items| items.get(id).cloned())
    }

    pub fn len(&self) -> usize {
        self.collection.with(Collection::len)
    }

    pub fn is_empty(&self) -> bool {
        self.collection.with(Collection::is_empty)
    }

    pub fn is_loaded(&self) -> bool {
        self.phase.get() == LoadPhase::Loaded
    }

    pub fn last_error(&self) -> Option<SyncError> {
        self.last_error.borrow().clone()
    }

    pub fn state(&self) -> SyncState {
        if self.phase.get() == LoadPhase::Loading {
            return SyncState::Syncing;
        }
        let count = self.sequencer.borrow().outstanding();
        if count > 0 {
            return SyncState::Pending { count };
        }
        if let Some(err) = self.last_error.borrow().as_ref() {
            return SyncState::Error {
                message: err.to_string(),
            };
        }
        match self.phase.get() {
            LoadPhase::Loaded => SyncState::Synced,
            _ => SyncState::Idle,
        }
    }

    /// El callback se llama tras cada cambio de colección o de estado
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.collection.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.collection.unsubscribe(id);
    }

    // ==========================================
    // CARGA
    // ==========================================

    /// Carga inicial. Solo válida con la colección en su estado inicial vacío.
    pub async fn load(&self) -> SyncResult<usize> {
        if self.phase.get() != LoadPhase::NotLoaded || !self.is_empty() {
            log::warn!("⚠️ [{}] load() ignorado: colección ya cargada", self.backend.name());
            return Err(SyncError::AlreadyLoaded);
        }

        log::info!("📥 [{}] Cargando colección remota...", self.backend.name());
        self.phase.set(LoadPhase::Loading);
        self.collection.notify();

        let ticket = Ticket::issue(&self.sequencer);
        match self.backend.fetch_all().await {
            Ok(items) => {
                ticket.turn().await;
                self.apply(Effect::ReplaceAll(items));
                let count = self.len();
                self.phase.set(LoadPhase::Loaded);
                self.clear_error();
                drop(ticket);
                self.collection.notify();
                log::info!("✅ [{}] {} items cargados", self.backend.name(), count);
                Ok(count)
            }
            Err(err) => {
                self.phase.set(LoadPhase::NotLoaded);
                self.record_error(&err);
                drop(ticket);
                self.collection.notify();
                Err(err)
            }
        }
    }

    /// Recarga completa: reemplaza la colección local sin merge
    pub async fn reload(&self) -> SyncResult<usize> {
        log::info!("🔄 [{}] Recarga completa...", self.backend.name());
        let previous = self.phase.replace(LoadPhase::Loading);
        let ticket = Ticket::issue(&self.sequencer);
        self.collection.notify();

        let result = self.backend.fetch_all().await;
        let outcome = match result {
            Ok(items) => {
                ticket.turn().await;
                self.apply(Effect::ReplaceAll(items));
                self.phase.set(LoadPhase::Loaded);
                self.clear_error();
                Ok(self.len())
            }
            Err(err) => {
                self.phase.set(previous);
                self.record_error(&err);
                Err(err)
            }
        };
        drop(ticket);
        self.collection.notify();
        outcome
    }

    // ==========================================
    // MUTACIONES
    // ==========================================

    pub async fn create(&self, draft: B::Draft) -> SyncResult<B::Item> {
        let pending = self.begin(MutationKind::Create, None, Some(&draft));
        let current = self.base_snapshot(&pending).await;

        let item = match self.backend.create(&current, &draft).await {
            Ok(item) => item,
            Err(err) => return Err(self.fail(&pending, err)),
        };

        pending.turn().await;
        if self.collection.with(|items| items.contains(item.id())) {
            log::warn!(
                "⚠️ [{}] id {} ya presente: el servidor manda, se reemplaza",
                self.backend.name(),
                item.id()
            );
        }
        self.apply(Effect::Upsert(item.clone()));
        self.clear_error();
        log::info!("✅ [{}] Item {} creado", self.backend.name(), item.id());
        Ok(item)
    }

    /// `Ok(None)` si no hay ningún item con `id` (no-op)
    pub async fn update(&self, id: ItemId, draft: B::Draft) -> SyncResult<Option<B::Item>> {
        let pending = self.begin(MutationKind::Update, Some(id), Some(&draft));
        let current = self.base_snapshot(&pending).await;

        let item = match self.backend.update(&current, id, &draft).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                log::info!("ℹ️ [{}] update({}) sin item: no-op", self.backend.name(), id);
                return Ok(None);
            }
            Err(err) => return Err(self.fail(&pending, err)),
        };

        // Respuesta con otro id: se rechaza en vez de reubicar el item
        if item.id() != id {
            let err = SyncError::IdMismatch {
                requested: id,
                returned: item.id(),
            };
            return Err(self.fail(&pending, err));
        }

        pending.turn().await;
        let replaced = self.apply_replace(item);
        self.clear_error();
        if replaced.is_none() {
            log::info!("ℹ️ [{}] Item {} ya no está en la colección", self.backend.name(), id);
        }
        Ok(replaced)
    }

    /// `Ok(false)` si no había ningún item con `id`
    pub async fn delete(&self, id: ItemId) -> SyncResult<bool> {
        let pending = self.begin(MutationKind::Delete, Some(id), None);
        let current = self.base_snapshot(&pending).await;

        // Fail-closed: si la llamada falla el item se queda
        match self.backend.delete(&current, id).await {
            Ok(true) => {}
            Ok(false) => return Ok(false),
            Err(err) => return Err(self.fail(&pending, err)),
        }

        pending.turn().await;
        let removed = self.apply(Effect::Remove(id));
        self.clear_error();
        if removed {
            log::info!("🗑️ [{}] Item {} eliminado", self.backend.name(), id);
        }
        Ok(removed)
    }

    // ==========================================
    // INTERNOS
    // ==========================================

    fn begin<'a>(
        &'a self,
        kind: MutationKind,
        target_id: Option<ItemId>,
        payload: Option<&'a B::Draft>,
    ) -> PendingMutation<'a, B> {
        let pending = PendingMutation {
            kind,
            target_id,
            payload,
            ticket: Some(Ticket::issue(&self.sequencer)),
            owner: self,
        };
        log::info!("📤 [{}] {}", self.backend.name(), pending.describe());
        self.collection.notify();
        pending
    }

    /// Snapshot sobre el que el backend calcula la mutación. La política local
    /// calcula contra el estado en su turno (ids `max + 1` siempre frescos).
    async fn base_snapshot(&self, pending: &PendingMutation<'_, B>) -> Collection<B::Item> {
        if self.policy() == SyncPolicy::LocalOnly {
            pending.turn().await;
        }
        self.snapshot()
    }

    fn fail(&self, pending: &PendingMutation<'_, B>, err: SyncError) -> SyncError {
        log::error!(
            "❌ [{}] {} falló: {}",
            self.backend.name(),
            pending.describe(),
            err
        );
        self.record_error(&err);
        err
    }

    /// Aplica el efecto; `false` si no cambió nada
    fn apply(&self, effect: Effect<B::Item>) -> bool {
        let next = self.collection.with(|current| effect.apply(current));
        match next {
            Some(collection) => {
                debug_assert!(collection.has_unique_ids());
                self.collection.set(collection);
                true
            }
            None => false,
        }
    }

    fn apply_replace(&self, item: B::Item) -> Option<B::Item> {
        self.apply(Effect::Replace(item.clone())).then_some(item)
    }

    fn record_error(&self, err: &SyncError) {
        *self.last_error.borrow_mut() = Some(err.clone());
    }

    fn clear_error(&self) {
        self.last_error.borrow_mut().take();
    }
}
