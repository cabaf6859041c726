// ============================================================================
// MUTATION BACKENDS - Política de mutación enchufable
// ============================================================================
// - LocalOnly:     carga remota una vez, después todo es local (sin red)
// - NetworkBacked: cada mutación hace round-trip y la respuesta manda
// ============================================================================

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;

use super::collection::Collection;
use crate::error::SyncResult;
use crate::models::ItemId;

/// Registro con id estable dentro de una colección
pub trait SyncItem: Clone + fmt::Debug + 'static {
    fn id(&self) -> ItemId;
}

/// Borrador de campos editables para un tipo de item
pub trait DraftOf<T> {
    /// Item nuevo con un id asignado localmente
    fn build(&self, id: ItemId) -> T;

    /// Superpone los campos del borrador sobre un item existente (conserva id y resto)
    fn overlay(&self, base: &T) -> T;
}

/// Fuente remota de solo lectura (listado completo)
#[async_trait(?Send)]
pub trait RemoteSource {
    type Item: SyncItem;

    /// Nombre corto para los logs
    fn name(&self) -> &str;

    async fn fetch_all(&self) -> SyncResult<Vec<Self::Item>>;
}

/// Recurso remoto con CRUD completo
#[async_trait(?Send)]
pub trait RemoteResource: RemoteSource {
    type Draft: fmt::Debug;

    async fn create(&self, draft: &Self::Draft) -> SyncResult<Self::Item>;
    async fn update(&self, id: ItemId, draft: &Self::Draft) -> SyncResult<Self::Item>;
    async fn delete(&self, id: ItemId) -> SyncResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPolicy {
    LocalOnly,
    NetworkBacked,
}

/// Capacidad que decide CÓMO se materializa cada mutación.
/// El synchronizer decide CUÁNDO y en qué orden se aplica.
#[async_trait(?Send)]
pub trait MutationBackend {
    type Item: SyncItem;
    /// Se vuelca en los logs de cada mutación
    type Draft: fmt::Debug;

    fn policy(&self) -> SyncPolicy;
    fn name(&self) -> &str;

    async fn fetch_all(&self) -> SyncResult<Vec<Self::Item>>;

    /// Item que entra en la colección
    async fn create(
        &self,
        current: &Collection<Self::Item>,
        draft: &Self::Draft,
    ) -> SyncResult<Self::Item>;

    /// Item que reemplaza al existente, `None` si no hay nada que tocar
    async fn update(
        &self,
        current: &Collection<Self::Item>,
        id: ItemId,
        draft: &Self::Draft,
    ) -> SyncResult<Option<Self::Item>>;

    /// `true` si el item debe salir de la colección
    async fn delete(&self, current: &Collection<Self::Item>, id: ItemId) -> SyncResult<bool>;
}

// ============================================================================
// LOCAL ONLY
// ============================================================================

/// Ids asignados localmente (`max + 1`). Pueden colisionar con la secuencia del
/// servidor tras una recarga completa.
pub struct LocalOnly<S, D> {
    source: S,
    _draft: PhantomData<fn() -> D>,
}

impl<S, D> LocalOnly<S, D> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            _draft: PhantomData,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait(?Send)]
impl<S, D> MutationBackend for LocalOnly<S, D>
where
    S: RemoteSource + 'static,
    D: DraftOf<S::Item> + fmt::Debug + 'static,
{
    type Item = S::Item;
    type Draft = D;

    fn policy(&self) -> SyncPolicy {
        SyncPolicy::LocalOnly
    }

    fn name(&self) -> &str {
        self.source.name()
    }

    async fn fetch_all(&self) -> SyncResult<Vec<S::Item>> {
        self.source.fetch_all().await
    }

    async fn create(&self, current: &Collection<S::Item>, draft: &D) -> SyncResult<S::Item> {
        Ok(draft.build(current.next_id()))
    }

    async fn update(
        &self,
        current: &Collection<S::Item>,
        id: ItemId,
        draft: &D,
    ) -> SyncResult<Option<S::Item>> {
        Ok(current.get(id).map(|existing| draft.overlay(existing)))
    }

    async fn delete(&self, current: &Collection<S::Item>, id: ItemId) -> SyncResult<bool> {
        Ok(current.contains(id))
    }
}

// ============================================================================
// NETWORK BACKED
// ============================================================================

/// Sin inserción optimista: solo se aplica lo que el servidor confirma
pub struct NetworkBacked<R> {
    resource: R,
}

impl<R> NetworkBacked<R> {
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }
}

#[async_trait(?Send)]
impl<R> MutationBackend for NetworkBacked<R>
where
    R: RemoteResource + 'static,
{
    type Item = R::Item;
    type Draft = R::Draft;

    fn policy(&self) -> SyncPolicy {
        SyncPolicy::NetworkBacked
    }

    fn name(&self) -> &str {
        self.resource.name()
    }

    async fn fetch_all(&self) -> SyncResult<Vec<R::Item>> {
        self.resource.fetch_all().await
    }

    async fn create(&self, _current: &Collection<R::Item>, draft: &R::Draft) -> SyncResult<R::Item> {
        self.resource.create(draft).await
    }

    async fn update(
        &self,
        _current: &Collection<R::Item>,
        id: ItemId,
        draft: &R::Draft,
    ) -> SyncResult<Option<R::Item>> {
        self.resource.update(id, draft).await.map(Some)
    }

    async fn delete(&self, _current: &Collection<R::Item>, id: ItemId) -> SyncResult<bool> {
        // El cuerpo de la respuesta se ignora; solo cuenta el éxito
        self.resource.delete(id).await?;
        Ok(true)
    }
}
