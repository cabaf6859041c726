// ============================================================================
// COLLECTION - Snapshot inmutable + helpers de reconciliación
// ============================================================================
// Cada mutación produce una colección NUEVA; nunca se edita un item en sitio.
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use super::backend::SyncItem;
use crate::models::ItemId;

/// Secuencia ordenada de items con ids únicos
#[derive(Debug)]
pub struct Collection<T> {
    items: Rc<Vec<T>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(Vec::new()),
        }
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: SyncItem> Collection<T> {
    /// Construye una colección a partir de un listado remoto.
    /// Ids repetidos se colapsan: posición de la primera aparición, valor de la última.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        let mut dropped = 0usize;

        for item in items {
            match unique.iter().position(|existing| existing.id() == item.id()) {
                Some(index) => {
                    unique[index] = item;
                    dropped += 1;
                }
                None => unique.push(item),
            }
        }

        if dropped > 0 {
            log::warn!("⚠️ {} items con id repetido colapsados al cargar", dropped);
        }

        Self {
            items: Rc::new(unique),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(SyncItem::id).collect()
    }

    /// Siguiente id local: `max + 1`, o `1` si está vacía
    pub fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(SyncItem::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|item| seen.insert(item.id()))
    }

    /// Reemplaza en su posición el item con el mismo id, o lo añade al final
    pub fn upserted(&self, item: T) -> Self {
        let mut items: Vec<T> = self.items.as_ref().clone();
        match items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => items[index] = item,
            None => items.push(item),
        }
        Self {
            items: Rc::new(items),
        }
    }

    /// `None` si no hay ningún item con ese id
    pub fn replaced(&self, item: T) -> Option<Self> {
        let index = self.items.iter().position(|existing| existing.id() == item.id())?;
        let mut items: Vec<T> = self.items.as_ref().clone();
        items[index] = item;
        Some(Self {
            items: Rc::new(items),
        })
    }

    /// `None` si no hay ningún item con ese id
    pub fn without(&self, id: ItemId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items: Vec<T> = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        Some(Self {
            items: Rc::new(items),
        })
    }
}

/// Cambio a aplicar sobre la colección cuando una operación termina
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    ReplaceAll(Vec<T>),
    Upsert(T),
    Replace(T),
    Remove(ItemId),
}

impl<T: SyncItem> Effect<T> {
    /// Aplica el efecto. Devuelve la nueva colección, o `None` si no cambia nada.
    pub fn apply(self, current: &Collection<T>) -> Option<Collection<T>> {
        match self {
            Effect::ReplaceAll(items) => Some(Collection::from_items(items)),
            Effect::Upsert(item) => Some(current.upserted(item)),
            Effect::Replace(item) => current.replaced(item),
            Effect::Remove(id) => current.without(id),
        }
    }
}
