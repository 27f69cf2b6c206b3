//! Id-keyed arena for simulation entities.
//!
//! # Why slots instead of a `Vec<T>`?
//!
//! Taxis leave the fleet at arbitrary times while passengers still hold
//! their `TaxiId` (and the other way round).  Removing from a plain `Vec`
//! would shift every later element and silently re-point those ids.  Here
//! the id is the slot index, a removed entity leaves a `None` behind, and
//! ids are never handed out twice.
//!
//! Iteration is always in ascending id order, which is the order the
//! stepper processes entities in and therefore part of what makes a seeded
//! run reproducible.

use std::fmt;
use std::marker::PhantomData;

use cab_core::{PassengerId, TaxiId};

/// An id type usable as an [`EntityStore`] key.
pub trait StoreKey: Copy + Eq + fmt::Debug {
    fn from_slot(slot: usize) -> Self;
    fn slot(self) -> usize;
}

impl StoreKey for TaxiId {
    #[inline]
    fn from_slot(slot: usize) -> Self {
        TaxiId(slot as u32)
    }
    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

impl StoreKey for PassengerId {
    #[inline]
    fn from_slot(slot: usize) -> Self {
        PassengerId(slot as u32)
    }
    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

// ── EntityStore ───────────────────────────────────────────────────────────────

pub struct EntityStore<I, T> {
    slots: Vec<Option<T>>,
    live:  usize,
    _key:  PhantomData<I>,
}

impl<I: StoreKey, T> EntityStore<I, T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), live: 0, _key: PhantomData }
    }

    /// Insert the value built by `make`, which receives the new entity's id.
    pub fn insert_with(&mut self, make: impl FnOnce(I) -> T) -> I {
        let id = I::from_slot(self.slots.len());
        self.slots.push(Some(make(id)));
        self.live += 1;
        id
    }

    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: I) -> bool {
        self.get(id).is_some()
    }

    /// Remove and return the entity.  Its id stays retired.
    pub fn remove(&mut self, id: I) -> Option<T> {
        let taken = self.slots.get_mut(id.slot()).and_then(Option::take);
        if taken.is_some() {
            self.live -= 1;
        }
        taken
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (I::from_slot(i), v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (I, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|v| (I::from_slot(i), v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Snapshot of the live ids, for loops that mutate other entities (or
    /// remove this one) while walking the collection.
    pub fn ids(&self) -> Vec<I> {
        self.iter().map(|(id, _)| id).collect()
    }
}

impl<I: StoreKey, T> Default for EntityStore<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: StoreKey, T: fmt::Debug> fmt::Debug for EntityStore<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
