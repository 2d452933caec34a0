//! Owner of the live stars.

use crate::entities::{FallingObject, ObjectId, Spawn};

/// Live falling objects in spawn order. Each object (sparkle included) is
/// removed as a single value, so it can leave the store at most once.
#[derive(Clone, Debug)]
pub struct EntityStore {
    objects: Vec<FallingObject>,
    next_id: u64,
    sparkle_size: i32,
}

impl EntityStore {
    pub fn new(sparkle_size: i32) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 0,
            sparkle_size,
        }
    }

    /// Add a star and hand back its identity. Ids are never reused, not even
    /// across [`EntityStore::clear`].
    pub fn insert(&mut self, spawn: Spawn) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(FallingObject::new(id, spawn, self.sparkle_size));
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&FallingObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FallingObject> {
        self.objects.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut FallingObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object matching `pred` in one pass and return them.
    pub fn remove_where(
        &mut self,
        mut pred: impl FnMut(&FallingObject) -> bool,
    ) -> Vec<FallingObject> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.objects.len());
        for object in self.objects.drain(..) {
            if pred(&object) {
                removed.push(object);
            } else {
                kept.push(object);
            }
        }
        self.objects = kept;
        removed
    }

    /// Remove the listed objects. Ids that are absent (or listed twice) are
    /// skipped, so nothing is ever removed twice.
    pub fn remove_ids(&mut self, ids: &[ObjectId]) -> Vec<FallingObject> {
        if ids.is_empty() {
            return Vec::new();
        }
        self.remove_where(|o| ids.contains(&o.id()))
    }

    /// Drop every live object; returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.objects.len();
        self.objects.clear();
        count
    }
}
