//! Live object store with stable handles.
//!
//! Handles are issued in increasing order and never reused, and removal
//! keeps the survivors in insertion order, so the backing vector is always
//! sorted by handle. Systems collect handles first and remove them in one
//! compaction pass afterwards; nothing is removed mid-iteration.

use crate::entities::SpaceObject;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32);

#[derive(Clone, Debug, Default)]
pub struct ObjectStore {
    slots: Vec<(Handle, SpaceObject)>,
    next: u32,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: SpaceObject) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        self.slots.push((handle, object));
        handle
    }

    pub fn get(&self, handle: Handle) -> Option<&SpaceObject> {
        self.slots
            .binary_search_by_key(&handle, |(h, _)| *h)
            .ok()
            .map(|i| &self.slots[i].1)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &SpaceObject)> + '_ {
        self.slots.iter().map(|(h, o)| (*h, o))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut SpaceObject)> + '_ {
        self.slots.iter_mut().map(|(h, o)| (*h, o))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every marked handle. Duplicates and stale handles are ignored.
    /// Returns how many objects were actually removed.
    pub fn remove_all(&mut self, marked: &[Handle]) -> usize {
        if marked.is_empty() {
            return 0;
        }
        let mut marked = marked.to_vec();
        marked.sort_unstable();
        marked.dedup();

        let before = self.slots.len();
        self.slots.retain(|(h, _)| marked.binary_search(h).is_err());
        before - self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ObjectKind;

    fn asteroid(x: i32) -> SpaceObject {
        SpaceObject::new(ObjectKind::Asteroid, x, 0)
    }

    #[test]
    fn handles_stay_valid_after_removal() {
        let mut store = ObjectStore::new();
        let a = store.insert(asteroid(0));
        let b = store.insert(asteroid(1));
        let c = store.insert(asteroid(2));

        assert_eq!(store.remove_all(&[b]), 1);
        assert!(!store.contains(b));
        assert_eq!(store.get(a).map(|o| o.pos.x), Some(0));
        assert_eq!(store.get(c).map(|o| o.pos.x), Some(2));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut store = ObjectStore::new();
        let a = store.insert(asteroid(0));
        store.remove_all(&[a]);
        let b = store.insert(asteroid(1));
        assert_ne!(a, b);
        assert!(store.get(a).is_none());
    }

    #[test]
    fn remove_all_ignores_duplicates_and_stale_handles() {
        let mut store = ObjectStore::new();
        let a = store.insert(asteroid(0));
        let b = store.insert(asteroid(1));
        store.remove_all(&[a]);

        assert_eq!(store.remove_all(&[a, b, b]), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let mut store = ObjectStore::new();
        let handles: Vec<_> = (0..5).map(|x| store.insert(asteroid(x))).collect();
        store.remove_all(&[handles[1], handles[3]]);

        let xs: Vec<i32> = store.iter().map(|(_, o)| o.pos.x).collect();
        assert_eq!(xs, vec![0, 2, 4]);
    }
}
