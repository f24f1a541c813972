//! Specialized collection types

pub use slotmap::{SlotMap, SecondaryMap, Key, KeyData};

/// Typed handle over a slot map key
///
/// The phantom parameter keeps handles of different asset kinds from being
/// mixed up while sharing one key type.
#[derive(Debug)]
pub struct TypedHandle<T> {
    key: slotmap::DefaultKey,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: slotmap::DefaultKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> slotmap::DefaultKey {
        self.key
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Slot map storing values addressed by typed handles
pub struct HandleMap<T> {
    items: SlotMap<slotmap::DefaultKey, T>,
}

impl<T> HandleMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self { items: SlotMap::new() }
    }

    /// Insert a value and return its handle
    pub fn insert(&mut self, value: T) -> TypedHandle<T> {
        TypedHandle::new(self.items.insert(value))
    }

    /// Get a value by handle
    pub fn get(&self, handle: TypedHandle<T>) -> Option<&T> {
        self.items.get(handle.key())
    }

    /// Get a mutable value by handle
    pub fn get_mut(&mut self, handle: TypedHandle<T>) -> Option<&mut T> {
        self.items.get_mut(handle.key())
    }

    /// Replace the value stored behind a handle, returning the old one
    pub fn replace(&mut self, handle: TypedHandle<T>, value: T) -> Option<T> {
        self.items
            .get_mut(handle.key())
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over handles and values
    pub fn iter(&self) -> impl Iterator<Item = (TypedHandle<T>, &T)> {
        self.items.iter().map(|(key, value)| (TypedHandle::new(key), value))
    }
}

impl<T> Default for HandleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_map_insert_get() {
        let mut map = HandleMap::new();
        let a = map.insert("a");
        let b = map.insert("b");

        assert_ne!(a, b);
        assert_eq!(map.get(a), Some(&"a"));
        assert_eq!(map.get(b), Some(&"b"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_handle_map_replace() {
        let mut map = HandleMap::new();
        let handle = map.insert(1);

        assert_eq!(map.replace(handle, 2), Some(1));
        assert_eq!(map.get(handle), Some(&2));
    }
}
