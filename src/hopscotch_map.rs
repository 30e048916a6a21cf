use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    error::Error,
    fmt,
    hash::{BuildHasher, Hash, Hasher},
    marker::PhantomData,
    mem,
};

/// Occupancy ratio above which the slot array doubles.
const LOAD_FACTOR: f64 = 0.5;

/// A slot holding a live entry together with its home bucket.
#[derive(Debug, Clone)]
struct Slot<K, V> {
    /// The key stored in the slot
    key: K,
    /// The value associated with the key
    value: V,
    /// The bucket the key hashed to under the current capacity. An entry may
    /// sit away from its origin, but never as far as the neighborhood bound.
    origin: usize,
}

/// Reasons the probe for an in-range free slot can fail.
enum ProbeOverflow {
    /// Every slot in the table is occupied.
    TableFull,
    /// No occupant in the backward window may legally move into the candidate
    /// slot, so the current neighborhood bound is too small.
    NeighborhoodExhausted,
}

/// A hash table with a bounded probe neighborhood.
///
/// Collisions are resolved hopscotch-style: every entry lives within
/// `neighborhood` slots of the bucket its key hashes to, so a lookup scans a
/// short window instead of an unbounded probe sequence. Insertion keeps the
/// bound by cascading existing entries toward a free slot, and doubles the
/// bound itself only when a neighborhood is genuinely too dense to resolve.
///
/// Keys and values are stored by value and copied in and out, hence the
/// `Clone` bounds. Duplicate-key insertion is a no-op; use
/// [`Self::get_or_insert_default`] or [`Self::get_or_insert_with`] to update
/// in place.
///
/// Note: this implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HopscotchMap<K, V, S = RandomState> {
    /// The slots storing the entries; `None` is a free slot
    slots: Vec<Option<Slot<K, V>>>,
    /// Current number of live entries
    size: usize,
    /// Current neighborhood bound; the cyclic distance from any entry's
    /// origin to its slot is strictly below this
    neighborhood: usize,
    /// The hasher factory used to derive home buckets
    hash_builder: S,
}

impl<K, V> HopscotchMap<K, V, RandomState>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty map with a randomly seeded hasher.
    ///
    /// No slots are allocated until the first insertion.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V, S> Default for HopscotchMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for HopscotchMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HopscotchMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    /// Builds a map from a sequence of pairs. Later pairs with an
    /// already-seen key are ignored, so the first occurrence wins.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> HopscotchMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates an empty map that derives home buckets with `hash_builder`.
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { slots: Vec::new(), size: 0, neighborhood: 1, hash_builder }
    }

    /// Computes the hash for a key with the configured hasher.
    fn hash_value<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Maps a hash to its home bucket. Capacity is always zero or a power of
    /// two, so the modulo reduces to a mask.
    #[allow(clippy::cast_possible_truncation)]
    fn home_index(&self, hash: u64) -> usize {
        (hash as usize) & (self.slots.len().saturating_sub(1))
    }

    /// Steps `shift` slots forward from `pos`, wrapping at the end of the
    /// table.
    fn wrap_forward(&self, pos: usize, shift: usize) -> usize {
        (pos.saturating_add(shift)) & (self.slots.len().saturating_sub(1))
    }

    /// Steps `shift` slots backward from `pos`, wrapping at the start of the
    /// table. Callers never pass a `shift` above the slot count.
    fn wrap_back(&self, pos: usize, shift: usize) -> usize {
        if pos >= shift {
            pos.saturating_sub(shift)
        } else {
            self.slots.len().saturating_sub(shift).saturating_add(pos)
        }
    }

    /// Cyclic distance walked forward from `from` to reach `to`.
    fn forward_distance(&self, from: usize, to: usize) -> usize {
        if to >= from {
            to.saturating_sub(from)
        } else {
            self.slots.len().saturating_sub(from).saturating_add(to)
        }
    }

    /// Direct mutable access to a slot cell. The probe routines only hand
    /// out in-range positions, so the index cannot miss.
    #[allow(clippy::indexing_slicing)]
    fn cell_mut(&mut self, pos: usize) -> &mut Option<Slot<K, V>> {
        &mut self.slots[pos]
    }

    /// Whether placing one more entry would push occupancy past the
    /// load-factor threshold.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn over_threshold(&self) -> bool {
        self.slots.is_empty()
            || (self.size.saturating_add(1)) as f64 / self.slots.len() as f64 > LOAD_FACTOR
    }

    /// Doubles the slot array (or allocates the first slot) and reinserts
    /// every live entry, recomputing origins under the new capacity. The
    /// neighborhood bound carries over and may keep growing during
    /// reinsertion.
    fn expand(&mut self) {
        let new_capacity = self.slots.len().saturating_mul(2).max(1);
        let old_slots = mem::replace(&mut self.slots, vec![None; new_capacity]);
        self.size = 0;
        for slot in old_slots.into_iter().flatten() {
            self.place(slot.key, slot.value);
        }
    }

    /// Scans forward cyclically from `home` for the nearest free slot.
    fn nearest_free(&self, home: usize) -> Option<usize> {
        (1..self.slots.len())
            .map(|shift| self.wrap_forward(home, shift))
            .find(|&pos| matches!(self.slots.get(pos), Some(None)))
    }

    /// Moves the nearest occupant that may legally live at `free` from the
    /// window behind it into it, and returns the slot that occupant vacated.
    /// `None` means nothing in the window is allowed to move under the
    /// current neighborhood bound.
    fn pull_into_range(&mut self, free: usize) -> Option<usize> {
        for shift in 1..self.neighborhood {
            let source = self.wrap_back(free, shift);
            let movable = match self.slots.get(source) {
                Some(Some(slot)) => self.forward_distance(slot.origin, free) < self.neighborhood,
                _ => false,
            };
            if movable {
                let moved = self.cell_mut(source).take();
                *self.cell_mut(free) = moved;
                return Some(source);
            }
        }
        None
    }

    /// Finds a free slot within the neighborhood of `home`, cascading
    /// occupants toward the nearest free slot when it starts out of range.
    fn free_slot_within(&mut self, home: usize) -> Result<usize, ProbeOverflow> {
        if matches!(self.slots.get(home), Some(None)) {
            return Ok(home);
        }
        let mut candidate = self.nearest_free(home).ok_or(ProbeOverflow::TableFull)?;
        while self.forward_distance(home, candidate) >= self.neighborhood {
            candidate = self
                .pull_into_range(candidate)
                .ok_or(ProbeOverflow::NeighborhoodExhausted)?;
        }
        Ok(candidate)
    }

    /// Places a key that is not present, growing capacity or the
    /// neighborhood bound until a slot within range of the key's home bucket
    /// is free. Returns the claimed slot index and the stored value.
    ///
    /// Both growth paths restart the whole placement from the load check,
    /// since a capacity change moves the home bucket and a bound change
    /// alters which slots count as in range table-wide.
    fn place(&mut self, key: K, value: V) -> (usize, &mut V) {
        let (home, pos) = loop {
            if self.over_threshold() {
                self.expand();
            }
            let home = self.home_index(self.hash_value(&key));
            match self.free_slot_within(home) {
                Ok(pos) => break (home, pos),
                Err(ProbeOverflow::TableFull) => self.expand(),
                Err(ProbeOverflow::NeighborhoodExhausted) => {
                    self.neighborhood = self.neighborhood.saturating_mul(2);
                }
            }
        };
        self.size = self.size.saturating_add(1);
        let slot = self.cell_mut(pos).insert(Slot { key, value, origin: home });
        (pos, &mut slot.value)
    }

    /// Inserts a key-value pair and returns the slot index holding the key.
    ///
    /// If the key is already present this is a no-op: the existing entry's
    /// slot is returned and its value is left untouched. Slot indices stay
    /// valid until the next insertion, removal, `clear`, or capacity change.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        match self.find(&key) {
            Some(existing) => existing,
            None => self.place(key, value).0,
        }
    }

    /// Returns the slot index currently holding `key`.
    ///
    /// Scans the `neighborhood` consecutive slots starting at the key's home
    /// bucket; the neighborhood invariant puts any present key inside that
    /// window.
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.slots.is_empty() {
            return None;
        }
        let home = self.home_index(self.hash_value(key));
        for shift in 0..self.neighborhood {
            let pos = self.wrap_forward(home, shift);
            if let Some(Some(slot)) = self.slots.get(pos) {
                if slot.key.borrow() == key {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Retrieves the value for a given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key)?;
        self.slots.get(pos).and_then(Option::as_ref).map(|slot| &slot.value)
    }

    /// Retrieves a mutable reference to the value for a given key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key)?;
        self.slots.get_mut(pos).and_then(Option::as_mut).map(|slot| &mut slot.value)
    }

    /// Retrieves the value for `key` or reports its absence, without ever
    /// mutating the map.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when no entry holds `key`.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, inserting one
    /// produced by `default` when the key is absent.
    ///
    /// This is the insert-or-update path for value types without a default;
    /// writing through the returned reference overwrites, which
    /// [`Self::insert`] deliberately never does.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        match self.find(&key) {
            Some(pos) => {
                // `find` only returns occupied slots; filling here is safer
                // than unwrap().
                let slot = self
                    .cell_mut(pos)
                    .get_or_insert_with(|| Slot { key, value: default(), origin: pos });
                &mut slot.value
            }
            None => self.place(key, default()).1,
        }
    }

    /// Returns a mutable reference to the value for `key`, inserting
    /// `V::default()` first when the key is absent.
    ///
    /// The index-style accessor. It never fails; the price is the
    /// `V: Default` bound, the one constraint on value types beyond `Clone`.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// The slot is simply freed; neighbors are not compacted back toward
    /// their origins, so local density only falls at the next capacity
    /// doubling or [`Self::clear`].
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key)?;
        let slot = self.slots.get_mut(pos).and_then(Option::take)?;
        self.size = self.size.saturating_sub(1);
        Some(slot.value)
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// The order is an artifact of physical layout, not insertion order, and
    /// is not preserved across mutations that move entries.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0, _marker: PhantomData }
    }

    /// Clears the map, discarding all slots.
    ///
    /// Capacity and the neighborhood bound both return to their initial
    /// values, which no other operation ever shrinks.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.size = 0;
        self.neighborhood = 1;
    }

    /// Returns the number of slots in the map.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor of the map.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() { 0.0 } else { self.size as f64 / self.slots.len() as f64 }
    }

    /// Returns the current neighborhood bound.
    ///
    /// Every entry lives within this many slots of its home bucket, so a
    /// lookup scans at most this many slots. The bound starts at 1, doubles
    /// whenever a displacement cascade cannot free a slot in range, and
    /// resets only on [`Self::clear`].
    #[must_use]
    pub fn neighborhood(&self) -> usize {
        self.neighborhood
    }

    /// Returns a reference to the map's hasher factory.
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

/// Iterator over the entries of the map in slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The slot array being traversed
    slots: &'a [Option<Slot<K, V>>],
    /// Current slot index; traversal ends when it reaches the slot count
    index: usize,
    /// Phantom data to hold the lifetime and type parameters
    _marker: PhantomData<&'a (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.slots.len() {
            let current = self.slots.get(self.index);
            self.index = self.index.saturating_add(1);
            if let Some(Some(slot)) = current {
                return Some((&slot.key, &slot.value));
            }
        }
        None
    }
}

/// Error returned by [`HopscotchMap::try_get`] when the key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found in table")
    }
}

impl Error for KeyNotFound {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::fmt::Debug;
    use std::hash::BuildHasherDefault;

    /// Hasher that collapses every key onto a handful of home buckets, to
    /// force displacement cascades and neighborhood growth.
    #[derive(Debug, Default)]
    struct ClusteringHasher(u64);

    impl Hasher for ClusteringHasher {
        fn finish(&self) -> u64 {
            self.0 % 3
        }

        fn write(&mut self, bytes: &[u8]) {
            for &byte in bytes {
                self.0 = self.0.wrapping_add(u64::from(byte));
            }
        }
    }

    /// Map whose keys all land on three home buckets.
    type ClusteredMap<V> = HopscotchMap<usize, V, BuildHasherDefault<ClusteringHasher>>;

    /// Checks the neighborhood bound and key uniqueness over every slot, and
    /// that the size counter agrees with actual occupancy.
    fn assert_invariants<K, V, S>(map: &HopscotchMap<K, V, S>)
    where
        K: Eq + Hash + Clone + Debug,
        V: Clone,
        S: BuildHasher,
    {
        let mut seen = Vec::new();
        for (index, cell) in map.slots.iter().enumerate() {
            if let Some(slot) = cell {
                let distance = map.forward_distance(slot.origin, index);
                assert!(
                    distance < map.neighborhood,
                    "entry {:?} sits {} slots from its origin, bound is {}",
                    slot.key,
                    distance,
                    map.neighborhood,
                );
                assert!(!seen.contains(&slot.key), "key {:?} occupies two slots", slot.key);
                seen.push(slot.key.clone());
            }
        }
        assert_eq!(seen.len(), map.len());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HopscotchMap::new();
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);
        map.insert("key3".to_string(), 3);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
    }

    #[test]
    fn test_duplicate_insert_keeps_first_value() {
        let mut map = HopscotchMap::new();
        let first = map.insert("key1".to_string(), 1);
        let second = map.insert("key1".to_string(), 10);

        assert_eq!(first, second);
        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_find_agrees_with_insert_location() {
        let mut map = HopscotchMap::new();
        let pos = map.insert(7_u32, "seven");

        assert_eq!(map.find(&7_u32), Some(pos));
        assert_eq!(map.find(&8_u32), None);
    }

    #[test]
    fn test_growth_from_empty() {
        let mut map = HopscotchMap::new();
        assert_eq!(map.capacity(), 0);

        map.insert(1_u32, 10);
        map.insert(2_u32, 20);
        map.insert(3_u32, 30);

        // Capacity 0 becomes 1 on the first insert and doubles whenever
        // (size + 1) / capacity would exceed one half.
        assert!(map.capacity() >= 4);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&2), Some(&20));

        assert_eq!(map.remove(&2), Some(20));
        assert_eq!(map.get(&2), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_construct_from_list_first_wins() {
        let map: HopscotchMap<String, i32> = [
            ("a".to_string(), 1),
            ("a".to_string(), 2),
            ("b".to_string(), 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.try_get("a"), Ok(&1));
        assert_eq!(map.try_get("b"), Ok(&3));
    }

    #[test]
    fn test_remove() {
        let mut map = HopscotchMap::new();
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);

        assert_eq!(map.remove("key1"), Some(1));
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.remove("key1"), None);
    }

    #[test]
    fn test_resize_preserves_content() {
        let mut map = HopscotchMap::new();
        for i in 0..100_u64 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.len(), 100);
        // The 0.5 threshold keeps at least twice as many slots as entries.
        assert!(map.capacity() >= 200);
        assert!(map.load_factor() <= 0.5);
        for i in 0..100_u64 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
        assert_invariants(&map);
    }

    #[test]
    fn test_neighborhood_invariant_under_clustering() {
        let mut map: ClusteredMap<usize> = HopscotchMap::with_hasher(BuildHasherDefault::default());
        for i in 0..64 {
            map.insert(i, i);
            assert_invariants(&map);
        }

        // Dozens of keys over three home buckets cannot fit a bound of 1.
        assert!(map.neighborhood() > 1);
        for i in 0..64 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn test_erase_under_clustering() {
        let mut map: ClusteredMap<usize> = HopscotchMap::with_hasher(BuildHasherDefault::default());
        for i in 0..32 {
            map.insert(i, i);
        }
        for i in (0..32).step_by(2) {
            assert_eq!(map.remove(&i), Some(i));
            assert_invariants(&map);
        }

        assert_eq!(map.len(), 16);
        for i in 0..32 {
            let expected = if i % 2 == 0 { None } else { Some(&i) };
            assert_eq!(map.get(&i), expected);
        }
    }

    #[test]
    fn test_clear_resets() {
        let mut map = HopscotchMap::new();
        for i in 0..20_u32 {
            map.insert(i, i);
        }
        assert!(map.capacity() >= 40);

        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 0);
        assert_eq!(map.neighborhood(), 1);
        assert_eq!(map.get(&3), None);

        map.insert(3_u32, 3);
        assert_eq!(map.get(&3), Some(&3));
    }

    #[test]
    fn test_iteration_completeness() {
        let mut map = HopscotchMap::new();
        for i in 0..20_u32 {
            map.insert(i, i + 100);
        }

        let mut visited: Vec<u32> = map.iter().map(|(&k, _)| k).collect();
        assert_eq!(visited.len(), map.len());
        visited.sort_unstable();
        visited.dedup();
        assert_eq!(visited.len(), 20);

        for (k, v) in map.iter() {
            assert_eq!(*v, *k + 100);
        }
    }

    #[test]
    fn test_get_or_insert_default() {
        let mut map = HopscotchMap::new();
        map.insert("present".to_string(), 5);

        assert_eq!(*map.get_or_insert_default("present".to_string()), 5);
        assert_eq!(map.len(), 1);

        *map.get_or_insert_default("absent".to_string()) += 7;
        assert_eq!(map.get("absent"), Some(&7));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_or_insert_with_updates_in_place() {
        let mut map = HopscotchMap::new();
        map.insert("counter".to_string(), 1);

        *map.get_or_insert_with("counter".to_string(), || 0) = 9;
        assert_eq!(map.get("counter"), Some(&9));

        let fresh = *map.get_or_insert_with("fresh".to_string(), || 42);
        assert_eq!(fresh, 42);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_try_get() {
        let mut map = HopscotchMap::new();
        map.insert("key1".to_string(), 1);

        assert_eq!(map.try_get("key1"), Ok(&1));
        assert_eq!(map.try_get("key2"), Err(KeyNotFound));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut map = HopscotchMap::new();
        map.insert("key1".to_string(), 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map = HopscotchMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        map.insert("key1".to_string(), 1);
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);

        map.insert("key2".to_string(), 2);
        assert_eq!(map.len(), 2);

        map.remove("key1");
        assert_eq!(map.len(), 1);

        map.remove("key2");
        assert!(map.is_empty());
    }

    #[test]
    fn test_hasher_accessor() {
        let map: ClusteredMap<u32> = HopscotchMap::with_hasher(BuildHasherDefault::default());
        let first = map.hasher().hash_one(42_usize);
        let second = map.hasher().hash_one(42_usize);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn churn_matches_std_model(
            ops in proptest::collection::vec((0..32_usize, any::<u32>(), any::<bool>()), 0..200),
        ) {
            let mut map = HopscotchMap::new();
            let mut model = HashMap::new();

            for (key, value, is_insert) in ops {
                if is_insert {
                    map.insert(key, value);
                    model.entry(key).or_insert(value);
                } else {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
            }

            prop_assert_eq!(map.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(map.get(key), Some(value));
            }
            assert_invariants(&map);
        }

        #[test]
        fn clustered_churn_keeps_invariants(
            keys in proptest::collection::vec(0..24_usize, 0..150),
        ) {
            let mut map: ClusteredMap<usize> =
                HopscotchMap::with_hasher(BuildHasherDefault::default());

            for key in keys {
                if map.find(&key).is_some() {
                    map.remove(&key);
                } else {
                    map.insert(key, key);
                }
                assert_invariants(&map);
            }
        }
    }
}
