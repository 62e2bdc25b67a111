//! Caller-owned memo of interpretations keyed by number and context.
//!
//! Interpretation text (typically fetched from the report service) depends
//! only on the number and where it appears. The calculators never consult
//! this cache; the presentation layer owns one and passes it around.

use std::collections::HashMap;

use anka_numerology::CoreNumberKind;
use tracing::trace;

/// Where a number is being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberVariant {
    Core(CoreNumberKind),
    /// Compound form of a core number.
    Compound(CoreNumberKind),
    KarmicDebt,
    Mulank,
    Kua,
    /// Digit absent from the Loshu grid.
    Missing,
    /// Digit repeated in the Loshu grid.
    Overloaded,
}

/// Memo map from `(number, variant)` to an interpretation.
#[derive(Debug, Clone)]
pub struct InterpretationCache<V> {
    entries: HashMap<(u32, NumberVariant), V>,
}

impl<V> Default for InterpretationCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> InterpretationCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, number: u32, variant: NumberVariant) -> Option<&V> {
        self.entries.get(&(number, variant))
    }

    /// Insert, returning any previous value.
    pub fn insert(&mut self, number: u32, variant: NumberVariant, value: V) -> Option<V> {
        self.entries.insert((number, variant), value)
    }

    /// Cached value, computing and storing it on a miss.
    pub fn get_or_insert_with(
        &mut self,
        number: u32,
        variant: NumberVariant,
        make: impl FnOnce() -> V,
    ) -> &V {
        self.entries.entry((number, variant)).or_insert_with(|| {
            trace!(number, ?variant, "interpretation cache miss");
            make()
        })
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with) for fallible
    /// producers. Nothing is stored on error.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        number: u32,
        variant: NumberVariant,
        make: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        let key = (number, variant);
        if !self.entries.contains_key(&key) {
            trace!(number, ?variant, "interpretation cache miss");
            let value = make()?;
            self.entries.insert(key, value);
        }
        Ok(&self.entries[&key])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
